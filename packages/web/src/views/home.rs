use dioxus::prelude::*;
use ui::views::HomeView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        HomeView {
            on_navigate_users: move |_| {
                nav.push(Route::Users { open_create: false });
            },
            on_navigate_athletes: move |_| {
                nav.push(Route::Athletes { open_create: false });
            },
            on_create_user: move |_| {
                nav.push(Route::Users { open_create: true });
            },
            on_create_athlete: move |_| {
                nav.push(Route::Athletes { open_create: true });
            },
        }
    }
}
