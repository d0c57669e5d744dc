use dioxus::prelude::*;
use ui::views::FirstLoginView;

use crate::Route;

#[component]
pub fn FirstLogin() -> Element {
    let nav = use_navigator();
    rsx! {
        FirstLoginView {
            on_completed: move |_| {
                nav.replace(Route::Home {});
            },
            on_navigate_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
