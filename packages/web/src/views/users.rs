use dioxus::prelude::*;
use ui::views::UsersView;

#[component]
pub fn Users(open_create: bool) -> Element {
    rsx! {
        UsersView { open_create }
    }
}
