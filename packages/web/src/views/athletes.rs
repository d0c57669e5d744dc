use dioxus::prelude::*;
use ui::views::AthletesView;

#[component]
pub fn Athletes(open_create: bool) -> Element {
    rsx! {
        AthletesView { open_create }
    }
}
