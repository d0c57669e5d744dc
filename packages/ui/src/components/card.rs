use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-neutral-900 border border-neutral-800 rounded-lg p-6 {class}",
            {children}
        }
    }
}
