use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Row of filter controls above a table, ending with the Filtrar / Limpar buttons.
#[component]
pub fn TableFilters(
    on_apply: EventHandler<()>,
    on_clear: EventHandler<()>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "mb-6 px-4 sm:px-6 lg:px-8 flex flex-wrap items-end gap-4 {class}",
            {children}
            div {
                class: "flex gap-2",
                Button { onclick: move |_| on_apply.call(()), "Filtrar" }
                Button {
                    variant: ButtonVariant::Neutral,
                    onclick: move |_| on_clear.call(()),
                    "Limpar"
                }
            }
        }
    }
}
