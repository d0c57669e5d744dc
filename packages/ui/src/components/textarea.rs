use dioxus::prelude::*;

use super::field::{control_class, FieldShell};

#[component]
pub fn Textarea(
    #[props(default)] label: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] id: Option<String>,
    value: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default = 3)] rows: u32,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    oninput: EventHandler<String>,
) -> Element {
    let class = control_class(error.is_some(), &class);
    rsx! {
        FieldShell {
            label,
            error,
            html_for: id.clone(),
            textarea {
                id,
                class,
                rows,
                value,
                placeholder,
                disabled,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
