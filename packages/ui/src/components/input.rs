use dioxus::prelude::*;

use super::field::{control_class, FieldShell};

#[component]
pub fn Input(
    #[props(default)] label: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default = "text".to_string())] r#type: String,
    value: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] autocomplete: Option<String>,
    #[props(default)] inputmode: Option<String>,
    #[props(default)] maxlength: Option<u32>,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    oninput: EventHandler<String>,
    /// Enter pressed inside the field.
    #[props(default)]
    on_enter: Option<EventHandler<()>>,
) -> Element {
    let class = control_class(error.is_some(), &class);
    rsx! {
        FieldShell {
            label,
            error,
            html_for: id.clone(),
            input {
                id,
                r#type: r#type,
                class,
                value,
                placeholder,
                autocomplete,
                inputmode,
                maxlength,
                disabled,
                oninput: move |evt| oninput.call(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        if let Some(handler) = on_enter {
                            handler.call(());
                        }
                    }
                },
            }
        }
    }
}
