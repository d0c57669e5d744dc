use dioxus::prelude::*;

use super::field::{control_class, display_text, FieldShell};
use crate::icons::FaCalendarDays;
use crate::masks::{date_iso_to_mask, date_mask_to_iso, mask_date};
use crate::Icon;

/// What a keystroke in the date field reports to the parent: a complete valid date, or
/// the empty string once the field is cleared. Incomplete input reports nothing.
pub fn date_keystroke(raw: &str) -> (String, Option<String>) {
    let masked = mask_date(raw);
    let iso = date_mask_to_iso(&masked);
    let emitted = if !iso.is_empty() {
        Some(iso)
    } else if masked.is_empty() {
        Some(String::new())
    } else {
        None
    };
    (masked, emitted)
}

/// `DD/MM/YYYY` text entry with a calendar picker. `value` is ISO (`YYYY-MM-DD`).
#[component]
pub fn DateInput(
    #[props(default)] label: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] id: Option<String>,
    value: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    onchange: EventHandler<String>,
) -> Element {
    let mut typed = use_signal(|| None::<String>);
    let mut synced = use_signal(String::new);
    let mut show_picker = use_signal(|| false);

    let shown = display_text(typed().as_deref(), &synced(), &value, date_iso_to_mask);
    let class = control_class(error.is_some(), &format!("pr-10 {class}"));
    let placeholder = placeholder.unwrap_or_else(|| "dd/mm/aaaa".to_string());
    let current = value.clone();

    rsx! {
        FieldShell {
            label,
            error,
            html_for: id.clone(),
            div {
                class: "relative",
                input {
                    id,
                    r#type: "text",
                    inputmode: "numeric",
                    maxlength: 10,
                    class,
                    value: shown,
                    placeholder,
                    disabled,
                    oninput: move |evt| {
                        let (masked, emitted) = date_keystroke(&evt.value());
                        typed.set(Some(masked));
                        match emitted {
                            Some(iso) => {
                                synced.set(iso.clone());
                                onchange.call(iso);
                            }
                            None => synced.set(current.clone()),
                        }
                    },
                }
                button {
                    r#type: "button",
                    tabindex: "-1",
                    class: "absolute right-2 top-1/2 -translate-y-1/2 text-neutral-400 hover:text-neutral-200 disabled:opacity-50 z-10",
                    disabled,
                    onclick: move |_| show_picker.toggle(),
                    Icon { icon: FaCalendarDays, width: 16, height: 16 }
                }
                if show_picker() && !disabled {
                    div {
                        class: "absolute z-50 mt-1 left-0 rounded-md border border-neutral-800 bg-neutral-900 p-2 shadow-lg",
                        input {
                            r#type: "date",
                            class: "rounded-md bg-neutral-950 border border-neutral-800 px-2 py-1 text-sm text-neutral-100 [color-scheme:dark]",
                            value: "{value}",
                            onchange: move |evt| {
                                let iso = evt.value();
                                typed.set(None);
                                synced.set(iso.clone());
                                show_picker.set(false);
                                onchange.call(iso);
                            },
                        }
                    }
                }
            }
        }
    }
}
