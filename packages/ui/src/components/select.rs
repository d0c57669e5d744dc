use dioxus::prelude::*;

use super::field::{control_class, FieldShell};

#[component]
pub fn Select(
    #[props(default)] label: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] id: Option<String>,
    value: String,
    /// `(value, label)` pairs.
    options: Vec<(String, String)>,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    onchange: EventHandler<String>,
) -> Element {
    let class = control_class(error.is_some(), &class);
    rsx! {
        FieldShell {
            label,
            error,
            html_for: id.clone(),
            select {
                id,
                class,
                disabled,
                onchange: move |evt| onchange.call(evt.value()),
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        selected: option_value == value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
        }
    }
}

/// Owned options from a static `(value, label)` table.
pub fn options(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}
