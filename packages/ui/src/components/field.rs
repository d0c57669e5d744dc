//! Label and error message around a form control, shared by every input component.

use dioxus::prelude::*;

pub(crate) fn control_class(has_error: bool, extra: &str) -> String {
    let border = if has_error {
        "border-error-500"
    } else {
        "border-neutral-800"
    };
    format!(
        "block w-full rounded-md bg-neutral-900 border {border} px-3 py-2 text-sm text-neutral-100 placeholder:text-neutral-500 focus:outline-none focus:ring-2 focus:ring-primary-600 focus:border-primary-600 disabled:opacity-60 {extra}"
    )
}

/// Text to show in a formatted input.
///
/// `typed` is what the user last typed and `synced` the value the parent held right after
/// that keystroke. While the parent still holds `synced`, the typed text wins (it may be
/// an incomplete date); once the parent value changes from outside, it is re-formatted.
pub(crate) fn display_text(
    typed: Option<&str>,
    synced: &str,
    value: &str,
    format: impl Fn(&str) -> String,
) -> String {
    match typed {
        Some(text) if synced == value => text.to_string(),
        _ => format(value),
    }
}

#[component]
pub(crate) fn FieldShell(
    label: Option<String>,
    error: Option<String>,
    #[props(default)] html_for: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "flex-1 min-w-[200px]",
            if let Some(text) = label {
                label {
                    r#for: html_for,
                    class: "block text-sm font-medium text-neutral-100 mb-2",
                    "{text}"
                }
            }
            {children}
            if let Some(message) = error {
                p { class: "mt-1 text-sm text-error-500", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masks::date_iso_to_mask;

    #[test]
    fn test_typed_text_wins_while_in_sync() {
        assert_eq!(display_text(Some("15/03"), "", "", date_iso_to_mask), "15/03");
        assert_eq!(
            display_text(Some("15/03/1990"), "1990-03-15", "1990-03-15", date_iso_to_mask),
            "15/03/1990"
        );
    }

    #[test]
    fn test_external_value_is_formatted() {
        assert_eq!(display_text(None, "", "2001-12-31", date_iso_to_mask), "31/12/2001");
        assert_eq!(
            display_text(Some("15/03"), "", "2001-12-31", date_iso_to_mask),
            "31/12/2001"
        );
    }
}
