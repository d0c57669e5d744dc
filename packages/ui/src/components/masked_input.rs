use dioxus::prelude::*;

use super::field::{control_class, display_text, FieldShell};
use crate::masks::{date_iso_to_mask, date_mask_to_iso, mask_cpf, mask_date, mask_phone, unmask};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    Phone,
    Cpf,
    /// Displays `DD/MM/YYYY`, emits `YYYY-MM-DD` (empty while incomplete).
    Date,
}

impl MaskKind {
    /// Display text for a canonical value.
    pub fn format(&self, value: &str) -> String {
        match self {
            MaskKind::Phone => mask_phone(value),
            MaskKind::Cpf => mask_cpf(value),
            MaskKind::Date => date_iso_to_mask(value),
        }
    }

    /// `(display, canonical)` for one keystroke's raw text.
    pub fn apply(&self, raw: &str) -> (String, String) {
        match self {
            MaskKind::Phone => {
                let masked = mask_phone(raw);
                let digits = unmask(&masked);
                (masked, digits)
            }
            MaskKind::Cpf => {
                let masked = mask_cpf(raw);
                let digits = unmask(&masked);
                (masked, digits)
            }
            MaskKind::Date => {
                let masked = mask_date(raw);
                let iso = date_mask_to_iso(&masked);
                (masked, iso)
            }
        }
    }
}

/// Text input that reformats each keystroke and reports the canonical value.
#[component]
pub fn MaskedInput(
    mask: MaskKind,
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

    let shown = display_text(typed().as_deref(), &synced(), &value, |v| mask.format(v));
    let class = control_class(error.is_some(), &class);
    let inputmode = if mask == MaskKind::Date { "numeric" } else { "tel" };

    rsx! {
        FieldShell {
            label,
            error,
            html_for: id.clone(),
            input {
                id,
                r#type: "text",
                inputmode,
                class,
                value: shown,
                placeholder,
                disabled,
                oninput: move |evt| {
                    let (display, canonical) = mask.apply(&evt.value());
                    typed.set(Some(display));
                    synced.set(canonical.clone());
                    onchange.call(canonical);
                },
            }
        }
    }
}
