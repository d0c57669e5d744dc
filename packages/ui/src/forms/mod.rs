//! Form state, validation and payload building for the create/edit dialogs and the
//! account screens. Nothing here touches Dioxus, so every rule is unit-tested.

mod account;
mod athlete;
mod user;

pub use account::{
    sanitize_code, FirstLoginForm, FirstLoginStep, PasswordChangeForm, ProfileForm, RecoveryForm,
    RecoveryStep, RESEND_COOLDOWN_SECS,
};
pub use athlete::{AthleteFormValues, DOMINANT_HAND_OPTIONS, STATUS_OPTIONS};
pub use user::{suggest_username, UserFormValues, ROLE_OPTIONS};

/// How a record dialog is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
    View,
}

impl FormMode {
    pub fn is_view(&self) -> bool {
        matches!(self, FormMode::View)
    }
}

/// Leading decimal number of `value`, the way a browser's `parseFloat` reads it:
/// `"72.5kg"` is `72.5`, `"kg"` is `None`.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in value.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    value[..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_reads_prefix() {
        assert_eq!(parse_number("180"), Some(180.0));
        assert_eq!(parse_number(" 72.5 "), Some(72.5));
        assert_eq!(parse_number("72.5kg"), Some(72.5));
        assert_eq!(parse_number("1.2.3"), Some(1.2));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("10."), Some(10.0));
        assert_eq!(parse_number("kg"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number(""), None);
    }
}
