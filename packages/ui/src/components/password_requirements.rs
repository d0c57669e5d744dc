use dioxus::prelude::*;

use crate::icons::FaCheck;
use crate::validation::{has_digit, has_letter, has_min_length};
use crate::Icon;

const RULES: [(&str, fn(&str) -> bool); 3] = [
    ("Mínimo 8 caracteres", has_min_length),
    ("Pelo menos uma letra", has_letter),
    ("Pelo menos um número", has_digit),
];

/// `(label, met)` for each password rule, in display order.
pub fn password_checklist(password: &str) -> Vec<(&'static str, bool)> {
    RULES
        .iter()
        .map(|(label, test)| (*label, test(password)))
        .collect()
}

/// Live checklist of the password rules under a new-password field.
#[component]
pub fn PasswordRequirements(password: String, #[props(default)] class: String) -> Element {
    rsx! {
        ul {
            class: "text-sm space-y-1 {class}",
            for (label, met) in password_checklist(&password) {
                li {
                    key: "{label}",
                    class: if met { "flex items-center gap-2 transition-colors text-green-500" } else { "flex items-center gap-2 transition-colors text-error-500" },
                    span {
                        class: "flex-shrink-0 w-4 h-4 flex items-center justify-center",
                        if met {
                            Icon { icon: FaCheck, width: 14, height: 14 }
                        } else {
                            span { class: "block w-2 h-2 rounded-full bg-current" }
                        }
                    }
                    span { "{label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_tracks_each_rule() {
        assert_eq!(
            password_checklist("abc"),
            vec![
                ("Mínimo 8 caracteres", false),
                ("Pelo menos uma letra", true),
                ("Pelo menos um número", false),
            ]
        );
        assert!(password_checklist("senhaForte1").iter().all(|(_, met)| *met));
        assert!(password_checklist("çãoàéíõú9").iter().all(|(_, met)| *met));
    }
}
