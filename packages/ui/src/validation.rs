//! Field-level validation shared by every form.
//!
//! Rules return the Portuguese message shown under the field. [`FieldErrors`] keeps the
//! first failure per field; a non-empty set blocks submission before any request.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already failed.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Record the outcome of a rule.
    pub fn check(&mut self, field: &'static str, result: Result<(), &'static str>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<String> {
        self.errors.get(field).cloned()
    }

    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub const PASSWORD_REQUIRED: &str = "Senha é obrigatória";
pub const PASSWORD_MIN: &str = "A senha deve ter no mínimo 8 caracteres";
pub const PASSWORD_LETTER: &str = "A senha deve conter pelo menos uma letra";
pub const PASSWORD_DIGIT: &str = "A senha deve conter pelo menos um número";
pub const PASSWORD_MISMATCH: &str = "As senhas não coincidem";
pub const EMAIL_REQUIRED: &str = "E-mail é obrigatório";
pub const EMAIL_INVALID: &str = "E-mail inválido";

pub const PASSWORD_MIN_LEN: usize = 8;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-ZÀ-ÿ]").expect("letter regex"));

/// Fails with `message` when `value` is blank.
pub fn required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Required, well-formed e-mail.
pub fn email(value: &str) -> Result<(), &'static str> {
    required(value, EMAIL_REQUIRED)?;
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(EMAIL_INVALID)
    }
}

pub fn has_min_length(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LEN
}

pub fn has_letter(value: &str) -> bool {
    LETTER.is_match(value)
}

pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

/// New-password rules: at least 8 characters, one letter and one digit.
pub fn password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if !has_min_length(value) {
        return Err(PASSWORD_MIN);
    }
    if !has_letter(value) {
        return Err(PASSWORD_LETTER);
    }
    if !has_digit(value) {
        return Err(PASSWORD_DIGIT);
    }
    Ok(())
}

/// Confirmation must be present and equal to the password.
pub fn password_confirmation(
    password: &str,
    confirmation: &str,
    required_message: &'static str,
) -> Result<(), &'static str> {
    if confirmation.is_empty() {
        return Err(required_message);
    }
    if password != confirmation {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

/// Six-digit secure code sent by e-mail.
pub fn secure_code(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Código é obrigatório");
    }
    if value.chars().count() != 6 {
        return Err("O código deve ter 6 dígitos");
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("O código deve conter apenas números");
    }
    Ok(())
}

/// Full years between `birth` (an ISO date, time part ignored) and `today`.
pub fn age_on(birth: &str, today: NaiveDate) -> Option<i32> {
    let date: String = birth.trim().chars().take(10).collect();
    let birth = NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok()?;
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

/// Under 18 on `today`. An unparseable birth date is not a minor.
pub fn is_minor_on(birth: &str, today: NaiveDate) -> bool {
    matches!(age_on(birth, today), Some(age) if age < 18)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Login screen: both fields required.
pub fn login_form(login: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check("login", required(login, "Login é obrigatório"));
    errors.check("password", required(password, PASSWORD_REQUIRED));
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("email", "E-mail é obrigatório");
        errors.add("email", "E-mail inválido");
        errors.check("name", Ok(()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email").as_deref(), Some("E-mail é obrigatório"));
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(email(""), Err(EMAIL_REQUIRED));
        assert_eq!(email("ana@"), Err(EMAIL_INVALID));
        assert_eq!(email("ana @aru.org"), Err(EMAIL_INVALID));
        assert_eq!(email(" ana@aru.org "), Ok(()));
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(password(""), Err(PASSWORD_REQUIRED));
        assert_eq!(password("ab1"), Err(PASSWORD_MIN));
        assert_eq!(password("12345678"), Err(PASSWORD_LETTER));
        assert_eq!(password("abcdefgh"), Err(PASSWORD_DIGIT));
        assert_eq!(password("ção12345"), Ok(()));
        assert_eq!(password("senha123"), Ok(()));
    }

    #[test]
    fn test_password_confirmation() {
        assert_eq!(password_confirmation("senha123", "", "Confirme a senha"), Err("Confirme a senha"));
        assert_eq!(
            password_confirmation("senha123", "senha124", "Confirme a senha"),
            Err(PASSWORD_MISMATCH)
        );
        assert_eq!(password_confirmation("senha123", "senha123", "Confirme a senha"), Ok(()));
    }

    #[test]
    fn test_secure_code() {
        assert_eq!(secure_code(""), Err("Código é obrigatório"));
        assert_eq!(secure_code("12345"), Err("O código deve ter 6 dígitos"));
        assert_eq!(secure_code("12a456"), Err("O código deve conter apenas números"));
        assert_eq!(secure_code("123456"), Ok(()));
    }

    #[test]
    fn test_age_counts_birthday() {
        let today = date(2025, 6, 10);
        assert_eq!(age_on("2007-06-10", today), Some(18));
        assert_eq!(age_on("2007-06-11", today), Some(17));
        assert_eq!(age_on("2007-06-11T00:00:00.000Z", today), Some(17));
        assert_eq!(age_on("não é data", today), None);
        assert!(is_minor_on("2007-06-11", today));
        assert!(!is_minor_on("2007-06-10", today));
        assert!(!is_minor_on("", today));
    }

    #[test]
    fn test_login_form() {
        let errors = login_form(" ", "").unwrap_err();
        assert_eq!(errors.get("login").as_deref(), Some("Login é obrigatório"));
        assert_eq!(errors.get("password").as_deref(), Some(PASSWORD_REQUIRED));
        assert!(login_form("ana", "x").is_ok());
    }
}
