//! Account screens: first access, password recovery and the profile dialog.
//!
//! Each form is a plain state value. The views feed it keystrokes, ask it to validate,
//! and hand it the backend answers; the step transitions live here.

use api::{CodeFlow, CodeValidation, ProfileUpdate, SessionUser};

use crate::masks::unmask;
use crate::validation::{email, password, password_confirmation, required, secure_code, FieldErrors};

/// Seconds before another recovery code may be requested.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

const CONFIRM_REQUIRED: &str = "Confirme a senha";

/// Code inputs accept digits only, six at most.
pub fn sanitize_code(value: &str) -> String {
    let mut digits = unmask(value);
    digits.truncate(6);
    digits
}

fn link_credentials(user_id: Option<&str>, code: Option<&str>) -> Option<(String, String)> {
    match (user_id, code) {
        (Some(user_id), Some(code)) if !user_id.is_empty() && !code.is_empty() => {
            Some((user_id.to_string(), code.to_string()))
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstLoginStep {
    Validate,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FirstLoginForm {
    pub step: FirstLoginStep,
    pub email: String,
    pub secure_code: String,
    pub password: String,
    pub confirm_password: String,
    user_id: Option<String>,
    validated_code: String,
}

impl FirstLoginForm {
    /// Opening the e-mailed link (`?userId=…&secureCode=…`) skips code validation.
    pub fn from_link(user_id: Option<&str>, code: Option<&str>) -> Self {
        let (step, user_id, code) = match link_credentials(user_id, code) {
            Some((user_id, code)) => (FirstLoginStep::Password, Some(user_id), code),
            None => (
                FirstLoginStep::Validate,
                None,
                code.map(sanitize_code).unwrap_or_default(),
            ),
        };
        Self {
            step,
            email: String::new(),
            secure_code: code.clone(),
            password: String::new(),
            confirm_password: String::new(),
            user_id,
            validated_code: code,
        }
    }

    pub fn validate_code_fields(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("email", email(&self.email));
        errors.check("secureCode", secure_code(&self.secure_code));
        errors.into_result()
    }

    /// Move to the password step if the backend accepted the code for this flow.
    pub fn accept_validation(&mut self, validation: &CodeValidation) -> bool {
        match validation.user_for(CodeFlow::FirstLogin) {
            Some(user_id) => {
                self.user_id = Some(user_id.to_string());
                self.validated_code = self.secure_code.clone();
                self.step = FirstLoginStep::Password;
                true
            }
            None => false,
        }
    }

    pub fn validate_password(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("password", password(&self.password));
        errors.check(
            "confirmPassword",
            password_confirmation(&self.password, &self.confirm_password, CONFIRM_REQUIRED),
        );
        errors.into_result()
    }

    /// `(userId, secureCode)` for set-first-password, once both are known.
    pub fn credentials(&self) -> Option<(String, String)> {
        link_credentials(self.user_id.as_deref(), Some(&self.validated_code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStep {
    Email,
    CodeSent,
    NewPassword,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryForm {
    pub step: RecoveryStep,
    pub email: String,
    pub secure_code: String,
    pub new_password: String,
    pub confirm_password: String,
    pub countdown: u32,
    user_id: Option<String>,
    code_from_link: bool,
}

impl RecoveryForm {
    pub fn from_link(user_id: Option<&str>, code: Option<&str>) -> Self {
        let link = link_credentials(user_id, code);
        let code_from_link = link.is_some();
        let (step, user_id, secure_code) = match link {
            Some((user_id, code)) => (RecoveryStep::NewPassword, Some(user_id), code),
            None => (
                RecoveryStep::Email,
                None,
                code.map(sanitize_code).unwrap_or_default(),
            ),
        };
        Self {
            step,
            email: String::new(),
            secure_code,
            new_password: String::new(),
            confirm_password: String::new(),
            countdown: 0,
            user_id,
            code_from_link,
        }
    }

    /// The code came in the link and is not editable.
    pub fn code_from_link(&self) -> bool {
        self.code_from_link
    }

    pub fn validate_email(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("email", email(&self.email));
        errors.into_result()
    }

    /// forgot-password succeeded: wait for the code and start the resend cooldown.
    pub fn code_requested(&mut self) {
        self.step = RecoveryStep::CodeSent;
        self.countdown = RESEND_COOLDOWN_SECS;
    }

    /// One second of cooldown elapsed. Returns whether the countdown is still running.
    pub fn tick(&mut self) -> bool {
        self.countdown = self.countdown.saturating_sub(1);
        self.countdown > 0
    }

    pub fn can_resend(&self) -> bool {
        self.countdown == 0
    }

    pub fn resend_label(&self, sending: bool) -> String {
        if self.countdown > 0 {
            format!("Reenviar código em {}s", self.countdown)
        } else if sending {
            "Enviando...".to_string()
        } else {
            "Solicitar novo código".to_string()
        }
    }

    pub fn validate_code(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("secureCode", secure_code(&self.secure_code));
        errors.into_result()
    }

    pub fn accept_validation(&mut self, validation: &CodeValidation) -> bool {
        match validation.user_for(CodeFlow::Recovery) {
            Some(user_id) => {
                self.user_id = Some(user_id.to_string());
                self.step = RecoveryStep::NewPassword;
                true
            }
            None => false,
        }
    }

    pub fn validate_reset(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("secureCode", secure_code(&self.secure_code));
        errors.check("newPassword", password(&self.new_password));
        errors.check(
            "confirmPassword",
            password_confirmation(&self.new_password, &self.confirm_password, CONFIRM_REQUIRED),
        );
        errors.into_result()
    }

    /// `(userId, secureCode)` for reset-password.
    pub fn reset_target(&self) -> Option<(String, String)> {
        link_credentials(self.user_id.as_deref(), Some(&self.secure_code))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &SessionUser) -> Self {
        Self {
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", required(&self.name, "Nome é obrigatório"));
        errors.check("email", email(&self.email));
        errors.into_result()
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "currentPassword",
            required(&self.current_password, "Senha atual é obrigatória"),
        );
        errors.check("newPassword", password(&self.new_password));
        errors.check(
            "confirmPassword",
            password_confirmation(
                &self.new_password,
                &self.confirm_password,
                "Confirmação de senha é obrigatória",
            ),
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{PASSWORD_DIGIT, PASSWORD_MISMATCH};

    fn validation(flow: &str, user_id: &str) -> CodeValidation {
        CodeValidation {
            valid: true,
            flow: Some(flow.to_string()),
            user_id: Some(user_id.to_string()),
        }
    }

    #[test]
    fn test_first_login_link_skips_validation() {
        let form = FirstLoginForm::from_link(Some("u1"), Some("123456"));
        assert_eq!(form.step, FirstLoginStep::Password);
        assert_eq!(form.credentials(), Some(("u1".to_string(), "123456".to_string())));

        let form = FirstLoginForm::from_link(None, Some("123456"));
        assert_eq!(form.step, FirstLoginStep::Validate);
        assert_eq!(form.secure_code, "123456");
        assert_eq!(form.credentials(), None);
    }

    #[test]
    fn test_first_login_validation_checks_flow() {
        let mut form = FirstLoginForm::from_link(None, None);
        form.email = "ana@aru.org".to_string();
        form.secure_code = "654321".to_string();
        assert!(form.validate_code_fields().is_ok());

        assert!(!form.accept_validation(&validation("recovery", "u1")));
        assert_eq!(form.step, FirstLoginStep::Validate);

        assert!(form.accept_validation(&validation("first-login", "u1")));
        assert_eq!(form.step, FirstLoginStep::Password);
        assert_eq!(form.credentials(), Some(("u1".to_string(), "654321".to_string())));
    }

    #[test]
    fn test_first_login_password_rules() {
        let mut form = FirstLoginForm::from_link(Some("u1"), Some("123456"));
        form.password = "senhasenha".to_string();
        let errors = form.validate_password().unwrap_err();
        assert_eq!(errors.get("password").as_deref(), Some(PASSWORD_DIGIT));
        assert_eq!(errors.get("confirmPassword").as_deref(), Some("Confirme a senha"));

        form.password = "senha123".to_string();
        form.confirm_password = "senha123".to_string();
        assert!(form.validate_password().is_ok());
    }

    #[test]
    fn test_code_fields_errors() {
        let form = FirstLoginForm::from_link(None, None);
        let errors = form.validate_code_fields().unwrap_err();
        assert_eq!(errors.get("email").as_deref(), Some("E-mail é obrigatório"));
        assert_eq!(errors.get("secureCode").as_deref(), Some("Código é obrigatório"));
        assert_eq!(sanitize_code("12a-34 5678"), "123456");
    }

    #[test]
    fn test_recovery_steps_and_countdown() {
        let mut form = RecoveryForm::from_link(None, None);
        assert_eq!(form.step, RecoveryStep::Email);
        assert!(form.validate_email().is_err());

        form.email = "ana@aru.org".to_string();
        form.code_requested();
        assert_eq!(form.step, RecoveryStep::CodeSent);
        assert!(!form.can_resend());
        assert_eq!(form.resend_label(false), "Reenviar código em 60s");

        for _ in 0..59 {
            assert!(form.tick());
        }
        assert!(!form.tick());
        assert!(form.can_resend());
        assert_eq!(form.resend_label(true), "Enviando...");
        assert_eq!(form.resend_label(false), "Solicitar novo código");

        form.secure_code = "111222".to_string();
        assert!(!form.accept_validation(&validation("first-login", "u9")));
        assert!(form.accept_validation(&validation("recovery", "u9")));
        assert_eq!(form.step, RecoveryStep::NewPassword);
        assert_eq!(form.reset_target(), Some(("u9".to_string(), "111222".to_string())));
    }

    #[test]
    fn test_recovery_link_jumps_to_new_password() {
        let mut form = RecoveryForm::from_link(Some("u2"), Some("999000"));
        assert_eq!(form.step, RecoveryStep::NewPassword);
        assert!(form.code_from_link());

        form.new_password = "nova1234".to_string();
        form.confirm_password = "nova12345".to_string();
        let errors = form.validate_reset().unwrap_err();
        assert_eq!(errors.get("confirmPassword").as_deref(), Some(PASSWORD_MISMATCH));
        assert!(errors.get("secureCode").is_none());
    }

    #[test]
    fn test_profile_and_password_change() {
        let user = SessionUser {
            user_id: "u1".to_string(),
            email: "ana@aru.org".to_string(),
            name: None,
            role: None,
            is_first_login: None,
            requires_password_setup: None,
        };
        let form = ProfileForm::from_user(&user);
        assert_eq!(
            form.validate().unwrap_err().get("name").as_deref(),
            Some("Nome é obrigatório")
        );
        let form = ProfileForm {
            name: " Ana ".to_string(),
            ..form
        };
        assert_eq!(form.to_update().name, "Ana");

        let errors = PasswordChangeForm::default().validate().unwrap_err();
        assert_eq!(errors.get("currentPassword").as_deref(), Some("Senha atual é obrigatória"));
        assert_eq!(
            errors.get("confirmPassword").as_deref(),
            Some("Confirmação de senha é obrigatória")
        );
    }
}
