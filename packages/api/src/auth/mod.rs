//! Authentication endpoints and the client-side session.
//!
//! | Endpoint | Method |
//! |----------|--------|
//! | `/v1/auth/login` | [`HttpClient::login`] |
//! | `/v1/auth/logout` | [`HttpClient::logout`] |
//! | `/v1/auth/me` | [`HttpClient::me`] |
//! | `/v1/auth/profile` | [`HttpClient::update_profile`] |
//! | `/v1/auth/password` | [`HttpClient::change_password`] |
//! | `/v1/auth/forgot-password` | [`HttpClient::forgot_password`] |
//! | `/v1/auth/validate-code` | [`HttpClient::validate_code`] |
//! | `/v1/auth/set-first-password` | [`HttpClient::set_first_password`] |
//! | `/v1/auth/reset-password` | [`HttpClient::reset_password`] |

mod session;

pub use session::{ListenerId, Session, SessionEvent, SessionManager};

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::{HttpClient, RequestOptions, LOGIN_ENDPOINT, SESSION_CHECK_ENDPOINT};
use crate::models::SessionUser;
use crate::transport::{Body, Method, Transport};

/// Which flow a secure code was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeFlow {
    FirstLogin,
    Recovery,
}

impl CodeFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeFlow::FirstLogin => "first-login",
            CodeFlow::Recovery => "recovery",
        }
    }
}

/// Answer of `/v1/auth/validate-code`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeValidation {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub flow: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl CodeValidation {
    /// The user the code belongs to, if it is valid for `flow`.
    pub fn user_for(&self, flow: CodeFlow) -> Option<&str> {
        if !self.valid || self.flow.as_deref() != Some(flow.as_str()) {
            return None;
        }
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    login: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChange<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CodeCheck<'a> {
    email: &'a str,
    secure_code: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FirstPassword<'a> {
    user_id: &'a str,
    password: &'a str,
    secure_code: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordReset<'a> {
    user_id: &'a str,
    secure_code: &'a str,
    new_password: &'a str,
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

impl<T: Transport> HttpClient<T> {
    /// The account behind the session cookie.
    pub async fn me(&self) -> Result<SessionUser, ApiError> {
        self.fetch_json(Method::Get, SESSION_CHECK_ENDPOINT, RequestOptions::new())
            .await
    }

    pub async fn login(&self, login: &str, password: &str) -> Result<SessionUser, ApiError> {
        let options = RequestOptions::new().json(&LoginBody { login, password })?;
        self.fetch_json(Method::Post, LOGIN_ENDPOINT, options).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let options = RequestOptions::new().body(Body::empty_object());
        self.send_ok(Method::Post, "/v1/auth/logout", options).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let options = RequestOptions::new().json(update)?;
        self.send_ok(Method::Patch, "/v1/auth/profile", options).await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let options = RequestOptions::new().json(&PasswordChange {
            current_password,
            new_password,
        })?;
        self.send_ok(Method::Patch, "/v1/auth/password", options).await
    }

    /// Ask for a recovery code. Returns the server's confirmation text, if any.
    pub async fn forgot_password(&self, email: &str) -> Result<Option<String>, ApiError> {
        let options = RequestOptions::new().json(&serde_json::json!({ "email": email }))?;
        let response = self
            .post("/v1/auth/forgot-password", options)
            .await?
            .error_for_status()?;
        Ok(response
            .json::<MessageBody>()
            .ok()
            .and_then(|body| body.message))
    }

    pub async fn validate_code(
        &self,
        email: &str,
        secure_code: &str,
    ) -> Result<CodeValidation, ApiError> {
        let options = RequestOptions::new().json(&CodeCheck { email, secure_code })?;
        self.fetch_json(Method::Post, "/v1/auth/validate-code", options)
            .await
    }

    pub async fn set_first_password(
        &self,
        user_id: &str,
        password: &str,
        secure_code: &str,
    ) -> Result<(), ApiError> {
        let options = RequestOptions::new().json(&FirstPassword {
            user_id,
            password,
            secure_code,
        })?;
        self.send_ok(Method::Post, "/v1/auth/set-first-password", options)
            .await
    }

    pub async fn reset_password(
        &self,
        user_id: &str,
        secure_code: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let options = RequestOptions::new().json(&PasswordReset {
            user_id,
            secure_code,
            new_password,
        })?;
        self.send_ok(Method::Post, "/v1/auth/reset-password", options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::mock::MockTransport;

    fn client(mock: &MockTransport) -> HttpClient<MockTransport> {
        HttpClient::new(ApiConfig::default(), mock.clone())
    }

    #[test]
    fn test_code_validation_requires_matching_flow() {
        let validation = CodeValidation {
            valid: true,
            flow: Some("first-login".to_string()),
            user_id: Some("u1".to_string()),
        };
        assert_eq!(validation.user_for(CodeFlow::FirstLogin), Some("u1"));
        assert_eq!(validation.user_for(CodeFlow::Recovery), None);

        let invalid = CodeValidation {
            valid: false,
            ..validation.clone()
        };
        assert_eq!(invalid.user_for(CodeFlow::FirstLogin), None);

        let no_user = CodeValidation {
            user_id: None,
            ..validation
        };
        assert_eq!(no_user.user_for(CodeFlow::FirstLogin), None);
    }

    #[tokio::test]
    async fn test_login_sends_credentials() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/v1/auth/login",
            200,
            r#"{"userId":"u1","email":"ana@aru.org","role":"admin"}"#,
        );

        let user = client(&mock).login("ana", "segredo123").await.unwrap();

        assert_eq!(user.user_id, "u1");
        let request = mock.last_request().unwrap();
        assert_eq!(
            request.body,
            Body::Json(serde_json::json!({ "login": "ana", "password": "segredo123" }))
        );
    }

    #[tokio::test]
    async fn test_reset_password_body() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/v1/auth/reset-password", 200, "{}");

        client(&mock)
            .reset_password("u9", "123456", "novaSenha1")
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(
            request.body,
            Body::Json(serde_json::json!({
                "userId": "u9",
                "secureCode": "123456",
                "newPassword": "novaSenha1"
            }))
        );
    }

    #[tokio::test]
    async fn test_forgot_password_message() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/v1/auth/forgot-password",
            200,
            r#"{"message":"Código enviado"}"#,
        );
        let message = client(&mock).forgot_password("ana@aru.org").await.unwrap();
        assert_eq!(message.as_deref(), Some("Código enviado"));

        let mock = MockTransport::new();
        mock.respond(Method::Post, "/v1/auth/forgot-password", 204, "");
        let message = client(&mock).forgot_password("ana@aru.org").await.unwrap();
        assert_eq!(message, None);
    }

    #[tokio::test]
    async fn test_change_password_error_message() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Patch,
            "/v1/auth/password",
            400,
            r#"{"message":"Senha atual incorreta"}"#,
        );

        let err = client(&mock)
            .change_password("errada", "novaSenha1")
            .await
            .unwrap_err();

        assert_eq!(err.user_message("Erro ao alterar senha"), "Senha atual incorreta");
    }
}
