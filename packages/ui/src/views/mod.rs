//! Full screens. Each is router-agnostic: navigation leaves through event handlers so
//! the web crate decides where every route lives.

use api::ApiError;

mod athlete_form;
mod athletes;
mod first_login;
mod home;
mod layout;
mod login;
mod profile_modal;
mod recovery;
mod shell;
mod user_form;
mod users;

pub use athletes::AthletesView;
pub use first_login::FirstLoginView;
pub use home::HomeView;
pub use layout::{AppLayout, Section};
pub use login::LoginView;
pub use profile_modal::ProfileModal;
pub use recovery::RecoveryView;
pub use shell::{AuthShell, ErrorBanner, LoadingState, PageHeader};
pub use users::UsersView;

/// Toast text for a failed account request: the server's message (or `rejected`) when
/// it answered, `unreachable` when it never did.
pub(crate) fn failure_text(err: &ApiError, rejected: &str, unreachable: &str) -> String {
    if err.status().is_some() {
        err.user_message(rejected)
    } else {
        unreachable.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_text() {
        let rejected = ApiError::Status {
            status: 400,
            message: Some("Código expirado".to_string()),
        };
        assert_eq!(failure_text(&rejected, "a", "b"), "Código expirado");

        let silent = ApiError::Status {
            status: 400,
            message: None,
        };
        assert_eq!(failure_text(&silent, "a", "b"), "a");

        let offline = ApiError::Network("connection refused".into());
        assert_eq!(failure_text(&offline, "a", "b"), "b");
    }
}
