use api::SessionUser;
use dioxus::prelude::*;

use crate::auth::{use_auth, use_session, Api, AuthState};

pub const LOGIN_ERROR: &str = "Erro ao fazer login";

/// Sign-in with its own progress and error state.
#[derive(Clone, PartialEq)]
pub struct Login {
    api: Api,
    auth: Signal<AuthState>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
}

pub fn use_login() -> Login {
    Login {
        api: use_session(),
        auth: use_auth(),
        loading: use_signal(|| false),
        error: use_signal(|| None),
    }
}

impl Login {
    pub fn loading(&self) -> bool {
        (self.loading)()
    }

    pub fn error(&self) -> Option<String> {
        (self.error)()
    }

    /// Sign in. On failure the message is kept in [`Login::error`] and also returned.
    pub async fn login(&self, login: &str, password: &str) -> Result<SessionUser, String> {
        let (mut loading, mut error, mut auth) = (self.loading, self.error, self.auth);
        loading.set(true);
        error.set(None);
        let result = self.api.login(login, password).await;
        loading.set(false);
        match result {
            Ok(user) => {
                auth.set(AuthState {
                    user: Some(user.clone()),
                    loading: false,
                });
                Ok(user)
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                let message = e.user_message(LOGIN_ERROR);
                error.set(Some(message.clone()));
                Err(message)
            }
        }
    }
}
