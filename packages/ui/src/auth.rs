//! Authentication context for the UI.
//!
//! [`AuthProvider`] builds the app's [`SessionManager`], mirrors its session into a
//! signal and reacts to an expired cookie by signing out and sending the browser to the
//! login page.

use std::rc::Rc;

use api::{ApiConfig, ListenerId, ReqwestTransport, SessionEvent, SessionManager, SessionUser};
use dioxus::prelude::*;

use crate::dom;

/// The API client and session shared by every screen.
pub type Api = SessionManager<ReqwestTransport>;

pub const LOGIN_PATH: &str = "/login";

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// True until the first `/v1/auth/me` answer arrives, and while signing in or out.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared API client.
pub fn use_session() -> Api {
    use_context::<Api>()
}

/// Unsubscribes from the session when the provider goes away.
struct Subscription {
    api: Api,
    id: ListenerId,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.api.unsubscribe(self.id);
    }
}

/// Auth state after a session event. An expired session also hands the login
/// path to `leave`, which ends the session server-side and leaves the page.
fn on_session_event(
    event: SessionEvent,
    current_user: impl FnOnce() -> Option<SessionUser>,
    leave: impl FnOnce(&'static str),
) -> AuthState {
    match event {
        SessionEvent::SignedIn => AuthState {
            user: current_user(),
            loading: false,
        },
        SessionEvent::SignedOut => AuthState {
            user: None,
            loading: false,
        },
        SessionEvent::Expired => {
            leave(LOGIN_PATH);
            AuthState {
                user: None,
                loading: false,
            }
        }
    }
}

/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ApiConfig, children: Element) -> Element {
    let api = use_hook(|| SessionManager::new(config.clone(), ReqwestTransport::new()));
    let mut auth_state = use_signal(AuthState::default);
    use_context_provider(|| api.clone());
    use_context_provider(|| auth_state);

    use_hook({
        let api = api.clone();
        move || {
            let listener_api = api.clone();
            let id = api.subscribe(move |event| {
                let mut auth_state = auth_state;
                let next = on_session_event(
                    event,
                    || listener_api.current_user(),
                    |path| {
                        tracing::info!("session expired, returning to the login page");
                        let api = listener_api.clone();
                        // Not tied to the screen whose request was rejected.
                        dioxus::core::spawn_forever(async move {
                            api.logout().await;
                            dom::redirect(path);
                        });
                    },
                );
                auth_state.set(next);
            });
            Rc::new(Subscription { api, id })
        }
    });

    // Fetch the current user on mount
    let _ = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let user = api.check_auth().await;
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Re-read the signed-in user, e.g. after the profile changed.
pub async fn refresh_user(api: &Api, mut auth_state: Signal<AuthState>) {
    let user = api.check_auth().await;
    auth_state.set(AuthState {
        user,
        loading: false,
    });
}

/// Sign out and return to the login page.
pub async fn sign_out(api: &Api, mut auth_state: Signal<AuthState>) {
    auth_state.write().loading = true;
    api.logout().await;
    auth_state.set(AuthState {
        user: None,
        loading: false,
    });
    dom::redirect(LOGIN_PATH);
}

/// Renders `children` only for a signed-in user; otherwise asks to leave via
/// `on_unauthenticated` once the session check has finished.
#[component]
pub fn RequireAuth(on_unauthenticated: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            on_unauthenticated.call(());
        }
    });

    if state.loading {
        return rsx! {
            div {
                class: "flex min-h-screen items-center justify-center bg-neutral-950",
                div {
                    class: "inline-block h-8 w-8 animate-spin rounded-full border-4 border-solid border-primary-600 border-r-transparent",
                }
            }
        };
    }
    if state.user.is_none() {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn admin() -> SessionUser {
        SessionUser {
            user_id: "u-1".to_string(),
            email: "admin@aru.com".to_string(),
            name: Some("Admin".to_string()),
            role: None,
            is_first_login: Some(false),
            requires_password_setup: None,
        }
    }

    #[test]
    fn test_expired_session_clears_user_and_leaves_for_login() {
        let left_for = RefCell::new(Vec::new());
        let state = on_session_event(
            SessionEvent::Expired,
            || Some(admin()),
            |path| left_for.borrow_mut().push(path),
        );
        assert_eq!(
            state,
            AuthState {
                user: None,
                loading: false
            }
        );
        assert_eq!(left_for.into_inner(), vec![LOGIN_PATH]);
    }

    #[test]
    fn test_each_expiry_signs_out_exactly_once() {
        let left_for = RefCell::new(Vec::new());
        for event in [
            SessionEvent::SignedIn,
            SessionEvent::Expired,
            SessionEvent::SignedOut,
            SessionEvent::Expired,
        ] {
            on_session_event(event, || Some(admin()), |path| {
                left_for.borrow_mut().push(path)
            });
        }
        assert_eq!(left_for.into_inner(), vec![LOGIN_PATH, LOGIN_PATH]);
    }

    #[test]
    fn test_sign_in_reads_user_and_stays() {
        let mut left = false;
        let state = on_session_event(SessionEvent::SignedIn, || Some(admin()), |_| left = true);
        assert_eq!(state.user, Some(admin()));
        assert!(!state.loading);
        assert!(!left);

        let state = on_session_event(SessionEvent::SignedOut, || Some(admin()), |_| left = true);
        assert!(state.user.is_none());
        assert!(!left);
    }
}
