//! Client-side session state.
//!
//! [`Session`] caches the signed-in [`SessionUser`] and notifies listeners about
//! transitions. It is the client's [`UnauthorizedHandler`]: a rejected cookie clears the
//! cache and emits [`SessionEvent::Expired`]. Events only fire on real transitions, so a
//! 401 from the logout call that follows an expiry does not loop.
//!
//! [`SessionManager`] owns the client and the session together and exposes the
//! check/login/logout operations the UI needs.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpClient, UnauthorizedHandler};
use crate::models::SessionUser;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    /// The backend rejected the session on a regular endpoint.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(SessionEvent)>;

#[derive(Default)]
struct SessionState {
    user: Option<SessionUser>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

#[derive(Default)]
pub struct Session {
    state: RefCell<SessionState>,
}

impl Session {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().user.is_some()
    }

    pub fn subscribe(&self, listener: impl Fn(SessionEvent) + 'static) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.state
            .borrow_mut()
            .listeners
            .retain(|(listener, _)| *listener != id);
    }

    /// Store a freshly fetched user. Emits `SignedIn` when nobody was signed in before.
    pub fn set_user(&self, user: SessionUser) {
        let was_signed_in = self.state.borrow_mut().user.replace(user).is_some();
        if !was_signed_in {
            self.notify(SessionEvent::SignedIn);
        }
    }

    /// Drop the cached user. `event` is emitted only if someone was signed in.
    pub fn clear(&self, event: SessionEvent) {
        let had_user = self.state.borrow_mut().user.take().is_some();
        if had_user {
            self.notify(event);
        }
    }

    fn notify(&self, event: SessionEvent) {
        // Listeners may call back into the session.
        let listeners: Vec<Listener> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }
}

impl UnauthorizedHandler for Session {
    fn on_unauthorized(&self, _endpoint: &str) {
        self.clear(SessionEvent::Expired);
    }
}

/// The client plus the session it reports 401s to.
pub struct SessionManager<T> {
    client: HttpClient<T>,
    session: Rc<Session>,
}

impl<T> Clone for SessionManager<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            session: Rc::clone(&self.session),
        }
    }
}

impl<T> PartialEq for SessionManager<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl<T: Transport> SessionManager<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        let session = Session::new();
        let handler: Rc<dyn UnauthorizedHandler> = session.clone();
        let client = HttpClient::with_unauthorized_handler(config, transport, handler);
        Self { client, session }
    }

    pub fn client(&self) -> &HttpClient<T> {
        &self.client
    }

    pub fn session(&self) -> &Rc<Session> {
        &self.session
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.session.current_user()
    }

    pub fn subscribe(&self, listener: impl Fn(SessionEvent) + 'static) -> ListenerId {
        self.session.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.session.unsubscribe(id)
    }

    /// Ask the backend who is signed in. Any failure counts as "nobody".
    pub async fn check_auth(&self) -> Option<SessionUser> {
        match self.client.me().await {
            Ok(user) => {
                self.session.set_user(user.clone());
                Some(user)
            }
            Err(e) => {
                tracing::debug!("No active session: {}", e);
                self.session.clear(SessionEvent::SignedOut);
                None
            }
        }
    }

    pub async fn login(&self, login: &str, password: &str) -> Result<SessionUser, ApiError> {
        let user = self.client.login(login, password).await?;
        tracing::info!("Signed in as {}", user.email);
        self.session.set_user(user.clone());
        Ok(user)
    }

    /// End the session. The local user is cleared even when the call fails.
    pub async fn logout(&self) {
        if let Err(e) = self.client.logout().await {
            tracing::warn!("Logout request failed: {}", e);
        }
        self.session.clear(SessionEvent::SignedOut);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::http::RequestOptions;
    use crate::mock::MockTransport;
    use crate::transport::Method;

    const USER: &str = r#"{"userId":"u1","email":"ana@aru.org","name":"Ana"}"#;

    fn record(manager: &SessionManager<MockTransport>) -> Rc<RefCell<Vec<SessionEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        manager.subscribe(move |event| sink.borrow_mut().push(event));
        events
    }

    #[tokio::test]
    async fn test_check_auth_sets_and_clears_user() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/v1/auth/me", 200, USER);
        mock.respond(Method::Get, "/v1/auth/me", 401, "{}");
        let manager = SessionManager::new(ApiConfig::default(), mock.clone());
        let events = record(&manager);

        let user = manager.check_auth().await;
        assert_eq!(user.map(|u| u.user_id), Some("u1".to_string()));
        assert!(manager.session().is_authenticated());

        // A 401 on the session check is "signed out", never "expired".
        assert!(manager.check_auth().await.is_none());
        assert!(manager.current_user().is_none());
        assert_eq!(
            *events.borrow(),
            vec![SessionEvent::SignedIn, SessionEvent::SignedOut]
        );
    }

    #[tokio::test]
    async fn test_401_on_regular_endpoint_expires_session() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/v1/auth/login", 200, USER);
        mock.respond(Method::Get, "/v1/athletes", 401, "{}");
        mock.respond(Method::Post, "/v1/auth/logout", 401, "{}");
        let manager = SessionManager::new(ApiConfig::default(), mock.clone());
        let events = record(&manager);

        manager.login("ana", "segredo123").await.unwrap();
        let response = manager
            .client()
            .get("/v1/athletes", RequestOptions::new())
            .await
            .unwrap();

        assert_eq!(response.status, 401);
        assert!(manager.current_user().is_none());

        // The follow-up logout is rejected too, but nothing fires twice.
        manager.logout().await;
        assert_eq!(
            *events.borrow(),
            vec![SessionEvent::SignedIn, SessionEvent::Expired]
        );
    }

    #[tokio::test]
    async fn test_failed_login_keeps_session_empty() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/v1/auth/login",
            401,
            r#"{"message":"Usuário ou senha inválidos"}"#,
        );
        let manager = SessionManager::new(ApiConfig::default(), mock.clone());
        let events = record(&manager);

        let err = manager.login("ana", "errada").await.unwrap_err();

        assert_eq!(err.user_message("Erro ao fazer login"), "Usuário ou senha inválidos");
        assert!(manager.current_user().is_none());
        assert!(events.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_request_fails() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/v1/auth/login", 200, USER);
        mock.fail(Method::Post, "/v1/auth/logout", "offline");
        let manager = SessionManager::new(ApiConfig::default(), mock.clone());
        let events = record(&manager);

        manager.login("ana", "segredo123").await.unwrap();
        manager.logout().await;

        assert!(manager.current_user().is_none());
        assert_eq!(
            *events.borrow(),
            vec![SessionEvent::SignedIn, SessionEvent::SignedOut]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let session = Session::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let id = session.subscribe(move |event| sink.borrow_mut().push(event));

        session.set_user(SessionUser {
            user_id: "u1".to_string(),
            email: "ana@aru.org".to_string(),
            name: None,
            role: None,
            is_first_login: None,
            requires_password_setup: None,
        });
        session.unsubscribe(id);
        session.on_unauthorized("/v1/users");

        assert_eq!(*events.borrow(), vec![SessionEvent::SignedIn]);
        assert!(!session.is_authenticated());
    }
}
