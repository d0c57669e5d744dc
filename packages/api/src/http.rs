//! The HTTP client every hook and page goes through.
//!
//! [`HttpClient`] resolves endpoints against [`ApiConfig`], merges caller headers over a
//! JSON `Content-Type` default, builds query strings, and reports 401 responses to the
//! [`UnauthorizedHandler`] it was constructed with. It is cheap to clone and meant to be
//! shared.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Body, Method, Transport};

/// Endpoints whose 401 means "not signed in" rather than "session expired".
pub const SESSION_CHECK_ENDPOINT: &str = "/v1/auth/me";
pub const LOGIN_ENDPOINT: &str = "/v1/auth/login";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Receives 401 responses from non-exempt endpoints.
pub trait UnauthorizedHandler {
    fn on_unauthorized(&self, endpoint: &str);
}

/// Ordered query parameters. Absent and empty values are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    pub fn set_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// Per-call extras: body, extra headers and query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub body: Body,
    pub headers: Vec<(String, String)>,
    pub query: QueryParams,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            body: Body::Empty,
            headers: Vec::new(),
            query: QueryParams::new(),
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, ApiError> {
        Ok(self.body(Body::json(value)?))
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}

struct Inner<T> {
    config: ApiConfig,
    transport: T,
    on_unauthorized: Option<Rc<dyn UnauthorizedHandler>>,
}

pub struct HttpClient<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for HttpClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for HttpClient<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

fn is_exempt(endpoint: &str) -> bool {
    endpoint.contains(SESSION_CHECK_ENDPOINT) || endpoint.contains(LOGIN_ENDPOINT)
}

fn merge_headers(body: &Body, extra: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::new();
    // The transport owns the multipart boundary.
    if !body.is_multipart() {
        headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
    }
    for (name, value) in extra {
        match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
            Some(existing) => existing.1 = value,
            None => headers.push((name, value)),
        }
    }
    headers
}

impl<T: Transport> HttpClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                transport,
                on_unauthorized: None,
            }),
        }
    }

    pub fn with_unauthorized_handler(
        config: ApiConfig,
        transport: T,
        handler: Rc<dyn UnauthorizedHandler>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                transport,
                on_unauthorized: Some(handler),
            }),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let mut url = self.inner.config.url(endpoint);
        if !options.query.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&options.query.to_query_string());
        }

        let request = ApiRequest {
            method,
            url,
            headers: merge_headers(&options.body, options.headers),
            body: options.body,
        };

        let response = self.inner.transport.send(request).await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method.as_str(), endpoint, e);
            e
        })?;

        if response.is_unauthorized() && !is_exempt(endpoint) {
            if let Some(handler) = &self.inner.on_unauthorized {
                tracing::info!("Session rejected by {}, signing out", endpoint);
                handler.on_unauthorized(endpoint);
            }
        }

        Ok(response)
    }

    pub async fn get(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.request(Method::Get, endpoint, options).await
    }

    pub async fn post(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.request(Method::Post, endpoint, options).await
    }

    pub async fn put(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.request(Method::Put, endpoint, options).await
    }

    pub async fn patch(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.request(Method::Patch, endpoint, options).await
    }

    pub async fn delete(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.request(Method::Delete, endpoint, options).await
    }

    /// Send a request and decode a 2xx JSON body.
    pub async fn fetch_json<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        self.request(method, endpoint, options)
            .await?
            .error_for_status()?
            .json()
    }

    /// Send a request whose success body is irrelevant.
    pub async fn send_ok(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<(), ApiError> {
        self.request(method, endpoint, options)
            .await?
            .error_for_status()
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::mock::MockTransport;
    use crate::transport::{FilePart, MultipartForm};

    #[derive(Default)]
    struct RecordingHandler {
        calls: RefCell<Vec<String>>,
    }

    impl UnauthorizedHandler for RecordingHandler {
        fn on_unauthorized(&self, endpoint: &str) {
            self.calls.borrow_mut().push(endpoint.to_string());
        }
    }

    fn client_with_handler(mock: &MockTransport) -> (HttpClient<MockTransport>, Rc<RecordingHandler>) {
        let handler = Rc::new(RecordingHandler::default());
        let client = HttpClient::with_unauthorized_handler(
            ApiConfig::default(),
            mock.clone(),
            handler.clone(),
        );
        (client, handler)
    }

    #[tokio::test]
    async fn test_unauthorized_hook_fires_for_regular_endpoints() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/v1/athletes", 401, r#"{"message":"Unauthorized"}"#);
        let (client, handler) = client_with_handler(&mock);

        let response = client.get("/v1/athletes", RequestOptions::new()).await.unwrap();

        // The caller still receives the response.
        assert_eq!(response.status, 401);
        assert_eq!(*handler.calls.borrow(), vec!["/v1/athletes".to_string()]);
    }

    #[tokio::test]
    async fn test_unauthorized_hook_skips_session_and_login() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/v1/auth/me", 401, "{}");
        mock.respond(Method::Post, "/v1/auth/login", 401, r#"{"message":"Credenciais inválidas"}"#);
        let (client, handler) = client_with_handler(&mock);

        client.get("/v1/auth/me", RequestOptions::new()).await.unwrap();
        client.post("/v1/auth/login", RequestOptions::new()).await.unwrap();

        assert!(handler.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_non_401_errors_do_not_fire_hook() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/v1/users", 403, "{}");
        let (client, handler) = client_with_handler(&mock);

        let err = client
            .fetch_json::<serde_json::Value>(Method::Get, "/v1/users", RequestOptions::new())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert!(handler.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/v1/dashboard", "connection refused");
        let (client, handler) = client_with_handler(&mock);

        let err = client.get("/v1/dashboard", RequestOptions::new()).await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert!(handler.calls.borrow().is_empty());
        // No retry.
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_query_string_skips_empty_values() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/v1/users", 200, "{}");
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        let query = QueryParams::new()
            .set("page", 2)
            .set("limit", 10)
            .set("search", "")
            .set_opt("role", None::<&str>)
            .set_opt("isActive", Some(false))
            .set("search", "ana maria");
        client
            .get("/v1/users", RequestOptions::new().query(query))
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(
            request.url,
            "/api/v1/users?page=2&limit=10&isActive=false&search=ana+maria"
        );
    }

    #[tokio::test]
    async fn test_json_body_gets_content_type() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/v1/users", 201, "{}");
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        let options = RequestOptions::new()
            .json(&serde_json::json!({ "name": "Ana" }))
            .unwrap()
            .header("X-Trace", "abc");
        client.post("/v1/users", options).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("X-Trace"), Some("abc"));
        assert_eq!(request.body, Body::Json(serde_json::json!({ "name": "Ana" })));
    }

    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let mock = MockTransport::new();
        mock.respond(Method::Put, "/v1/notes", 200, "{}");
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        client
            .put("/v1/notes", RequestOptions::new().header("content-type", "text/plain"))
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("Content-Type"), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_multipart_body_passes_through() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/v1/athletes", 201, "{}");
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        let form = MultipartForm::new()
            .text("fullName", "Ana")
            .file("photo", FilePart::new("photo-1.jpeg", "image/jpeg", vec![1, 2, 3]));
        client
            .post("/v1/athletes", RequestOptions::new().body(Body::Multipart(form.clone())))
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert!(request.header("Content-Type").is_none());
        assert_eq!(request.body, Body::Multipart(form));
    }
}
