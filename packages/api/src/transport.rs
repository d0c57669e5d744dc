//! Request/response values and the [`Transport`] seam.
//!
//! [`HttpClient`](crate::HttpClient) builds an [`ApiRequest`] and hands it to a transport;
//! it never touches reqwest directly. Production code uses [`ReqwestTransport`], tests use
//! an in-memory double that records requests and replays canned responses.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A file attached to a multipart form: an uploaded picture or a camera capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Ordered text fields plus at most one file, sent as `multipart/form-data`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    fields: Vec<(String, String)>,
    file: Option<(String, FilePart)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append a field only when a value is present.
    pub fn text_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.text(name, value.to_string()),
            None => self,
        }
    }

    pub fn file(mut self, name: impl Into<String>, part: FilePart) -> Self {
        self.file = Some((name.into(), part));
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn file_part(&self) -> Option<(&str, &FilePart)> {
        self.file.as_ref().map(|(name, part)| (name.as_str(), part))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

impl Body {
    /// Serialize any value into a JSON body.
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Body::Json)
            .map_err(|e| ApiError::Request(e.to_string()))
    }

    /// The `{}` body some endpoints expect on otherwise empty POST/PATCH calls.
    pub fn empty_object() -> Self {
        Body::Json(serde_json::Value::Object(Default::default()))
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Body::Multipart(_))
    }
}

/// A fully resolved request, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The `message` field of a JSON error body, if any.
    pub fn error_message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
    }

    /// Turn a non-2xx response into [`ApiError::Status`].
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                message: self.error_message(),
            })
        }
    }
}

/// Sends requests somewhere and returns whatever came back.
///
/// Only failures to obtain a response are errors here; non-2xx statuses come back as an
/// [`ApiResponse`] so the client can run its 401 hook first.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Transport backed by reqwest. In the browser it uses `fetch` with
/// `credentials: include`; natively it keeps a cookie store.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::new();

        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to a client without cookie store: {}", e);
                reqwest::Client::new()
            });

        Self { client }
    }
}

fn to_reqwest_form(form: MultipartForm) -> Result<reqwest::multipart::Form, ApiError> {
    let mut out = reqwest::multipart::Form::new();
    for (name, value) in form.fields {
        out = out.text(name, value);
    }
    if let Some((name, file)) = form.file {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        out = out.part(name, part);
    }
    Ok(out)
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.body(value.to_string()),
            Body::Multipart(form) => builder.multipart(to_reqwest_form(form)?),
        };

        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status_carries_message() {
        let response = ApiResponse::new(400, r#"{"message":"Login inválido"}"#);
        let err = response.error_for_status().unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: Some("Login inválido".to_string())
            }
        );
    }

    #[test]
    fn test_error_for_status_without_json() {
        let response = ApiResponse::new(502, "Bad Gateway");
        let err = response.error_for_status().unwrap_err();
        assert_eq!(err.user_message("Erro"), "Erro");
    }

    #[test]
    fn test_multipart_builder_keeps_order() {
        let form = MultipartForm::new()
            .text("fullName", "Ana")
            .text_opt("heightCm", Some(172.5))
            .text_opt("weightKg", None::<f64>)
            .text("isActive", "true");
        let names: Vec<_> = form.fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["fullName", "heightCm", "isActive"]);
        assert_eq!(form.get("heightCm"), Some("172.5"));
        assert!(form.file_part().is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = ApiRequest {
            method: Method::Get,
            url: "/api/v1/users".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Body::Empty,
        };
        assert_eq!(request.header("content-type"), Some("application/json"));
    }
}
