use thiserror::Error;

/// Everything that can go wrong between a UI action and the backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request could not be built (bad multipart part, unserializable body).
    #[error("invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// Text to show the user: the server's `message` when it sent one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
