//! API base URL configuration.

/// Environment variable naming the API origin.
pub const API_URL_VAR: &str = "ARU_API_URL";

/// Base URL used when nothing is configured; the dev server proxies it to the backend.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Where the REST backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config from an explicit base URL. Trailing slashes are dropped and an
    /// empty value falls back to [`DEFAULT_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Resolve the base URL from the environment.
    ///
    /// Native builds read `.env` and the process environment first; every build then
    /// falls back to the value captured at compile time, then to `/api`.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(API_URL_VAR) {
                if !url.trim().is_empty() {
                    return Self::new(url);
                }
            }
        }

        match option_env!("ARU_API_URL") {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// Join an endpoint path onto the base URL. Absolute URLs pass through untouched.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::default().base_url, "/api");
        assert_eq!(ApiConfig::new("").base_url, "/api");
        assert_eq!(ApiConfig::new("   ").base_url, "/api");
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ApiConfig::new("https://crm.example.com/api/");
        assert_eq!(config.base_url, "https://crm.example.com/api");
        assert_eq!(
            config.url("/v1/athletes"),
            "https://crm.example.com/api/v1/athletes"
        );
    }

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/v1/auth/me"), "/api/v1/auth/me");
        assert_eq!(config.url("v1/auth/me"), "/api/v1/auth/me");
        assert_eq!(
            config.url("https://other.example.com/v1/ping"),
            "https://other.example.com/v1/ping"
        );
    }
}
