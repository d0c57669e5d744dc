//! `/v1/dashboard` endpoint.

use crate::error::ApiError;
use crate::http::{HttpClient, RequestOptions};
use crate::models::DashboardData;
use crate::transport::{Method, Transport};

impl<T: Transport> HttpClient<T> {
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.fetch_json(Method::Get, "/v1/dashboard", RequestOptions::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::mock::MockTransport;

    #[tokio::test]
    async fn test_dashboard_decode() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/v1/dashboard",
            200,
            r#"{"athletesByCategory":[{"category":"Sub-17","count":3}],"totalAthletes":3,"activeAthletes":2,"totalUsers":4,"referenceYear":2025}"#,
        );
        let client = HttpClient::new(ApiConfig::default(), mock);

        let data = client.dashboard().await.unwrap();

        assert_eq!(data.total_users, 4);
        assert_eq!(data.top_category().category, "Sub-17");
        assert_eq!(data.active_percentage(), 67);
    }
}
