//! `/v1/athletes` endpoints.

use crate::error::ApiError;
use crate::http::{HttpClient, RequestOptions};
use crate::models::{AthleteFilters, AthleteListItem, AthletePayload, Page};
use crate::transport::{Body, Method, Transport};

const ATHLETES: &str = "/v1/athletes";

impl<T: Transport> HttpClient<T> {
    pub async fn list_athletes(
        &self,
        filters: &AthleteFilters,
        page: u32,
        limit: u32,
    ) -> Result<Page<AthleteListItem>, ApiError> {
        let options = RequestOptions::new().query(filters.to_query(page, limit));
        self.fetch_json(Method::Get, ATHLETES, options).await
    }

    pub async fn create_athlete(&self, payload: &AthletePayload) -> Result<(), ApiError> {
        let options = RequestOptions::new().body(Body::Multipart(payload.to_multipart()));
        self.send_ok(Method::Post, ATHLETES, options).await
    }

    pub async fn update_athlete(&self, id: &str, payload: &AthletePayload) -> Result<(), ApiError> {
        let options = RequestOptions::new().body(Body::Multipart(payload.to_multipart()));
        self.send_ok(Method::Patch, &format!("{ATHLETES}/{id}"), options)
            .await
    }

    /// Athletes are never hard-deleted; `DELETE` marks them inactive.
    pub async fn deactivate_athlete(&self, id: &str) -> Result<(), ApiError> {
        self.send_ok(Method::Delete, &format!("{ATHLETES}/{id}"), RequestOptions::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::mock::MockTransport;

    #[tokio::test]
    async fn test_list_athletes_query_and_decode() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/v1/athletes",
            200,
            r#"{"data":[{"id":"a1","fullName":"Ana","birthDate":"2010-01-01","phone":"11987654321","isActive":true,"category":"Sub-15"}],"total":11,"page":2,"limit":10,"totalPages":2}"#,
        );
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        let filters = AthleteFilters {
            is_active: Some(false),
            name: Some("Ana".to_string()),
            ..Default::default()
        };
        let page = client.list_athletes(&filters, 2, 10).await.unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination().total_pages, 2);
        assert_eq!(
            mock.last_request().unwrap().url,
            "/api/v1/athletes?page=2&limit=10&isActive=false&name=Ana"
        );
    }

    #[tokio::test]
    async fn test_update_athlete_is_multipart_patch() {
        let mock = MockTransport::new();
        mock.respond(Method::Patch, "/v1/athletes/a1", 200, "{}");
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        let payload = AthletePayload {
            full_name: "Ana".to_string(),
            ..Default::default()
        };
        client.update_athlete("a1", &payload).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Patch);
        assert!(matches!(request.body, Body::Multipart(_)));
    }

    #[tokio::test]
    async fn test_create_athlete_surfaces_server_message() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/v1/athletes",
            422,
            r#"{"message":"CPF já cadastrado"}"#,
        );
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        let err = client
            .create_athlete(&AthletePayload::default())
            .await
            .unwrap_err();

        assert_eq!(err.user_message("Erro ao criar atleta"), "CPF já cadastrado");
    }

    #[tokio::test]
    async fn test_deactivate_uses_delete() {
        let mock = MockTransport::new();
        mock.respond(Method::Delete, "/v1/athletes/a7", 204, "");
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        client.deactivate_athlete("a7").await.unwrap();

        assert_eq!(mock.last_request().unwrap().url, "/api/v1/athletes/a7");
    }
}
