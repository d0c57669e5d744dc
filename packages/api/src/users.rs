//! `/v1/users` endpoints.

use crate::error::ApiError;
use crate::http::{HttpClient, RequestOptions};
use crate::models::{Page, UserFilters, UserListItem, UserPayload};
use crate::transport::{Body, Method, Transport};

const USERS: &str = "/v1/users";

impl<T: Transport> HttpClient<T> {
    pub async fn list_users(
        &self,
        filters: &UserFilters,
        page: u32,
        limit: u32,
    ) -> Result<Page<UserListItem>, ApiError> {
        let options = RequestOptions::new().query(filters.to_query(page, limit));
        self.fetch_json(Method::Get, USERS, options).await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<(), ApiError> {
        let options = RequestOptions::new().json(payload)?;
        self.send_ok(Method::Post, USERS, options).await
    }

    pub async fn update_user(&self, id: &str, payload: &UserPayload) -> Result<(), ApiError> {
        let options = RequestOptions::new().json(payload)?;
        self.send_ok(Method::Patch, &format!("{USERS}/{id}"), options)
            .await
    }

    pub async fn activate_user(&self, id: &str) -> Result<(), ApiError> {
        let options = RequestOptions::new().body(Body::empty_object());
        self.send_ok(Method::Patch, &format!("{USERS}/{id}/activate"), options)
            .await
    }

    pub async fn deactivate_user(&self, id: &str) -> Result<(), ApiError> {
        let options = RequestOptions::new().body(Body::empty_object());
        self.send_ok(Method::Patch, &format!("{USERS}/{id}/deactivate"), options)
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.send_ok(Method::Delete, &format!("{USERS}/{id}"), RequestOptions::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::mock::MockTransport;
    use crate::models::Role;

    #[tokio::test]
    async fn test_create_user_json_body() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/v1/users", 201, "{}");
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        let payload = UserPayload {
            name: "Daniel Simas".to_string(),
            email: "daniel@aru.org".to_string(),
            username: "daniel.simas".to_string(),
            role: Role::Manager,
        };
        client.create_user(&payload).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(
            request.body,
            Body::Json(serde_json::json!({
                "name": "Daniel Simas",
                "email": "daniel@aru.org",
                "username": "daniel.simas",
                "role": "manager"
            }))
        );
    }

    #[tokio::test]
    async fn test_activation_endpoints() {
        let mock = MockTransport::new();
        mock.respond(Method::Patch, "/v1/users/u1/activate", 200, "{}");
        mock.respond(Method::Patch, "/v1/users/u1/deactivate", 500, "{}");
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        client.activate_user("u1").await.unwrap();
        assert_eq!(
            mock.last_request().unwrap().body,
            Body::Json(serde_json::json!({}))
        );

        let err = client.deactivate_user("u1").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_list_users_decodes_roles() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/v1/users",
            200,
            r#"{"data":[{"id":"u1","email":"a@aru.org","name":"Ana","username":"ana","role":"admin","isActive":true,"isFirstLogin":false,"createdAt":"","updatedAt":""}],"total":1,"page":1,"limit":10,"totalPages":1}"#,
        );
        let client = HttpClient::new(ApiConfig::default(), mock.clone());

        let page = client
            .list_users(&UserFilters::default(), 1, 10)
            .await
            .unwrap();

        assert_eq!(page.data[0].role, Role::Admin);
    }
}
