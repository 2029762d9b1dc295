//! Remote collection client for the `/api/user` resource.

use reqwest::Method;
use serde::Serialize;

use crate::client::{escalate_unauthorized, ApiClient};
use crate::error::ApiError;
use crate::model::{Listing, User};
use crate::normalize::{normalize_listing, normalize_user};

/// Payload for creating a user.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
}

/// Partial update payload; absent fields are left untouched server-side.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiClient {
    /// Fetch one page of users, routed through the response normalizer.
    ///
    /// `page` is 1-based. A 401 escalates to [`ApiError::Unauthorized`] so the
    /// caller can force a logout.
    pub async fn list_users(&self, page: u32, limit: u32) -> Result<Listing, ApiError> {
        let path = format!("/api/user?page={page}&limit={limit}");
        match self.send(self.request(Method::GET, &path)).await {
            Ok(payload) => Ok(normalize_listing(&payload.unwrap_or_default())),
            Err(err) => Err(escalate_unauthorized(err)),
        }
    }

    /// Create a user. `None` when the server answered 204.
    pub async fn create_user(&self, draft: &UserDraft) -> Result<Option<User>, ApiError> {
        let payload = self
            .send(self.request(Method::POST, "/api/user").json(draft))
            .await?;
        Ok(payload.as_ref().map(normalize_user))
    }

    /// Apply a partial update to a user by id.
    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<Option<User>, ApiError> {
        let path = format!("/api/user/{id}");
        let payload = self
            .send(self.request(Method::PATCH, &path).json(patch))
            .await?;
        Ok(payload.as_ref().map(normalize_user))
    }

    /// Delete a user by id. `None` when the server answered 204.
    pub async fn delete_user(&self, id: &str) -> Result<Option<User>, ApiError> {
        let path = format!("/api/user/{id}");
        let payload = self.send(self.request(Method::DELETE, &path)).await?;
        Ok(payload.as_ref().map(normalize_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::stub_server;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::{delete, get, patch};
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_list_routes_through_normalizer() {
        let router = Router::new().route(
            "/api/user",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("page").map(String::as_str), Some("2"));
                assert_eq!(params.get("limit").map(String::as_str), Some("5"));
                Json(json!({
                    "data": { "users": [{ "_id": "1", "firstName": "Jo" }] },
                    "meta": { "total": 42 },
                }))
            }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        let listing = client.list_users(2, 5).await.unwrap();
        assert_eq!(listing.total, 42);
        assert_eq!(listing.users.len(), 1);
        assert_eq!(listing.users[0].id, "1");
        assert_eq!(listing.users[0].firstname.as_deref(), Some("Jo"));
    }

    #[tokio::test]
    async fn test_list_unauthorized_escalates() {
        let router =
            Router::new().route("/api/user", get(|| async { StatusCode::UNAUTHORIZED }));
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        let err = client.list_users(1, 5).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_list_malformed_payload_degrades_to_empty() {
        let router = Router::new().route(
            "/api/user",
            get(|| async { Json(json!({ "unexpected": true })) }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        let listing = client.list_users(1, 5).await.unwrap();
        assert!(listing.users.is_empty());
        assert_eq!(listing.total, 0);
    }

    #[tokio::test]
    async fn test_update_normalizes_response() {
        let router = Router::new().route(
            "/api/user/{id}",
            patch(|Path(id): Path<String>, Json(body): Json<serde_json::Value>| async move {
                assert_eq!(id, "u1");
                assert_eq!(body.get("status"), Some(&json!("active")));
                // Patch bodies omit unset fields entirely
                assert!(body.get("username").is_none());
                Json(json!({ "_id": "u1", "user_name": "jo", "status": "active" }))
            }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        let patch = UserPatch {
            status: Some("active".to_string()),
            ..UserPatch::default()
        };
        let updated = client.update_user("u1", &patch).await.unwrap().unwrap();
        assert_eq!(updated.id, "u1");
        assert_eq!(updated.username, "jo");
        assert_eq!(updated.status, "active");
    }

    #[tokio::test]
    async fn test_delete_no_content_is_none() {
        let router = Router::new().route(
            "/api/user/{id}",
            delete(|| async { StatusCode::NO_CONTENT }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        let deleted = client.delete_user("u1").await.unwrap();
        assert!(deleted.is_none());
    }

    #[tokio::test]
    async fn test_create_surfaces_server_message() {
        let router = Router::new().route(
            "/api/user",
            axum::routing::post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": "Email already registered" })),
                )
            }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        let err = client
            .create_user(&UserDraft::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(409));
    }
}
