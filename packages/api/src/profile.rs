//! Current-user profile operations, including the multipart image upload.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::client::{escalate_unauthorized, ApiClient};
use crate::error::ApiError;
use crate::model::User;
use crate::normalize::normalize_user;
use crate::users::UserPatch;

impl ApiClient {
    /// Fetch the authenticated user's profile.
    ///
    /// A 401 escalates to [`ApiError::Unauthorized`]: the session is gone and
    /// the caller should force a logout rather than show a generic error.
    pub async fn fetch_profile(&self) -> Result<User, ApiError> {
        match self.send(self.request(Method::GET, "/api/user/profile")).await {
            Ok(Some(payload)) => Ok(normalize_user(&payload)),
            Ok(None) => Err(ApiError::Malformed),
            Err(err) => Err(escalate_unauthorized(err)),
        }
    }

    /// Self-edit the profile via the canonical user id.
    pub async fn update_profile(&self, id: &str, patch: &UserPatch) -> Result<Option<User>, ApiError> {
        self.update_user(id, patch).await
    }

    /// Upload a profile image as a multipart form.
    ///
    /// The file travels under the `file`, `image`, and `profileImage` field
    /// names because deployed backends disagree on which one they read. The
    /// nonstandard `image/jpg` MIME is rewritten to `image/jpeg` before
    /// upload. Only the response status is checked: backends answer a
    /// successful upload with anything from an empty 200 to a JSON blob.
    /// Single-shot: no retry, timeout, or cancellation.
    pub async fn upload_profile_image(
        &self,
        filename: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let mime = if mime == "image/jpg" { "image/jpeg" } else { mime };

        let form = Form::new()
            .part("file", image_part(filename, mime, bytes.clone())?)
            .part("image", image_part(filename, mime, bytes.clone())?)
            .part("profileImage", image_part(filename, mime, bytes)?);

        self.send_status(
            self.request(Method::POST, "/api/user/profile/image")
                .multipart(form),
        )
        .await
        .map_err(escalate_unauthorized)
    }
}

fn image_part(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Part, ApiError> {
    Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_str(mime)
        .map_err(|_| ApiError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::stub_server;
    use axum::extract::Multipart;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_profile_normalizes() {
        let router = Router::new().route(
            "/api/user/profile",
            get(|| async {
                Json(json!({
                    "_id": "me",
                    "first_name": "Jo",
                    "email": "jo@example.com",
                    "profileImage": "/uploads/jo.png",
                }))
            }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        let profile = client.fetch_profile().await.unwrap();
        assert_eq!(profile.id, "me");
        assert_eq!(profile.firstname.as_deref(), Some("Jo"));
        assert_eq!(profile.profile_image.as_deref(), Some("/uploads/jo.png"));
    }

    #[tokio::test]
    async fn test_fetch_profile_401_is_unauthorized() {
        let router = Router::new().route(
            "/api/user/profile",
            get(|| async { StatusCode::UNAUTHORIZED }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        let err = client.fetch_profile().await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_upload_sends_all_field_names_and_jpeg_mime() {
        let router = Router::new().route(
            "/api/user/profile/image",
            post(|mut multipart: Multipart| async move {
                let mut names = Vec::new();
                while let Ok(Some(field)) = multipart.next_field().await {
                    assert_eq!(field.content_type(), Some("image/jpeg"));
                    assert_eq!(field.file_name(), Some("avatar.jpg"));
                    names.push(field.name().unwrap_or_default().to_string());
                    let _ = field.bytes().await;
                }
                assert_eq!(names, ["file", "image", "profileImage"]);
                StatusCode::OK
            }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        client
            .upload_profile_image("avatar.jpg", "image/jpg", vec![0xFF, 0xD8, 0xFF])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_upload_succeeds_on_empty_200() {
        let router = Router::new().route(
            "/api/user/profile/image",
            post(|| async { StatusCode::OK }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        client
            .upload_profile_image("avatar.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_upload_failure_carries_message() {
        let router = Router::new().route(
            "/api/user/profile/image",
            post(|| async {
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(json!({ "message": "File too large" })),
                )
            }),
        );
        let base = stub_server(router).await;
        let client = ApiClient::new(base);

        let err = client
            .upload_profile_image("avatar.png", "image/png", vec![1])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "File too large");
    }
}
