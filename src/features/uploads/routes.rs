use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::features::uploads::handlers::upload_image;
use crate::features::uploads::services::UploadService;
use crate::shared::constants::MAX_IMAGE_SIZE;

/// Multipart framing allowance on top of the file bytes
pub const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Back-office upload routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<UploadService>) -> Router {
    Router::new()
        .route(
            "/uploads",
            post(upload_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD)),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::uploads::dtos::UploadedImageDto;
    use crate::modules::storage::memory::InMemoryImageStorage;
    use crate::shared::test_helpers::{with_admin_auth, with_visitor_auth};
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;

    fn setup() -> (TestServer, Arc<InMemoryImageStorage>) {
        let storage = Arc::new(InMemoryImageStorage::new());
        let router = admin_routes(Arc::new(UploadService::new(storage.clone())));
        (TestServer::new(with_admin_auth(router)).unwrap(), storage)
    }

    fn image_form(name: &str, mime: &str, size: usize) -> MultipartForm {
        MultipartForm::new().add_part(
            "file",
            Part::bytes(vec![7u8; size]).file_name(name).mime_type(mime),
        )
    }

    #[tokio::test]
    async fn test_upload_returns_public_url() {
        let (server, storage) = setup();

        let response = server
            .post("/uploads")
            .multipart(image_form("tray.PNG", "image/png", 2048))
            .await;

        response.assert_status(StatusCode::CREATED);
        let uploaded = response.json::<ApiResponse<UploadedImageDto>>().data.unwrap();
        assert!(uploaded.key.starts_with("products/"));
        assert!(uploaded.key.ends_with(".png"));
        assert_eq!(uploaded.url, InMemoryImageStorage::url_for(&uploaded.key));
        assert_eq!(uploaded.size, 2048);
        assert_eq!(storage.keys(), vec![uploaded.key]);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_image() {
        let (server, storage) = setup();

        let response = server
            .post("/uploads")
            .multipart(image_form("notes.txt", "text/plain", 10))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(storage.keys().is_empty());
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_image() {
        let (server, storage) = setup();

        let response = server
            .post("/uploads")
            .multipart(image_form("big.jpg", "image/jpeg", MAX_IMAGE_SIZE + 1))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert!(storage.keys().is_empty());
    }

    #[tokio::test]
    async fn test_upload_requires_file_field() {
        let (server, _) = setup();

        let form = MultipartForm::new().add_text("caption", "no file here");
        let response = server.post("/uploads").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_requires_admin() {
        let storage = Arc::new(InMemoryImageStorage::new());
        let router = admin_routes(Arc::new(UploadService::new(storage)));
        let server = TestServer::new(with_visitor_auth(router)).unwrap();

        let response = server
            .post("/uploads")
            .multipart(image_form("tray.png", "image/png", 16))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_storage_failure_is_bad_gateway() {
        let storage = Arc::new(InMemoryImageStorage::failing_on(&["tray.png"]));
        let router = admin_routes(Arc::new(UploadService::new(storage)));
        let server = TestServer::new(with_admin_auth(router)).unwrap();

        let response = server
            .post("/uploads")
            .multipart(image_form("tray.png", "image/png", 16))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }
}
