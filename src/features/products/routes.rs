use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::{GalleryService, ProductService};
use crate::features::uploads::routes::MULTIPART_OVERHEAD;
use crate::shared::constants::{MAX_GALLERY_UPLOADS, MAX_IMAGE_SIZE};

/// Back-office product and gallery routes, nested under `/api/admin`
pub fn admin_routes(products: Arc<ProductService>, gallery: Arc<GalleryService>) -> Router {
    let product_routes = Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route(
            "/products/{id}/toggle-active",
            post(handlers::toggle_product_active),
        )
        .route(
            "/products/{id}/toggle-featured",
            post(handlers::toggle_product_featured),
        )
        .with_state(products);

    let gallery_routes = Router::new()
        .route(
            "/products/{id}/images",
            get(handlers::list_product_images).post(handlers::upload_product_images).layer(
                DefaultBodyLimit::max(MAX_IMAGE_SIZE * MAX_GALLERY_UPLOADS + MULTIPART_OVERHEAD),
            ),
        )
        .route(
            "/product-images/{id}",
            delete(handlers::delete_product_image),
        )
        .with_state(gallery);

    product_routes.merge(gallery_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::memory::InMemoryImageStorage;
    use crate::shared::test_helpers::{lazy_pool, with_admin_auth, with_visitor_auth};
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::json;
    use uuid::Uuid;

    fn router() -> Router {
        let pool = lazy_pool();
        admin_routes(
            Arc::new(ProductService::new(pool.clone())),
            Arc::new(GalleryService::new(pool, Arc::new(InMemoryImageStorage::new()))),
        )
    }

    fn image_part(name: &str) -> Part {
        Part::bytes(vec![1u8; 32]).file_name(name).mime_type("image/png")
    }

    #[tokio::test]
    async fn test_routes_require_authentication() {
        let server = TestServer::new(router()).unwrap();

        server.get("/products").await.assert_status(StatusCode::UNAUTHORIZED);
        server
            .delete(&format!("/product-images/{}", Uuid::new_v4()))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_visitor_cannot_toggle_featured() {
        let server = TestServer::new(with_visitor_auth(router())).unwrap();

        let response = server
            .post(&format!("/products/{}/toggle-featured", Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_requires_name_and_description() {
        let server = TestServer::new(with_admin_auth(router())).unwrap();

        let response = server
            .post("/products")
            .json(&json!({
                "category_id": Uuid::new_v4(),
                "name": "Resin Tray",
                "description": " "
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_gallery_upload_rejects_more_than_six_files() {
        let server = TestServer::new(with_admin_auth(router())).unwrap();

        let mut form = MultipartForm::new();
        for i in 0..7 {
            form = form.add_part("files", image_part(&format!("photo-{}.png", i)));
        }
        let response = server
            .post(&format!("/products/{}/images", Uuid::new_v4()))
            .multipart(form)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_gallery_upload_rejects_non_images_before_storing() {
        let server = TestServer::new(with_admin_auth(router())).unwrap();

        let form = MultipartForm::new()
            .add_part("files", image_part("ok.png"))
            .add_part(
                "files",
                Part::bytes(b"%PDF".to_vec())
                    .file_name("brochure.pdf")
                    .mime_type("application/pdf"),
            );
        let response = server
            .post(&format!("/products/{}/images", Uuid::new_v4()))
            .multipart(form)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
