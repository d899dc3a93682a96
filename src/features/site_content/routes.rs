use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::site_content::handlers;
use crate::features::site_content::services::SiteContentService;

/// Back-office site content routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<SiteContentService>) -> Router {
    Router::new()
        .route("/site-content", get(handlers::list_site_content))
        .route("/site-content/{section}", put(handlers::upsert_site_content))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{lazy_pool, with_admin_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_overlong_title_rejected() {
        let router = admin_routes(Arc::new(SiteContentService::new(lazy_pool())));
        let server = TestServer::new(with_admin_auth(router)).unwrap();

        let response = server
            .put("/site-content/hero")
            .json(&json!({"title": "x".repeat(201), "description": ""}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
