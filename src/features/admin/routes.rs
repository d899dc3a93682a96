use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create admin dashboard routes (all require admin access)
pub fn routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/stats", get(handlers::get_stats))
        .with_state(admin_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{lazy_pool, with_visitor_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_stats_forbidden_for_visitors() {
        let router = routes(Arc::new(AdminService::new(lazy_pool())));
        let server = TestServer::new(with_visitor_auth(router)).unwrap();

        server
            .get("/stats")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }
}
