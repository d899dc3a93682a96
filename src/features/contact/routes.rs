use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactLinks;

/// Public contact routes
pub fn routes(links: Arc<ContactLinks>) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::create_contact_link))
        .with_state(links)
}
