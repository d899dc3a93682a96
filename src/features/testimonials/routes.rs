use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::testimonials::handlers;
use crate::features::testimonials::services::TestimonialService;

/// Back-office testimonial routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<TestimonialService>) -> Router {
    Router::new()
        .route(
            "/testimonials",
            get(handlers::list_testimonials).post(handlers::create_testimonial),
        )
        .route(
            "/testimonials/{id}",
            get(handlers::get_testimonial)
                .put(handlers::update_testimonial)
                .delete(handlers::delete_testimonial),
        )
        .route(
            "/testimonials/{id}/toggle-active",
            post(handlers::toggle_testimonial_active),
        )
        .with_state(service)
}
