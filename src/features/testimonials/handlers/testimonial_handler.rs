use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::testimonials::dtos::{TestimonialResponseDto, UpsertTestimonialDto};
use crate::features::testimonials::services::TestimonialService;
use crate::shared::types::{ApiResponse, Meta};

#[utoipa::path(
    get,
    path = "/api/admin/testimonials",
    responses(
        (status = 200, description = "All testimonials, newest first", body = ApiResponse<Vec<TestimonialResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin-testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_testimonials(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
) -> Result<Json<ApiResponse<Vec<TestimonialResponseDto>>>> {
    let testimonials = service.list().await?;
    let total = testimonials.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(testimonials),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/testimonials/{id}",
    params(
        ("id" = Uuid, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 200, description = "Testimonial found", body = ApiResponse<TestimonialResponseDto>),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "admin-testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_testimonial(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TestimonialResponseDto>>> {
    let testimonial = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(testimonial), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/testimonials",
    request_body = UpsertTestimonialDto,
    responses(
        (status = 201, description = "Testimonial created", body = ApiResponse<TestimonialResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "admin-testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_testimonial(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    AppJson(dto): AppJson<UpsertTestimonialDto>,
) -> Result<(StatusCode, Json<ApiResponse<TestimonialResponseDto>>)> {
    dto.validate()?;

    let testimonial = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(testimonial),
            Some("Testimonial created successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/testimonials/{id}",
    params(
        ("id" = Uuid, Path, description = "Testimonial ID")
    ),
    request_body = UpsertTestimonialDto,
    responses(
        (status = 200, description = "Testimonial updated", body = ApiResponse<TestimonialResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "admin-testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_testimonial(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertTestimonialDto>,
) -> Result<Json<ApiResponse<TestimonialResponseDto>>> {
    dto.validate()?;

    let testimonial = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(testimonial),
        Some("Testimonial updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/testimonials/{id}",
    params(
        ("id" = Uuid, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 200, description = "Testimonial deleted"),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "admin-testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_testimonial(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Testimonial deleted successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/admin/testimonials/{id}/toggle-active",
    params(
        ("id" = Uuid, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 200, description = "Visibility flipped", body = ApiResponse<TestimonialResponseDto>),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "admin-testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn toggle_testimonial_active(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TestimonialResponseDto>>> {
    let testimonial = service.toggle_active(id).await?;
    Ok(Json(ApiResponse::success(Some(testimonial), None, None)))
}
