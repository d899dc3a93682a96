use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::features::auth::guards::RequireAdmin;
use crate::features::uploads::dtos::{UploadImageDto, UploadedImageDto};
use crate::features::uploads::multipart::read_images;
use crate::features::uploads::services::UploadService;
use crate::shared::types::ApiResponse;

/// Upload one image
///
/// Accepts multipart/form-data with a single `file` field. Returns the public
/// URL to store as a product's primary image.
#[utoipa::path(
    post,
    path = "/api/admin/uploads",
    tag = "admin-uploads",
    request_body(
        content = UploadImageDto,
        content_type = "multipart/form-data",
        description = "Image file (jpeg, png, gif, webp or avif, at most 5 MB)",
    ),
    responses(
        (status = 201, description = "Image uploaded", body = ApiResponse<UploadedImageDto>),
        (status = 400, description = "Missing file or unsupported type"),
        (status = 401, description = "Authentication required"),
        (status = 413, description = "File too large"),
        (status = 502, description = "Image storage unavailable")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_image(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<UploadService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadedImageDto>>)> {
    let mut images = read_images(&mut multipart, "file", 1).await?;
    let image = images.remove(0);

    let uploaded = service.upload_image(image).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(uploaded),
            Some("Image uploaded successfully".to_string()),
            None,
        )),
    ))
}
