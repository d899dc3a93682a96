use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::guards::RequireAdmin;
use crate::features::products::dtos::{GalleryUploadResultDto, ProductImageDto, UploadGalleryDto};
use crate::features::products::services::GalleryService;
use crate::features::uploads::multipart::read_images;
use crate::shared::constants::MAX_GALLERY_UPLOADS;
use crate::shared::types::ApiResponse;

/// List a product's gallery in display order
#[utoipa::path(
    get,
    path = "/api/admin/products/{id}/images",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Gallery images", body = ApiResponse<Vec<ProductImageDto>>),
        (status = 404, description = "Product not found")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_product_images(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<GalleryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ProductImageDto>>>> {
    let images = service.list(id).await?;
    Ok(Json(ApiResponse::success(Some(images), None, None)))
}

/// Add images to a product's gallery
///
/// Files are uploaded one after another. Files that fail to upload are
/// skipped and counted in the response.
#[utoipa::path(
    post,
    path = "/api/admin/products/{id}/images",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body(
        content = UploadGalleryDto,
        content_type = "multipart/form-data",
        description = "Up to six images under the `files` field, each at most 5 MB",
    ),
    responses(
        (status = 201, description = "Images added", body = ApiResponse<GalleryUploadResultDto>),
        (status = 400, description = "No files, too many files or unsupported type"),
        (status = 404, description = "Product not found"),
        (status = 413, description = "File too large"),
        (status = 502, description = "No file could be stored")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_product_images(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<GalleryService>>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<GalleryUploadResultDto>>)> {
    let images = read_images(&mut multipart, "files", MAX_GALLERY_UPLOADS).await?;

    let result = service.upload(id, images).await?;
    let message = match result.skipped {
        0 => "Images uploaded successfully".to_string(),
        n => format!("Images uploaded; {} file(s) could not be stored", n),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(result), Some(message), None)),
    ))
}

/// Delete a gallery image
///
/// The row is removed first; removing the stored file is best-effort.
#[utoipa::path(
    delete,
    path = "/api/admin/product-images/{id}",
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image deleted"),
        (status = 404, description = "Image not found")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product_image(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<GalleryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_image(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Image deleted successfully".to_string()),
        None,
    )))
}
