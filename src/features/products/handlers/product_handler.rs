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
use crate::features::products::dtos::{ProductResponseDto, UpsertProductDto};
use crate::features::products::services::ProductService;
use crate::shared::types::{ApiResponse, Meta};

/// List all products (inactive included)
#[utoipa::path(
    get,
    path = "/api/admin/products",
    responses(
        (status = 200, description = "All products, newest first", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_products(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products = service.list().await?;
    let total = products.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(products),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_product(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = UpsertProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unknown category")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<UpsertProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    dto.validate()?;

    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(product),
            Some("Product created successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpsertProductDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unknown category"),
        (status = 404, description = "Product not found")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()?;

    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(product),
        Some("Product updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Product deleted successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/admin/products/{id}/toggle-active",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Visibility flipped", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn toggle_product_active(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.toggle_active(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/products/{id}/toggle-featured",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Featured flag flipped", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn toggle_product_featured(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.toggle_featured(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}
