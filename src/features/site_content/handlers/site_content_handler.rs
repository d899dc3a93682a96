use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::site_content::dtos::{SiteContentDto, SiteContentMapDto, UpsertSiteContentDto};
use crate::features::site_content::services::SiteContentService;
use crate::shared::types::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/admin/site-content",
    responses(
        (status = 200, description = "Sections keyed by name", body = ApiResponse<SiteContentMapDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin-site-content",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_site_content(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<SiteContentService>>,
) -> Result<Json<ApiResponse<SiteContentMapDto>>> {
    let content = service.list().await?;
    Ok(Json(ApiResponse::success(Some(content), None, None)))
}

/// Create or replace one section
#[utoipa::path(
    put,
    path = "/api/admin/site-content/{section}",
    params(
        ("section" = String, Path, description = "Section key, e.g. hero or about")
    ),
    request_body = UpsertSiteContentDto,
    responses(
        (status = 200, description = "Section saved", body = ApiResponse<SiteContentDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "admin-site-content",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upsert_site_content(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<SiteContentService>>,
    Path(section): Path<String>,
    AppJson(dto): AppJson<UpsertSiteContentDto>,
) -> Result<Json<ApiResponse<SiteContentDto>>> {
    dto.validate()?;

    let content = service.upsert(&section, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(content),
        Some("Content saved successfully".to_string()),
        None,
    )))
}
