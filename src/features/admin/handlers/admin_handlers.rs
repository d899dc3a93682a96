use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::admin::dtos::DashboardStatsDto;
use crate::features::admin::services::AdminService;
use crate::features::auth::guards::RequireAdmin;
use crate::shared::types::ApiResponse;

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Product and category counts", body = ApiResponse<DashboardStatsDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_stats(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<DashboardStatsDto>>> {
    let stats = service.stats().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}
