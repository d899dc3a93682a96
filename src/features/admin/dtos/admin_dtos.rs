use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Counters shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DashboardStatsDto {
    pub total_products: i64,
    pub active_products: i64,
    pub featured_products: i64,
    pub total_categories: i64,
}
