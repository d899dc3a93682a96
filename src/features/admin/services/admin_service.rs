use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::DashboardStatsDto;

/// Service for dashboard queries
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn stats(&self) -> Result<DashboardStatsDto> {
        sqlx::query_as::<_, DashboardStatsDto>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM products) AS total_products,
                (SELECT COUNT(*) FROM products WHERE is_active) AS active_products,
                (SELECT COUNT(*) FROM products WHERE is_featured) AS featured_products,
                (SELECT COUNT(*) FROM categories) AS total_categories
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load dashboard stats: {:?}", e);
            AppError::Database(e)
        })
    }
}
