use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CatalogStore, ProductWindow};
use crate::core::error::{AppError, Result};
use crate::features::catalog::models::CatalogProduct;
use crate::features::categories::models::Category;
use crate::features::products::models::ProductImage;
use crate::features::site_content::models::SiteContent;
use crate::features::testimonials::models::Testimonial;

const CATALOG_PRODUCT_COLUMNS: &str = r#"
    p.id, p.category_id, p.name, p.description, p.price, p.image_url,
    p.is_featured, p.is_active, p.created_at,
    c.name AS category_name, c.slug AS category_slug
"#;

/// PostgreSQL-backed catalog reads
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_products(&self, window: ProductWindow) -> Result<Vec<CatalogProduct>> {
        let (limit, offset) = window.bounds();

        // LIMIT NULL is unbounded
        let sql = format!(
            r#"
            SELECT {CATALOG_PRODUCT_COLUMNS}
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE p.is_active = TRUE
            ORDER BY p.created_at DESC
            LIMIT $1 OFFSET $2
            "#
        );

        sqlx::query_as::<_, CatalogProduct>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list catalog products: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn count_products(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE is_active = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count catalog products: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, description, is_active, created_at
            FROM categories
            WHERE is_active = TRUE
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list catalog categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_product(&self, id: Uuid) -> Result<Option<CatalogProduct>> {
        let sql = format!(
            r#"
            SELECT {CATALOG_PRODUCT_COLUMNS}
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1 AND p.is_active = TRUE
            "#
        );

        sqlx::query_as::<_, CatalogProduct>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get catalog product: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_product_images(&self, product_id: Uuid) -> Result<Vec<ProductImage>> {
        sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT id, product_id, url, position, created_at
            FROM product_images
            WHERE product_id = $1
            ORDER BY position ASC NULLS FIRST, created_at ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list product images: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>> {
        sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT id, name, role, text, is_active, created_at
            FROM testimonials
            WHERE is_active = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list testimonials: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_site_content(&self) -> Result<Vec<SiteContent>> {
        sqlx::query_as::<_, SiteContent>(
            "SELECT id, section, title, description, updated_at FROM site_content",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list site content: {:?}", e);
            AppError::Database(e)
        })
    }
}
