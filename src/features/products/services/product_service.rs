use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::is_foreign_key_violation;
use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{ProductResponseDto, UpsertProductDto};
use crate::features::products::models::Product;

const PRODUCT_COLUMNS: &str =
    "id, category_id, name, description, price, image_url, is_featured, is_active, created_at";

/// Empty optional text is stored as NULL
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn map_write_error(e: sqlx::Error, category_id: Uuid) -> AppError {
    if is_foreign_key_violation(&e) {
        return AppError::BadRequest(format!("Category {} does not exist", category_id));
    }
    tracing::error!("Failed to write product: {:?}", e);
    AppError::Database(e)
}

/// Back-office operations on products
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All products, newest first, inactive included
    pub async fn list(&self) -> Result<Vec<ProductResponseDto>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<ProductResponseDto> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product: {:?}", e);
            AppError::Database(e)
        })?
        .map(|p| p.into())
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    pub async fn create(&self, dto: UpsertProductDto) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products
                (category_id, name, description, price, image_url, is_featured, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(dto.category_id)
        .bind(dto.name.trim())
        .bind(dto.description.trim())
        .bind(non_empty(dto.price.as_deref()))
        .bind(non_empty(dto.image_url.as_deref()))
        .bind(dto.is_featured.unwrap_or(false))
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, dto.category_id))?;

        tracing::info!("Created product '{}' ({})", product.name, product.id);
        Ok(product.into())
    }

    /// Replace the editable fields; flags are kept unless supplied
    pub async fn update(&self, id: Uuid, dto: UpsertProductDto) -> Result<ProductResponseDto> {
        sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET category_id = $2, name = $3, description = $4, price = $5, image_url = $6,
                is_featured = COALESCE($7, is_featured),
                is_active = COALESCE($8, is_active)
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.category_id)
        .bind(dto.name.trim())
        .bind(dto.description.trim())
        .bind(non_empty(dto.price.as_deref()))
        .bind(non_empty(dto.image_url.as_deref()))
        .bind(dto.is_featured)
        .bind(dto.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, dto.category_id))?
        .map(|p| p.into())
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    /// Delete the row; gallery rows cascade, bucket objects stay
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product {} not found", id)));
        }

        tracing::info!("Deleted product {}", id);
        Ok(())
    }

    pub async fn toggle_active(&self, id: Uuid) -> Result<ProductResponseDto> {
        self.toggle(id, "is_active").await
    }

    pub async fn toggle_featured(&self, id: Uuid) -> Result<ProductResponseDto> {
        self.toggle(id, "is_featured").await
    }

    /// `column` is one of the fixed flag names above
    async fn toggle(&self, id: Uuid, column: &'static str) -> Result<ProductResponseDto> {
        sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET {column} = NOT {column} WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to toggle product {}: {:?}", column, e);
            AppError::Database(e)
        })?
        .map(|p| p.into())
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }
}
