use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{is_foreign_key_violation, is_unique_violation};
use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, UpsertCategoryDto};
use crate::features::categories::models::Category;
use crate::shared::validation::{generate_slug, SLUG_REGEX};

const CATEGORY_COLUMNS: &str = "id, name, slug, description, is_active, created_at";

/// Slug to store for a category.
///
/// A supplied, non-blank slug must already be in slug form; otherwise the
/// slug is generated from the name.
pub fn resolve_slug(name: &str, slug: Option<&str>) -> Result<String> {
    if let Some(slug) = slug.map(str::trim).filter(|s| !s.is_empty()) {
        if !SLUG_REGEX.is_match(slug) {
            return Err(AppError::Validation(format!(
                "Slug '{}' must be lowercase letters and digits joined by single hyphens",
                slug
            )));
        }
        return Ok(slug.to_string());
    }

    let generated = generate_slug(name);
    if generated.is_empty() {
        return Err(AppError::Validation(
            "Name must contain at least one letter or digit".to_string(),
        ));
    }
    Ok(generated)
}

fn map_write_error(e: sqlx::Error, slug: &str) -> AppError {
    if is_unique_violation(&e) {
        return AppError::Conflict(format!("Category slug '{}' already exists", slug));
    }
    tracing::error!("Failed to write category: {:?}", e);
    AppError::Database(e)
}

/// Back-office operations on categories
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All categories, newest first, inactive included
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category: {:?}", e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn create(&self, dto: UpsertCategoryDto) -> Result<CategoryResponseDto> {
        let slug = resolve_slug(&dto.name, dto.slug.as_deref())?;

        let category = sqlx::query_as::<_, Category>(&format!(
            r#"
            INSERT INTO categories (name, slug, description, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(dto.name.trim())
        .bind(&slug)
        .bind(dto.description.as_deref())
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &slug))?;

        tracing::info!("Created category '{}' ({})", category.slug, category.id);
        Ok(category.into())
    }

    /// Replace name, slug and description; keeps `is_active` unless supplied
    pub async fn update(&self, id: Uuid, dto: UpsertCategoryDto) -> Result<CategoryResponseDto> {
        let slug = resolve_slug(&dto.name, dto.slug.as_deref())?;

        let category = sqlx::query_as::<_, Category>(&format!(
            r#"
            UPDATE categories
            SET name = $2, slug = $3, description = $4,
                is_active = COALESCE($5, is_active)
            WHERE id = $1
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.name.trim())
        .bind(&slug)
        .bind(dto.description.as_deref())
        .bind(dto.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &slug))?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return AppError::Conflict(
                        "Category still has products; move or delete them first".to_string(),
                    );
                }
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        tracing::info!("Deleted category {}", id);
        Ok(())
    }

    pub async fn toggle_active(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "UPDATE categories SET is_active = NOT is_active WHERE id = $1 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to toggle category: {:?}", e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_generated_when_missing_or_blank() {
        assert_eq!(
            resolve_slug("Resin Coasters & Trays", None).unwrap(),
            "resin-coasters-trays"
        );
        assert_eq!(resolve_slug("Gift Boxes!!", Some("  ")).unwrap(), "gift-boxes");
    }

    #[test]
    fn test_supplied_slug_kept() {
        assert_eq!(resolve_slug("Gift Boxes", Some(" boxes ")).unwrap(), "boxes");
    }

    #[test]
    fn test_supplied_slug_must_be_slug_shaped() {
        assert!(matches!(
            resolve_slug("Gift Boxes", Some("Gift Boxes")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_name_without_alphanumerics_rejected() {
        assert!(matches!(resolve_slug("!!!", None), Err(AppError::Validation(_))));
    }
}
