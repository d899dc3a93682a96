use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::site_content::dtos::{SiteContentDto, SiteContentMapDto, UpsertSiteContentDto};
use crate::features::site_content::models::{index_by_section, SiteContent};

const MAX_SECTION_LENGTH: usize = 64;

fn normalize_section(section: &str) -> Result<String> {
    let section = section.trim();
    if section.is_empty() || section.len() > MAX_SECTION_LENGTH {
        return Err(AppError::Validation(format!(
            "Section must be 1-{} characters",
            MAX_SECTION_LENGTH
        )));
    }
    Ok(section.to_string())
}

pub struct SiteContentService {
    pool: PgPool,
}

impl SiteContentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every section, keyed by section name
    pub async fn list(&self) -> Result<SiteContentMapDto> {
        let rows = sqlx::query_as::<_, SiteContent>(
            "SELECT id, section, title, description, updated_at FROM site_content ORDER BY section",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list site content: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(index_by_section(rows).into())
    }

    /// Write one section, creating it when missing
    pub async fn upsert(&self, section: &str, dto: UpsertSiteContentDto) -> Result<SiteContentDto> {
        let section = normalize_section(section)?;

        let row = sqlx::query_as::<_, SiteContent>(
            r#"
            INSERT INTO site_content (section, title, description, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (section)
            DO UPDATE SET title = EXCLUDED.title,
                          description = EXCLUDED.description,
                          updated_at = NOW()
            RETURNING id, section, title, description, updated_at
            "#,
        )
        .bind(&section)
        .bind(&dto.title)
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save site content '{}': {:?}", section, e);
            AppError::Database(e)
        })?;

        tracing::info!("Updated site content section '{}'", row.section);
        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_section() {
        assert_eq!(normalize_section(" hero ").unwrap(), "hero");
        assert!(normalize_section("  ").is_err());
        assert!(normalize_section(&"x".repeat(65)).is_err());
    }
}
