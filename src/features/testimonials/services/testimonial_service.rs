use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::testimonials::dtos::{TestimonialResponseDto, UpsertTestimonialDto};
use crate::features::testimonials::models::Testimonial;

const TESTIMONIAL_COLUMNS: &str = "id, name, role, text, is_active, created_at";

pub struct TestimonialService {
    pool: PgPool,
}

impl TestimonialService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TestimonialResponseDto>> {
        let testimonials = sqlx::query_as::<_, Testimonial>(&format!(
            "SELECT {TESTIMONIAL_COLUMNS} FROM testimonials ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list testimonials: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(testimonials.into_iter().map(|t| t.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<TestimonialResponseDto> {
        sqlx::query_as::<_, Testimonial>(&format!(
            "SELECT {TESTIMONIAL_COLUMNS} FROM testimonials WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get testimonial: {:?}", e);
            AppError::Database(e)
        })?
        .map(|t| t.into())
        .ok_or_else(|| AppError::NotFound(format!("Testimonial {} not found", id)))
    }

    pub async fn create(&self, dto: UpsertTestimonialDto) -> Result<TestimonialResponseDto> {
        let testimonial = sqlx::query_as::<_, Testimonial>(&format!(
            r#"
            INSERT INTO testimonials (name, role, text, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING {TESTIMONIAL_COLUMNS}
            "#
        ))
        .bind(dto.name.trim())
        .bind(dto.role.trim())
        .bind(dto.text.trim())
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create testimonial: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Created testimonial {}", testimonial.id);
        Ok(testimonial.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpsertTestimonialDto,
    ) -> Result<TestimonialResponseDto> {
        sqlx::query_as::<_, Testimonial>(&format!(
            r#"
            UPDATE testimonials
            SET name = $2, role = $3, text = $4, is_active = COALESCE($5, is_active)
            WHERE id = $1
            RETURNING {TESTIMONIAL_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.name.trim())
        .bind(dto.role.trim())
        .bind(dto.text.trim())
        .bind(dto.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update testimonial: {:?}", e);
            AppError::Database(e)
        })?
        .map(|t| t.into())
        .ok_or_else(|| AppError::NotFound(format!("Testimonial {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete testimonial: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Testimonial {} not found", id)));
        }
        Ok(())
    }

    pub async fn toggle_active(&self, id: Uuid) -> Result<TestimonialResponseDto> {
        sqlx::query_as::<_, Testimonial>(&format!(
            "UPDATE testimonials SET is_active = NOT is_active WHERE id = $1 RETURNING {TESTIMONIAL_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to toggle testimonial: {:?}", e);
            AppError::Database(e)
        })?
        .map(|t| t.into())
        .ok_or_else(|| AppError::NotFound(format!("Testimonial {} not found", id)))
    }
}
