use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::testimonials::models::Testimonial;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestimonialResponseDto {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "Anniversary gift")]
    pub role: String,
    pub text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Testimonial> for TestimonialResponseDto {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            name: t.name,
            role: t.role,
            text: t.text,
            is_active: t.is_active,
            created_at: t.created_at,
        }
    }
}

/// Request DTO for creating or updating a testimonial
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertTestimonialDto {
    #[validate(custom(
        function = "crate::shared::validation::not_blank",
        message = "Name is required"
    ))]
    pub name: String,

    #[validate(custom(
        function = "crate::shared::validation::not_blank",
        message = "Role is required"
    ))]
    pub role: String,

    #[validate(custom(
        function = "crate::shared::validation::not_blank",
        message = "Text is required"
    ))]
    pub text: String,

    #[serde(default)]
    pub is_active: Option<bool>,
}
