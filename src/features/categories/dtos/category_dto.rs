use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            is_active: c.is_active,
            created_at: c.created_at,
        }
    }
}

/// Request DTO for creating or updating a category
///
/// When `slug` is missing or blank it is derived from `name`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertCategoryDto {
    #[validate(
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Name is required"
        ),
        length(max = 120, message = "Name must not exceed 120 characters")
    )]
    #[schema(example = "Resin Coasters & Trays")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "resin-coasters-trays")]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,
}
