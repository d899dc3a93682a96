use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::products::models::Product;

/// Response DTO for product (back-office view)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    #[schema(example = "₹1,200")]
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            category_id: p.category_id,
            name: p.name,
            description: p.description,
            price: p.price,
            image_url: p.image_url,
            is_featured: p.is_featured,
            is_active: p.is_active,
            created_at: p.created_at,
        }
    }
}

/// Request DTO for creating or updating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertProductDto {
    pub category_id: Uuid,

    #[validate(
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Name is required"
        ),
        length(max = 200, message = "Name must not exceed 200 characters")
    )]
    pub name: String,

    #[validate(custom(
        function = "crate::shared::validation::not_blank",
        message = "Description is required"
    ))]
    pub description: String,

    /// Formatted amount or a label such as "Custom"
    #[serde(default)]
    #[validate(length(max = 50, message = "Price must not exceed 50 characters"))]
    pub price: Option<String>,

    #[serde(default)]
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_featured: Option<bool>,

    #[serde(default)]
    pub is_active: Option<bool>,
}
