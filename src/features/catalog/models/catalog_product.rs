use sqlx::FromRow;

use crate::features::products::models::{Product, ProductImage};
use crate::shared::constants::FALLBACK_CATEGORY_NAME;

/// Product row joined to its category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CatalogProduct {
    #[sqlx(flatten)]
    pub product: Product,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

impl CatalogProduct {
    /// Category label shown next to the product
    pub fn display_category(&self) -> &str {
        self.category_name
            .as_deref()
            .unwrap_or(FALLBACK_CATEGORY_NAME)
    }
}

/// A product together with its ordered gallery images
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: CatalogProduct,
    pub images: Vec<ProductImage>,
}
