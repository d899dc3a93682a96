//! Read-side boundary of the catalog.
//!
//! Every method applies the public visibility rules itself: only active
//! categories, products and testimonials are returned. Site content has no
//! visibility flag and is returned in full.

mod pg_store;

#[cfg(test)]
pub mod memory_store;

pub use pg_store::PgCatalogStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::catalog::models::CatalogProduct;
use crate::features::categories::models::Category;
use crate::features::products::models::ProductImage;
use crate::features::site_content::models::SiteContent;
use crate::features::testimonials::models::Testimonial;
use crate::shared::constants::DEFAULT_PRODUCT_WINDOW;

/// Optional cap and offset for a product listing.
///
/// A limit alone caps the result. An offset opens a window of `limit` rows
/// (10 when no limit is given) starting at the offset. A zero offset counts
/// as no offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductWindow {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ProductWindow {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn capped(limit: i64) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }

    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    /// Resolve to `(LIMIT, OFFSET)`; `None` means unbounded
    pub fn bounds(&self) -> (Option<i64>, i64) {
        let limit = self.limit.map(|l| l.max(0));
        match self.offset.filter(|o| *o > 0) {
            Some(offset) => (Some(limit.unwrap_or(DEFAULT_PRODUCT_WINDOW)), offset),
            None => (limit, 0),
        }
    }
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Active products, newest first
    async fn list_products(&self, window: ProductWindow) -> Result<Vec<CatalogProduct>>;

    async fn count_products(&self) -> Result<i64>;

    /// Active categories by name
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// One active product, `None` when missing or hidden
    async fn find_product(&self, id: Uuid) -> Result<Option<CatalogProduct>>;

    async fn list_product_images(&self, product_id: Uuid) -> Result<Vec<ProductImage>>;

    /// Active testimonials, newest first
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>>;

    async fn list_site_content(&self) -> Result<Vec<SiteContent>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_limit_only_caps() {
        assert_eq!(ProductWindow::capped(10).bounds(), (Some(10), 0));
    }

    #[test]
    fn test_window_without_bounds_is_unbounded() {
        assert_eq!(ProductWindow::all().bounds(), (None, 0));
    }

    #[test]
    fn test_window_offset_uses_limit_as_size() {
        assert_eq!(ProductWindow::new(Some(4), Some(8)).bounds(), (Some(4), 8));
    }

    #[test]
    fn test_window_offset_without_limit_defaults_to_ten() {
        assert_eq!(ProductWindow::new(None, Some(20)).bounds(), (Some(10), 20));
    }

    #[test]
    fn test_window_zero_offset_is_ignored() {
        assert_eq!(ProductWindow::new(None, Some(0)).bounds(), (None, 0));
        assert_eq!(ProductWindow::new(Some(3), Some(0)).bounds(), (Some(3), 0));
    }

    #[test]
    fn test_window_negative_values_are_clamped() {
        assert_eq!(ProductWindow::new(Some(-5), None).bounds(), (Some(0), 0));
        assert_eq!(ProductWindow::new(None, Some(-2)).bounds(), (None, 0));
    }
}
