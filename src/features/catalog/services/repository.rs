//! Public read functions over the catalog store.
//!
//! Store failures never reach callers: they are logged and collapsed into an
//! empty list, zero or `None`, so public pages always render.

use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::features::catalog::models::{CatalogProduct, ProductDetail};
use crate::features::catalog::store::{CatalogStore, ProductWindow};
use crate::features::categories::models::Category;
use crate::features::products::models::order_product_images;
use crate::features::site_content::models::{index_by_section, SiteContent};
use crate::features::testimonials::models::Testimonial;

#[derive(Clone)]
pub struct CatalogRepository {
    store: Arc<dyn CatalogStore>,
}

impl CatalogRepository {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Active products, newest first
    pub async fn fetch_products(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Vec<CatalogProduct> {
        self.store
            .list_products(ProductWindow::new(limit, offset))
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Error fetching products: {:?}", e);
                Vec::new()
            })
    }

    pub async fn fetch_products_count(&self) -> i64 {
        self.store.count_products().await.unwrap_or_else(|e| {
            tracing::error!("Error counting products: {:?}", e);
            0
        })
    }

    pub async fn fetch_categories(&self) -> Vec<Category> {
        self.store.list_categories().await.unwrap_or_else(|e| {
            tracing::error!("Error fetching categories: {:?}", e);
            Vec::new()
        })
    }

    /// Active product with its gallery, `None` when missing, hidden or unreadable
    pub async fn fetch_product_by_id(&self, id: Uuid) -> Option<ProductDetail> {
        let product = match self.store.find_product(id).await {
            Ok(product) => product?,
            Err(e) => {
                tracing::error!("Error fetching product {}: {:?}", id, e);
                return None;
            }
        };

        let mut images = match self.store.list_product_images(id).await {
            Ok(images) => images,
            Err(e) => {
                tracing::error!("Error fetching images for product {}: {:?}", id, e);
                return None;
            }
        };
        order_product_images(&mut images);

        Some(ProductDetail { product, images })
    }

    pub async fn fetch_testimonials(&self) -> Vec<Testimonial> {
        self.store.list_testimonials().await.unwrap_or_else(|e| {
            tracing::error!("Error fetching testimonials: {:?}", e);
            Vec::new()
        })
    }

    pub async fn fetch_site_content(&self) -> Vec<SiteContent> {
        self.store.list_site_content().await.unwrap_or_else(|e| {
            tracing::error!("Error fetching site content: {:?}", e);
            Vec::new()
        })
    }

    pub async fn fetch_site_content_map(&self) -> BTreeMap<String, SiteContent> {
        index_by_section(self.fetch_site_content().await)
    }
}
