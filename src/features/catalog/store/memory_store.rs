use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::faker::name::en::Name;
use fake::Fake;
use uuid::Uuid;

use super::{CatalogStore, ProductWindow};
use crate::core::error::{AppError, Result};
use crate::features::catalog::models::CatalogProduct;
use crate::features::categories::models::Category;
use crate::features::products::models::{order_product_images, Product, ProductImage};
use crate::features::site_content::models::SiteContent;
use crate::features::testimonials::models::Testimonial;
use crate::shared::validation::generate_slug;

/// In-process catalog for tests; applies the same visibility and ordering
/// rules as the SQL store.
#[derive(Default)]
pub struct InMemoryCatalogStore {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub images: Vec<ProductImage>,
    pub testimonials: Vec<Testimonial>,
    pub site_content: Vec<SiteContent>,
    failing: AtomicBool,
}

/// Fixed clock so ordering by creation time is deterministic
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes)
}

pub fn category(name: &str, is_active: bool) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: generate_slug(name),
        description: None,
        is_active,
        created_at: at(0),
    }
}

pub fn product(category_id: Uuid, name: &str, minutes: i64) -> Product {
    Product {
        id: Uuid::new_v4(),
        category_id,
        name: name.to_string(),
        description: format!("{} made by hand", name),
        price: Some("₹1,200".to_string()),
        image_url: None,
        is_featured: false,
        is_active: true,
        created_at: at(minutes),
    }
}

pub fn image(product_id: Uuid, url: &str, position: Option<i32>, minutes: i64) -> ProductImage {
    ProductImage {
        id: Uuid::new_v4(),
        product_id,
        url: url.to_string(),
        position,
        created_at: at(minutes),
    }
}

pub fn testimonial(is_active: bool, minutes: i64) -> Testimonial {
    Testimonial {
        id: Uuid::new_v4(),
        name: Name().fake(),
        role: "Bride".to_string(),
        text: "The keepsake box was perfect.".to_string(),
        is_active,
        created_at: at(minutes),
    }
}

pub fn site_section(section: &str, title: &str) -> SiteContent {
    SiteContent {
        id: Uuid::new_v4(),
        section: section.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        updated_at: at(0),
    }
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read fail with a database error
    pub fn fail_reads(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn join(&self, product: &Product) -> CatalogProduct {
        let category = self.categories.iter().find(|c| c.id == product.category_id);
        CatalogProduct {
            product: product.clone(),
            category_name: category.map(|c| c.name.clone()),
            category_slug: category.map(|c| c.slug.clone()),
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_products(&self, window: ProductWindow) -> Result<Vec<CatalogProduct>> {
        self.check()?;

        let mut active: Vec<&Product> = self.products.iter().filter(|p| p.is_active).collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let (limit, offset) = window.bounds();
        let rows = active.into_iter().skip(offset as usize);
        let rows: Vec<&Product> = match limit {
            Some(limit) => rows.take(limit as usize).collect(),
            None => rows.collect(),
        };

        Ok(rows.into_iter().map(|p| self.join(p)).collect())
    }

    async fn count_products(&self) -> Result<i64> {
        self.check()?;
        Ok(self.products.iter().filter(|p| p.is_active).count() as i64)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_product(&self, id: Uuid) -> Result<Option<CatalogProduct>> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .find(|p| p.id == id && p.is_active)
            .map(|p| self.join(p)))
    }

    async fn list_product_images(&self, product_id: Uuid) -> Result<Vec<ProductImage>> {
        self.check()?;
        let mut images: Vec<ProductImage> = self
            .images
            .iter()
            .filter(|i| i.product_id == product_id)
            .cloned()
            .collect();
        order_product_images(&mut images);
        Ok(images)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>> {
        self.check()?;
        let mut testimonials: Vec<Testimonial> = self
            .testimonials
            .iter()
            .filter(|t| t.is_active)
            .cloned()
            .collect();
        testimonials.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(testimonials)
    }

    async fn list_site_content(&self) -> Result<Vec<SiteContent>> {
        self.check()?;
        Ok(self.site_content.clone())
    }
}
