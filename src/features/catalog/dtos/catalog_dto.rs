use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::catalog::models::CatalogProduct;
use crate::features::catalog::services::GalleryItem;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::contact::services::ContactLinks;
use crate::features::site_content::dtos::SiteContentMapDto;
use crate::features::testimonials::dtos::TestimonialResponseDto;

/// Query params for catalog views
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CatalogQuery {
    /// `all` (default) or a category id
    pub category: Option<String>,
    /// 1-based page number, clamped into range
    pub page: Option<usize>,
}

/// Product card shown in listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSummaryDto {
    pub id: Uuid,
    pub category_id: Uuid,
    /// Category name, "Handcrafted" when the product has none
    pub category_name: String,
    pub category_slug: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    /// WhatsApp link asking about this product
    pub enquiry_url: String,
}

impl ProductSummaryDto {
    pub fn new(row: &CatalogProduct, links: &ContactLinks) -> Self {
        let p = &row.product;
        Self {
            id: p.id,
            category_id: p.category_id,
            category_name: row.display_category().to_string(),
            category_slug: row.category_slug.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price.clone(),
            image_url: p.image_url.clone(),
            is_featured: p.is_featured,
            created_at: p.created_at,
            enquiry_url: links.product_interest_url(&p.name),
        }
    }
}

/// Everything the home page renders
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomePageDto {
    /// Newest products (at most 10), filtered by the selected category
    pub products: Vec<ProductSummaryDto>,
    pub categories: Vec<CategoryResponseDto>,
    pub selected_category: String,
    pub testimonials: Vec<TestimonialResponseDto>,
    pub site_content: SiteContentMapDto,
    /// Count of all active products
    pub product_count: i64,
    pub whatsapp_url: String,
}

/// One page of the catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogPageDto {
    pub products: Vec<ProductSummaryDto>,
    pub categories: Vec<CategoryResponseDto>,
    pub selected_category: String,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    /// Products matching the selected category
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GalleryDto {
    pub items: Vec<GalleryItem>,
    pub active_index: usize,
}

/// Product page payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailDto {
    pub product: ProductSummaryDto,
    pub gallery: GalleryDto,
    /// Up to three other products, newest first
    pub related: Vec<ProductSummaryDto>,
    /// "Enquire / Customize" WhatsApp link
    pub enquiry_url: String,
}
