use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::catalog::dtos::{
    CatalogPageDto, GalleryDto, HomePageDto, ProductDetailDto, ProductSummaryDto,
};
use crate::features::catalog::services::{
    CatalogBrowser, CatalogRepository, CategoryFilter, ProductGallery,
};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::contact::services::ContactLinks;
use crate::features::site_content::dtos::SiteContentMapDto;
use crate::features::testimonials::dtos::TestimonialResponseDto;
use crate::shared::constants::{CATALOG_PAGE_SIZE, HOME_PRODUCT_LIMIT, RELATED_PRODUCTS_LIMIT};

/// Page loaders for the public site.
///
/// Reads that a page needs are issued together and awaited as a group.
pub struct StorefrontService {
    repository: CatalogRepository,
    links: Arc<ContactLinks>,
}

impl StorefrontService {
    pub fn new(repository: CatalogRepository, links: Arc<ContactLinks>) -> Self {
        Self { repository, links }
    }

    fn summaries(&self, browser: &CatalogBrowser) -> Vec<ProductSummaryDto> {
        browser
            .visible()
            .into_iter()
            .map(|p| ProductSummaryDto::new(p, &self.links))
            .collect()
    }

    fn category_dtos(browser: &CatalogBrowser) -> Vec<CategoryResponseDto> {
        browser
            .categories()
            .iter()
            .cloned()
            .map(CategoryResponseDto::from)
            .collect()
    }

    pub async fn home(&self, filter: CategoryFilter) -> HomePageDto {
        let (products, categories, testimonials, site_content, product_count) = futures::join!(
            self.repository.fetch_products(Some(HOME_PRODUCT_LIMIT), None),
            self.repository.fetch_categories(),
            self.repository.fetch_testimonials(),
            self.repository.fetch_site_content_map(),
            self.repository.fetch_products_count(),
        );

        let mut browser = CatalogBrowser::new(products, categories, false);
        browser.select_category(filter);

        HomePageDto {
            products: self.summaries(&browser),
            categories: Self::category_dtos(&browser),
            selected_category: browser.filter().to_string(),
            testimonials: testimonials.into_iter().map(Into::into).collect(),
            site_content: site_content.into(),
            product_count,
            whatsapp_url: self.links.chat_url(),
        }
    }

    pub async fn catalog(&self, filter: CategoryFilter, page: usize) -> CatalogPageDto {
        let (products, categories) = futures::join!(
            self.repository.fetch_products(None, None),
            self.repository.fetch_categories(),
        );

        let mut browser = CatalogBrowser::new(products, categories, true);
        browser.select_category(filter);
        browser.set_page(page);

        CatalogPageDto {
            products: self.summaries(&browser),
            categories: Self::category_dtos(&browser),
            selected_category: browser.filter().to_string(),
            page: browser.current_page(),
            page_size: CATALOG_PAGE_SIZE,
            page_count: browser.page_count(),
            total: browser.filtered_count(),
        }
    }

    pub async fn product_detail(&self, id: Uuid) -> Result<ProductDetailDto> {
        let (detail, all_products) = futures::join!(
            self.repository.fetch_product_by_id(id),
            self.repository.fetch_products(None, None),
        );

        let detail =
            detail.ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

        let gallery = ProductGallery::assemble(
            &detail.images,
            detail.product.product.image_url.as_deref(),
        );

        let related = all_products
            .iter()
            .filter(|p| p.product.id != id)
            .take(RELATED_PRODUCTS_LIMIT)
            .map(|p| ProductSummaryDto::new(p, &self.links))
            .collect();

        Ok(ProductDetailDto {
            enquiry_url: self
                .links
                .product_enquiry_url(&detail.product.product.name),
            product: ProductSummaryDto::new(&detail.product, &self.links),
            gallery: GalleryDto {
                items: gallery.items(),
                active_index: gallery.active_index(),
            },
            related,
        })
    }

    pub async fn categories(&self) -> Vec<CategoryResponseDto> {
        self.repository
            .fetch_categories()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub async fn testimonials(&self) -> Vec<TestimonialResponseDto> {
        self.repository
            .fetch_testimonials()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub async fn site_content(&self) -> SiteContentMapDto {
        self.repository.fetch_site_content_map().await.into()
    }
}
