use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::catalog::services::GalleryItem;
use crate::features::catalog::{dtos as catalog_dtos, handlers as catalog_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::site_content::{dtos as site_content_dtos, handlers as site_content_handlers};
use crate::features::testimonials::{dtos as testimonials_dtos, handlers as testimonials_handlers};
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Storefront (public)
        catalog_handlers::get_home,
        catalog_handlers::get_catalog,
        catalog_handlers::get_product,
        catalog_handlers::list_categories,
        catalog_handlers::list_testimonials,
        catalog_handlers::get_site_content,
        // Contact (public)
        contact_handlers::create_contact_link,
        // Admin dashboard
        admin_handlers::get_stats,
        // Admin categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::toggle_category_active,
        // Admin products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        products_handlers::toggle_product_active,
        products_handlers::toggle_product_featured,
        products_handlers::list_product_images,
        products_handlers::upload_product_images,
        products_handlers::delete_product_image,
        // Admin testimonials
        testimonials_handlers::list_testimonials,
        testimonials_handlers::get_testimonial,
        testimonials_handlers::create_testimonial,
        testimonials_handlers::update_testimonial,
        testimonials_handlers::delete_testimonial,
        testimonials_handlers::toggle_testimonial_active,
        // Admin site content
        site_content_handlers::list_site_content,
        site_content_handlers::upsert_site_content,
        // Admin uploads
        uploads_handlers::upload_image,
    ),
    components(
        schemas(
            Meta,
            // Storefront
            catalog_dtos::ProductSummaryDto,
            catalog_dtos::HomePageDto,
            catalog_dtos::CatalogPageDto,
            catalog_dtos::GalleryDto,
            catalog_dtos::ProductDetailDto,
            GalleryItem,
            ApiResponse<catalog_dtos::HomePageDto>,
            ApiResponse<catalog_dtos::CatalogPageDto>,
            ApiResponse<catalog_dtos::ProductDetailDto>,
            // Contact
            contact_dtos::ContactRequestDto,
            contact_dtos::ContactLinkDto,
            ApiResponse<contact_dtos::ContactLinkDto>,
            // Admin
            admin_dtos::DashboardStatsDto,
            ApiResponse<admin_dtos::DashboardStatsDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::UpsertCategoryDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Products
            products_dtos::ProductResponseDto,
            products_dtos::UpsertProductDto,
            products_dtos::ProductImageDto,
            products_dtos::UploadGalleryDto,
            products_dtos::GalleryUploadResultDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            ApiResponse<Vec<products_dtos::ProductImageDto>>,
            ApiResponse<products_dtos::GalleryUploadResultDto>,
            // Testimonials
            testimonials_dtos::TestimonialResponseDto,
            testimonials_dtos::UpsertTestimonialDto,
            ApiResponse<testimonials_dtos::TestimonialResponseDto>,
            ApiResponse<Vec<testimonials_dtos::TestimonialResponseDto>>,
            // Site content
            site_content_dtos::SiteContentDto,
            site_content_dtos::SiteContentMapDto,
            site_content_dtos::UpsertSiteContentDto,
            ApiResponse<site_content_dtos::SiteContentDto>,
            ApiResponse<site_content_dtos::SiteContentMapDto>,
            // Uploads
            uploads_dtos::UploadImageDto,
            uploads_dtos::UploadedImageDto,
            ApiResponse<uploads_dtos::UploadedImageDto>,
        )
    ),
    tags(
        (name = "storefront", description = "Public catalog, product detail and home page data"),
        (name = "contact", description = "WhatsApp contact links (public)"),
        (name = "admin", description = "Back-office dashboard (admin only)"),
        (name = "admin-categories", description = "Category management (admin only)"),
        (name = "admin-products", description = "Product and gallery management (admin only)"),
        (name = "admin-testimonials", description = "Testimonial management (admin only)"),
        (name = "admin-site-content", description = "Editable site copy (admin only)"),
        (name = "admin-uploads", description = "Image uploads to the product-images bucket (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Creative Crafts API",
        version = "0.1.0",
        description = "Storefront and back-office API for Creative Crafts",
    )
)]
pub struct ApiDoc;

/// Adds the Bearer JWT security scheme to the document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Overrides the document info with values from configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_storefront_and_admin_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/home",
            "/api/catalog",
            "/api/catalog/{id}",
            "/api/contact",
            "/api/admin/stats",
            "/api/admin/categories",
            "/api/admin/products/{id}/images",
            "/api/admin/site-content/{section}",
            "/api/admin/uploads",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Crafts".to_string(),
            version: "9.9.9".to_string(),
            description: "Docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Crafts");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Docs"));
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("bearer_auth")));
    }
}
