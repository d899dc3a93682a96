use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::catalog::handlers;
use crate::features::catalog::services::StorefrontService;

/// Create routes for the public storefront
///
/// Note: These routes are public (no authentication required)
pub fn routes(service: Arc<StorefrontService>) -> Router {
    Router::new()
        .route("/api/home", get(handlers::get_home))
        .route("/api/catalog", get(handlers::get_catalog))
        .route("/api/catalog/{id}", get(handlers::get_product))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/testimonials", get(handlers::list_testimonials))
        .route("/api/site-content", get(handlers::get_site_content))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::dtos::{CatalogPageDto, HomePageDto, ProductDetailDto};
    use crate::features::catalog::services::{CatalogRepository, GalleryItem};
    use crate::features::catalog::store::memory_store::*;
    use crate::features::categories::dtos::CategoryResponseDto;
    use crate::features::contact::services::ContactLinks;
    use crate::features::site_content::dtos::SiteContentMapDto;
    use crate::features::testimonials::dtos::TestimonialResponseDto;
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use uuid::Uuid;

    struct Fixture {
        server: TestServer,
        resin: Uuid,
        candles: Uuid,
        featured: Uuid,
    }

    /// 14 resin products and 3 candles, newest first by name suffix
    fn fixture() -> Fixture {
        fixture_with(|_| {})
    }

    fn fixture_with(adjust: impl FnOnce(&mut InMemoryCatalogStore)) -> Fixture {
        let mut store = InMemoryCatalogStore::new();
        let resin = category("Resin Art", true);
        let candles = category("Candles", true);
        let hidden = category("Hidden", false);

        for i in 0..14 {
            store.products.push(product(resin.id, &format!("Resin {:02}", i), i));
        }
        for i in 0..3 {
            store.products.push(product(candles.id, &format!("Candle {}", i), 100 + i));
        }
        let mut inactive = product(resin.id, "Retired", 500);
        inactive.is_active = false;
        store.products.push(inactive);

        let mut featured = product(candles.id, "Keepsake Lantern", 50);
        featured.image_url = Some("https://cdn.test/lantern.jpg".to_string());
        let featured_id = featured.id;
        store.products.push(featured);
        store.images = vec![
            image(featured_id, "https://cdn.test/side.jpg", Some(1), 1),
            image(featured_id, "https://cdn.test/lantern.jpg", None, 2),
        ];

        store.testimonials = vec![testimonial(true, 1), testimonial(false, 2)];
        store.site_content = vec![site_section("hero", "Handmade with love")];

        let ids = (resin.id, candles.id);
        store.categories = vec![resin, candles, hidden];
        adjust(&mut store);

        let service = Arc::new(StorefrontService::new(
            CatalogRepository::new(Arc::new(store)),
            Arc::new(ContactLinks::new("1234567890")),
        ));

        Fixture {
            server: TestServer::new(routes(service)).unwrap(),
            resin: ids.0,
            candles: ids.1,
            featured: featured_id,
        }
    }

    #[tokio::test]
    async fn test_catalog_first_page() {
        let f = fixture();

        let response = f.server.get("/api/catalog").await;

        response.assert_status_ok();
        let page = response.json::<ApiResponse<CatalogPageDto>>().data.unwrap();
        assert_eq!(page.total, 18);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.products.len(), 10);
        assert_eq!(page.products[0].name, "Candle 2");
        assert_eq!(page.selected_category, "all");
        assert!(page.products.iter().all(|p| p.name != "Retired"));
    }

    #[tokio::test]
    async fn test_catalog_filter_and_page() {
        let f = fixture();

        let response = f
            .server
            .get("/api/catalog")
            .add_query_param("category", f.resin)
            .add_query_param("page", 2)
            .await;

        response.assert_status_ok();
        let page = response.json::<ApiResponse<CatalogPageDto>>().data.unwrap();
        assert_eq!(page.total, 14);
        assert_eq!(page.page, 2);
        assert_eq!(page.products.len(), 4);
        assert!(page.products.iter().all(|p| p.category_id == f.resin));
        assert_eq!(page.products[3].name, "Resin 00");
    }

    #[tokio::test]
    async fn test_catalog_page_clamped() {
        let f = fixture();

        let response = f
            .server
            .get("/api/catalog")
            .add_query_param("category", f.candles)
            .add_query_param("page", 7)
            .await;

        let page = response.json::<ApiResponse<CatalogPageDto>>().data.unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.total, 4);
    }

    #[tokio::test]
    async fn test_catalog_rejects_bad_category() {
        let f = fixture();

        let response = f
            .server
            .get("/api/catalog")
            .add_query_param("category", "not-a-uuid")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_home_limits_to_ten_and_counts_all() {
        let f = fixture();

        let response = f.server.get("/api/home").await;

        response.assert_status_ok();
        let home = response.json::<ApiResponse<HomePageDto>>().data.unwrap();
        assert_eq!(home.products.len(), 10);
        assert_eq!(home.product_count, 18);
        assert_eq!(home.categories.len(), 2);
        assert_eq!(home.testimonials.len(), 1);
        assert_eq!(home.site_content.0["hero"].title, "Handmade with love");
        assert_eq!(home.whatsapp_url, "https://wa.me/1234567890");
    }

    #[tokio::test]
    async fn test_home_filters_within_teaser() {
        let f = fixture();

        let response = f
            .server
            .get("/api/home")
            .add_query_param("category", f.candles)
            .await;

        let home = response.json::<ApiResponse<HomePageDto>>().data.unwrap();
        assert_eq!(home.products.len(), 4);
        assert_eq!(home.selected_category, f.candles.to_string());
    }

    #[tokio::test]
    async fn test_product_detail() {
        let f = fixture();

        let response = f.server.get(&format!("/api/catalog/{}", f.featured)).await;

        response.assert_status_ok();
        let detail = response.json::<ApiResponse<ProductDetailDto>>().data.unwrap();
        assert_eq!(detail.product.name, "Keepsake Lantern");
        assert_eq!(detail.product.category_name, "Candles");
        assert_eq!(
            detail.gallery.items,
            vec![
                GalleryItem::Image {
                    url: "https://cdn.test/lantern.jpg".to_string()
                },
                GalleryItem::Image {
                    url: "https://cdn.test/side.jpg".to_string()
                },
            ]
        );
        assert_eq!(detail.gallery.active_index, 0);
        assert_eq!(detail.related.len(), 3);
        assert!(detail.related.iter().all(|p| p.id != f.featured));
        assert!(detail
            .enquiry_url
            .starts_with("https://wa.me/1234567890?text=Hi%21%20I%20love%20the%20Keepsake%20Lantern"));
    }

    #[tokio::test]
    async fn test_product_without_category_or_images() {
        let orphan_id = Uuid::new_v4();
        let f = fixture_with(|store| {
            let mut orphan = product(Uuid::new_v4(), "Mystery Box", 1);
            orphan.id = orphan_id;
            store.products.push(orphan);
        });

        let response = f.server.get(&format!("/api/catalog/{}", orphan_id)).await;

        let detail = response.json::<ApiResponse<ProductDetailDto>>().data.unwrap();
        assert_eq!(detail.product.category_name, "Handcrafted");
        assert_eq!(detail.gallery.items, vec![GalleryItem::placeholder()]);
    }

    #[tokio::test]
    async fn test_product_detail_not_found() {
        let f = fixture();

        let response = f
            .server
            .get(&format!("/api/catalog/{}", Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_inactive_rows_never_listed() {
        let f = fixture();

        let categories = f
            .server
            .get("/api/categories")
            .await
            .json::<ApiResponse<Vec<CategoryResponseDto>>>()
            .data
            .unwrap();
        let testimonials = f
            .server
            .get("/api/testimonials")
            .await
            .json::<ApiResponse<Vec<TestimonialResponseDto>>>()
            .data
            .unwrap();

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Candles", "Resin Art"]);
        assert!(testimonials.iter().all(|t| t.is_active));
        assert_eq!(testimonials.len(), 1);
    }

    #[tokio::test]
    async fn test_site_content_map() {
        let f = fixture();

        let response = f.server.get("/api/site-content").await;

        response.assert_status_ok();
        let content = response.json::<ApiResponse<SiteContentMapDto>>().data.unwrap();
        assert_eq!(content.0.len(), 1);
        assert!(content.0.contains_key("hero"));
    }

    #[tokio::test]
    async fn test_store_failure_renders_empty_catalog() {
        let f = fixture_with(|store| store.fail_reads());

        let response = f.server.get("/api/catalog").await;

        response.assert_status_ok();
        let page = response.json::<ApiResponse<CatalogPageDto>>().data.unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.page_count, 1);
        assert_eq!(page.total, 0);
    }
}
