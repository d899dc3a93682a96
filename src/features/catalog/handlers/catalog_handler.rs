use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::catalog::dtos::{
    CatalogPageDto, CatalogQuery, HomePageDto, ProductDetailDto,
};
use crate::features::catalog::services::{CategoryFilter, StorefrontService};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::site_content::dtos::SiteContentMapDto;
use crate::features::testimonials::dtos::TestimonialResponseDto;
use crate::shared::types::ApiResponse;

fn parse_filter(query: &CatalogQuery) -> Result<CategoryFilter> {
    query
        .category
        .as_deref()
        .map(str::parse)
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Home page payload
#[utoipa::path(
    get,
    path = "/api/home",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Home page data", body = ApiResponse<HomePageDto>),
        (status = 400, description = "Invalid category")
    ),
    tag = "storefront"
)]
pub async fn get_home(
    State(service): State<Arc<StorefrontService>>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ApiResponse<HomePageDto>>> {
    let filter = parse_filter(&query)?;
    let home = service.home(filter).await;
    Ok(Json(ApiResponse::success(Some(home), None, None)))
}

/// Filtered, paginated catalog
#[utoipa::path(
    get,
    path = "/api/catalog",
    params(CatalogQuery),
    responses(
        (status = 200, description = "One page of products", body = ApiResponse<CatalogPageDto>),
        (status = 400, description = "Invalid category")
    ),
    tag = "storefront"
)]
pub async fn get_catalog(
    State(service): State<Arc<StorefrontService>>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ApiResponse<CatalogPageDto>>> {
    let filter = parse_filter(&query)?;
    let page = service.catalog(filter, query.page.unwrap_or(1)).await;
    Ok(Json(ApiResponse::success(Some(page), None, None)))
}

/// Product page
#[utoipa::path(
    get,
    path = "/api/catalog/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductDetailDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "storefront"
)]
pub async fn get_product(
    State(service): State<Arc<StorefrontService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductDetailDto>>> {
    let product = service.product_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// List active categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Active categories by name", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "storefront"
)]
pub async fn list_categories(
    State(service): State<Arc<StorefrontService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.categories().await;
    Ok(Json(ApiResponse::success(Some(categories), None, None)))
}

/// List active testimonials
#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "Active testimonials, newest first", body = ApiResponse<Vec<TestimonialResponseDto>>),
    ),
    tag = "storefront"
)]
pub async fn list_testimonials(
    State(service): State<Arc<StorefrontService>>,
) -> Result<Json<ApiResponse<Vec<TestimonialResponseDto>>>> {
    let testimonials = service.testimonials().await;
    Ok(Json(ApiResponse::success(Some(testimonials), None, None)))
}

/// Site content keyed by section
#[utoipa::path(
    get,
    path = "/api/site-content",
    responses(
        (status = 200, description = "Sections keyed by name", body = ApiResponse<SiteContentMapDto>),
    ),
    tag = "storefront"
)]
pub async fn get_site_content(
    State(service): State<Arc<StorefrontService>>,
) -> Result<Json<ApiResponse<SiteContentMapDto>>> {
    let content = service.site_content().await;
    Ok(Json(ApiResponse::success(Some(content), None, None)))
}
