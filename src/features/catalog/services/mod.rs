mod browser;
mod gallery;
mod repository;
mod storefront_service;

pub use browser::{CatalogBrowser, CategoryFilter};
pub use gallery::{GalleryItem, ProductGallery};
pub use repository::CatalogRepository;
pub use storefront_service::StorefrontService;
