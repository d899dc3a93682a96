mod gallery_service;
mod product_service;

pub use gallery_service::{gallery_positions, remove_stored_image, upload_sequentially, GalleryService};
pub use product_service::ProductService;
