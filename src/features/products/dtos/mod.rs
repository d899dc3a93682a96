mod product_dto;
mod product_image_dto;

pub use product_dto::*;
pub use product_image_dto::*;
