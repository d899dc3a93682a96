mod gallery_handler;
mod product_handler;

pub use gallery_handler::*;
pub use product_handler::*;
