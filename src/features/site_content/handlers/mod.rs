mod site_content_handler;

pub use site_content_handler::*;
