mod site_content_dto;

pub use site_content_dto::*;
