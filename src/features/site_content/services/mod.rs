mod site_content_service;

pub use site_content_service::SiteContentService;
