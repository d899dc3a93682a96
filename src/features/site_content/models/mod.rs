mod site_content;

pub use site_content::{index_by_section, SiteContent};
