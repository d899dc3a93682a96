mod contact_links;

pub use contact_links::ContactLinks;
