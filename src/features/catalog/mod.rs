//! Public storefront: catalog reads, filtering, paging and the product gallery.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
