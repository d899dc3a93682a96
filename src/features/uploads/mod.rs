//! Image uploads to the product-images bucket.

pub mod dtos;
pub mod handlers;
pub mod multipart;
pub mod routes;
pub mod services;
