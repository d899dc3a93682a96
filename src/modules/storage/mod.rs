//! Storage module for product images
//!
//! Product images live in an S3-compatible bucket and are served from public
//! URLs. Services depend on the [`ImageStorage`] trait so the bucket client can
//! be swapped out (tests use an in-memory implementation).

mod s3_storage;
mod sigv4;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::AppError;

pub use s3_storage::S3Storage;

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Store `data` under a fresh random key and return its public URL
    async fn upload(
        &self,
        original_filename: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, AppError>;

    /// Remove the object with the given key
    async fn remove(&self, key: &str) -> Result<(), AppError>;

    /// Map a public URL back to its object key, `None` for foreign URLs
    fn key_from_url(&self, url: &str) -> Option<String>;
}

/// Get file extension from an image content type
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/avif" => Some("avif"),
        _ => None,
    }
}

/// Build `<prefix>/<random>.<ext>` for a new upload
pub fn random_object_key(prefix: &str, original_filename: &str, content_type: &str) -> String {
    let extension = extension_for_content_type(content_type)
        .map(str::to_string)
        .or_else(|| {
            original_filename
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        })
        .unwrap_or_else(|| "bin".to_string());

    format!("{}/{}.{}", prefix, Uuid::new_v4().simple(), extension)
}

/// Everything after `/<bucket>/` in a public object URL
pub fn key_from_bucket_url(url: &str, bucket: &str) -> Option<String> {
    let marker = format!("/{}/", bucket);
    url.split_once(&marker)
        .map(|(_, key)| key.split(['?', '#']).next().unwrap_or_default().to_string())
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_object_key_uses_content_type_extension() {
        let key = random_object_key("products", "photo.JPEG", "image/png");
        assert!(key.starts_with("products/"));
        assert!(key.ends_with(".png"));
    }

    #[test]
    fn test_random_object_key_falls_back_to_filename_extension() {
        let key = random_object_key("products", "scan.HEIC", "application/octet-stream");
        assert!(key.ends_with(".heic"));

        let key = random_object_key("products", "noextension", "application/octet-stream");
        assert!(key.ends_with(".bin"));
    }

    #[test]
    fn test_random_object_keys_are_unique() {
        let a = random_object_key("products", "a.png", "image/png");
        let b = random_object_key("products", "a.png", "image/png");
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_from_bucket_url() {
        assert_eq!(
            key_from_bucket_url(
                "https://cdn.example.com/product-images/products/abc.jpg",
                "product-images"
            ),
            Some("products/abc.jpg".to_string())
        );
        assert_eq!(
            key_from_bucket_url(
                "http://localhost:9000/product-images/products/abc.jpg?v=2",
                "product-images"
            ),
            Some("products/abc.jpg".to_string())
        );
        assert_eq!(
            key_from_bucket_url("https://elsewhere.example.com/img.jpg", "product-images"),
            None
        );
        assert_eq!(
            key_from_bucket_url("https://cdn.example.com/product-images/", "product-images"),
            None
        );
    }
}
