use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upload image request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    /// The image to upload (at most 5 MB)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Response DTO for an uploaded image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadedImageDto {
    /// Public URL of the stored image
    pub url: String,
    /// Object key inside the bucket
    pub key: String,
    pub content_type: String,
    pub size: usize,
}

/// Image types accepted for upload
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/avif",
];

/// Check if a MIME type is an accepted image type
pub fn is_image_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}
