use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::products::models::ProductImage;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageDto {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub position: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<ProductImage> for ProductImageDto {
    fn from(i: ProductImage) -> Self {
        Self {
            id: i.id,
            product_id: i.product_id,
            url: i.url,
            position: i.position,
            created_at: i.created_at,
        }
    }
}

/// Multipart form for gallery uploads (documentation only; the handler reads
/// the multipart stream directly)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadGalleryDto {
    /// Up to six image files, repeated under the `files` field
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub files: Vec<String>,
}

/// Result of a gallery upload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GalleryUploadResultDto {
    /// Rows created for the files that uploaded
    pub images: Vec<ProductImageDto>,
    /// Files that failed to upload and were dropped
    pub skipped: usize,
}
