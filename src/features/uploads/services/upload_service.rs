use std::sync::Arc;

use tracing::info;

use crate::core::error::Result;
use crate::features::uploads::dtos::UploadedImageDto;
use crate::features::uploads::multipart::IncomingImage;
use crate::modules::storage::ImageStorage;

/// Stores single images, e.g. a product's primary image
pub struct UploadService {
    storage: Arc<dyn ImageStorage>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ImageStorage>) -> Self {
        Self { storage }
    }

    pub async fn upload_image(&self, image: IncomingImage) -> Result<UploadedImageDto> {
        image.validate()?;

        let size = image.data.len();
        let stored = self
            .storage
            .upload(&image.filename, image.data, &image.content_type)
            .await?;

        info!("Uploaded image '{}' as {}", image.filename, stored.key);

        Ok(UploadedImageDto {
            url: stored.url,
            key: stored.key,
            content_type: image.content_type,
            size,
        })
    }
}
