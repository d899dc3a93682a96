use std::sync::Arc;

use sqlx::PgPool;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{GalleryUploadResultDto, ProductImageDto};
use crate::features::products::models::{order_product_images, ProductImage};
use crate::features::uploads::multipart::IncomingImage;
use crate::modules::storage::{ImageStorage, StoredObject};

const IMAGE_COLUMNS: &str = "id, product_id, url, position, created_at";

/// Upload files one after another.
///
/// A file whose upload fails is logged and dropped; the rest continue.
/// Returns the stored objects in request order and the number dropped.
pub async fn upload_sequentially(
    storage: &dyn ImageStorage,
    images: Vec<IncomingImage>,
) -> (Vec<StoredObject>, usize) {
    let mut stored = Vec::with_capacity(images.len());
    let mut skipped = 0;

    for image in images {
        match storage
            .upload(&image.filename, image.data, &image.content_type)
            .await
        {
            Ok(object) => stored.push(object),
            Err(e) => {
                warn!("Dropping gallery file '{}': {}", image.filename, e);
                skipped += 1;
            }
        }
    }

    (stored, skipped)
}

/// Positions for `count` new images appended after `existing` ones
pub fn gallery_positions(existing: i64, count: usize) -> Vec<i32> {
    (0..count)
        .map(|index| (existing + index as i64) as i32)
        .collect()
}

/// Remove the bucket object behind `url`; failures are only logged
pub async fn remove_stored_image(storage: &dyn ImageStorage, url: &str) {
    let Some(key) = storage.key_from_url(url) else {
        debug!("Image URL '{}' is not in the bucket, nothing to remove", url);
        return;
    };

    if let Err(e) = storage.remove(&key).await {
        warn!("Failed to remove image object '{}': {}", key, e);
    }
}

/// Gallery images of a product
pub struct GalleryService {
    pool: PgPool,
    storage: Arc<dyn ImageStorage>,
}

impl GalleryService {
    pub fn new(pool: PgPool, storage: Arc<dyn ImageStorage>) -> Self {
        Self { pool, storage }
    }

    async fn ensure_product_exists(&self, product_id: Uuid) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)",
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check product: {:?}", e);
            AppError::Database(e)
        })?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Product {} not found",
                product_id
            )));
        }
        Ok(())
    }

    pub async fn list(&self, product_id: Uuid) -> Result<Vec<ProductImageDto>> {
        self.ensure_product_exists(product_id).await?;

        let images = sqlx::query_as::<_, ProductImage>(&format!(
            r#"
            SELECT {IMAGE_COLUMNS}
            FROM product_images
            WHERE product_id = $1
            ORDER BY position ASC NULLS FIRST, created_at ASC
            "#
        ))
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list product images: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(images.into_iter().map(|i| i.into()).collect())
    }

    /// Validate every file, upload them in order and append rows for the ones
    /// that made it
    pub async fn upload(
        &self,
        product_id: Uuid,
        images: Vec<IncomingImage>,
    ) -> Result<GalleryUploadResultDto> {
        for image in &images {
            image.validate()?;
        }
        self.ensure_product_exists(product_id).await?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM product_images WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count product images: {:?}", e);
            AppError::Database(e)
        })?;

        let requested = images.len();
        let (stored, skipped) = upload_sequentially(self.storage.as_ref(), images).await;
        if stored.is_empty() {
            return Err(AppError::Storage(format!(
                "None of the {} gallery files could be uploaded",
                requested
            )));
        }

        let positions = gallery_positions(existing, stored.len());
        let urls: Vec<String> = stored.into_iter().map(|o| o.url).collect();

        let mut rows = sqlx::query_as::<_, ProductImage>(&format!(
            r#"
            INSERT INTO product_images (product_id, url, position)
            SELECT $1, url, position
            FROM UNNEST($2::text[], $3::int[]) AS t(url, position)
            RETURNING {IMAGE_COLUMNS}
            "#
        ))
        .bind(product_id)
        .bind(&urls)
        .bind(&positions)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save product images: {:?}", e);
            AppError::Database(e)
        })?;
        order_product_images(&mut rows);

        info!(
            "Added {} image(s) to product {} ({} skipped)",
            rows.len(),
            product_id,
            skipped
        );

        Ok(GalleryUploadResultDto {
            images: rows.into_iter().map(|i| i.into()).collect(),
            skipped,
        })
    }

    /// Delete the row, then try to remove the stored file
    pub async fn delete_image(&self, image_id: Uuid) -> Result<()> {
        let url = sqlx::query_scalar::<_, String>(
            "DELETE FROM product_images WHERE id = $1 RETURNING url",
        )
        .bind(image_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete product image: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Image {} not found", image_id)))?;

        remove_stored_image(self.storage.as_ref(), &url).await;

        info!("Deleted product image {}", image_id);
        Ok(())
    }
}
