//! Reading image files out of a multipart body.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::uploads::dtos::{is_image_type_allowed, ALLOWED_IMAGE_TYPES};
use crate::shared::constants::MAX_IMAGE_SIZE;

/// One file taken from the request
#[derive(Debug, Clone)]
pub struct IncomingImage {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl IncomingImage {
    /// Size and type checks done before anything is stored
    pub fn validate(&self) -> Result<()> {
        if self.data.len() > MAX_IMAGE_SIZE {
            return Err(AppError::PayloadTooLarge(format!(
                "'{}' is too large. Maximum size is {} MB",
                self.filename,
                MAX_IMAGE_SIZE / 1024 / 1024
            )));
        }

        if !is_image_type_allowed(&self.content_type) {
            return Err(AppError::BadRequest(format!(
                "'{}' has type '{}'. Allowed types: {}",
                self.filename,
                self.content_type,
                ALLOWED_IMAGE_TYPES.join(", ")
            )));
        }

        Ok(())
    }
}

fn read_error(e: MultipartError) -> AppError {
    debug!("Failed to read multipart data: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge("Request body is too large".to_string());
    }
    AppError::BadRequest(format!("Failed to read multipart data: {}", e))
}

/// Collect the files sent under `field_name`, in request order.
///
/// Other fields are ignored. More than `max_files` files is a bad request;
/// no file at all is also a bad request.
pub async fn read_images(
    multipart: &mut Multipart,
    field_name: &str,
    max_files: usize,
) -> Result<Vec<IncomingImage>> {
    let mut images = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        if field.name() != Some(field_name) {
            debug!("Ignoring unknown field: {:?}", field.name());
            continue;
        }

        if images.len() == max_files {
            return Err(AppError::BadRequest(format!(
                "At most {} files can be uploaded at once",
                max_files
            )));
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unnamed".to_string());
        let data = field.bytes().await.map_err(read_error)?;

        images.push(IncomingImage {
            filename,
            content_type,
            data: data.to_vec(),
        });
    }

    if images.is_empty() {
        return Err(AppError::BadRequest(format!(
            "No files found in field '{}'",
            field_name
        )));
    }

    Ok(images)
}
