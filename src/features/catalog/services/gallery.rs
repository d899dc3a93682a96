//! Image list for the product page viewer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::products::models::ProductImage;

/// One slot in the viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryItem {
    Image { url: String },
    /// Shown when the product has no usable image
    Placeholder { alt: String },
}

impl GalleryItem {
    pub fn placeholder() -> Self {
        GalleryItem::Placeholder {
            alt: "No image available".to_string(),
        }
    }
}

/// Deduplicated gallery with a selected main image
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGallery {
    urls: Vec<String>,
    active: usize,
}

impl ProductGallery {
    /// Gallery images (already ordered) first, then the primary image.
    ///
    /// Empty URLs are dropped and each URL is kept at its first occurrence,
    /// so a gallery entry wins over the same primary image.
    pub fn assemble(images: &[ProductImage], primary_image: Option<&str>) -> Self {
        let mut urls: Vec<String> = Vec::new();

        let candidates = images
            .iter()
            .map(|image| image.url.as_str())
            .chain(primary_image);

        for url in candidates {
            if url.trim().is_empty() || urls.iter().any(|seen| seen == url) {
                continue;
            }
            urls.push(url.to_string());
        }

        Self { urls, active: 0 }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Viewer slots; a single placeholder when there are no images
    pub fn items(&self) -> Vec<GalleryItem> {
        if self.urls.is_empty() {
            return vec![GalleryItem::placeholder()];
        }

        self.urls
            .iter()
            .map(|url| GalleryItem::Image { url: url.clone() })
            .collect()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Select a thumbnail; out-of-range indexes are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.urls.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn main_image(&self) -> GalleryItem {
        self.urls
            .get(self.active)
            .map(|url| GalleryItem::Image { url: url.clone() })
            .unwrap_or_else(GalleryItem::placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::store::memory_store::image;
    use uuid::Uuid;

    fn images(urls: &[&str]) -> Vec<ProductImage> {
        urls.iter()
            .enumerate()
            .map(|(i, url)| image(Uuid::nil(), url, Some(i as i32), i as i64))
            .collect()
    }

    #[test]
    fn test_gallery_before_primary() {
        let gallery = ProductGallery::assemble(&images(&["b", "c"]), Some("a"));
        assert_eq!(gallery.urls(), &["b", "c", "a"]);
    }

    #[test]
    fn test_duplicate_primary_collapses() {
        let gallery = ProductGallery::assemble(&images(&["a"]), Some("a"));
        assert_eq!(gallery.urls(), &["a"]);
    }

    #[test]
    fn test_first_occurrence_kept() {
        let gallery = ProductGallery::assemble(&images(&["x", "y", "x"]), Some("y"));
        assert_eq!(gallery.urls(), &["x", "y"]);
    }

    #[test]
    fn test_empty_urls_dropped() {
        let gallery = ProductGallery::assemble(&images(&["", "a", " "]), Some(""));
        assert_eq!(gallery.urls(), &["a"]);
    }

    #[test]
    fn test_placeholder_when_nothing_usable() {
        let gallery = ProductGallery::assemble(&[], None);

        assert!(gallery.is_empty());
        assert_eq!(gallery.items(), vec![GalleryItem::placeholder()]);
        assert_eq!(gallery.main_image(), GalleryItem::placeholder());
    }

    #[test]
    fn test_selection() {
        let mut gallery = ProductGallery::assemble(&images(&["a", "b"]), None);
        assert_eq!(gallery.active_index(), 0);

        assert!(gallery.select(1));
        assert_eq!(
            gallery.main_image(),
            GalleryItem::Image {
                url: "b".to_string()
            }
        );

        assert!(!gallery.select(2));
        assert_eq!(gallery.active_index(), 1);
    }
}
