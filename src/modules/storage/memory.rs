use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{key_from_bucket_url, random_object_key, ImageStorage, StoredObject};
use crate::core::error::AppError;

const BASE_URL: &str = "https://storage.test/product-images";

/// In-process bucket for tests
#[derive(Default)]
pub struct InMemoryImageStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    failing_filenames: HashSet<String>,
    fail_removals: bool,
}

impl InMemoryImageStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads of these original filenames fail
    pub fn failing_on(filenames: &[&str]) -> Self {
        Self {
            failing_filenames: filenames.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Every removal fails
    pub fn with_failing_removals() -> Self {
        Self {
            fail_removals: true,
            ..Self::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.objects.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn url_for(key: &str) -> String {
        format!("{}/{}", BASE_URL, key)
    }
}

#[async_trait]
impl ImageStorage for InMemoryImageStorage {
    async fn upload(
        &self,
        original_filename: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, AppError> {
        if self.failing_filenames.contains(original_filename) {
            return Err(AppError::Storage(format!(
                "simulated failure for {}",
                original_filename
            )));
        }

        let key = random_object_key("products", original_filename, content_type);
        self.objects.lock().unwrap().insert(key.clone(), data);

        Ok(StoredObject {
            url: Self::url_for(&key),
            key,
        })
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        if self.fail_removals {
            return Err(AppError::Storage("simulated removal failure".to_string()));
        }
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }

    fn key_from_url(&self, url: &str) -> Option<String> {
        key_from_bucket_url(url, "product-images")
    }
}
