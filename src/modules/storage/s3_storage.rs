//! S3-compatible bucket client for product images.
//!
//! Uses rust-s3 for object operations. The bucket is created on startup if it
//! does not exist and given an anonymous-read policy so stored images can be
//! linked directly from the storefront.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use serde_json::json;
use tracing::{debug, info, warn};

use super::sigv4;
use super::{key_from_bucket_url, random_object_key, ImageStorage, StoredObject};
use crate::core::config::StorageConfig;
use crate::core::error::AppError;

pub struct S3Storage {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    endpoint: String,
    public_endpoint: String,
    key_prefix: String,
    access_key: String,
    secret_key: String,
    region_name: String,
    http_client: Client,
}

impl S3Storage {
    pub async fn new(config: StorageConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Storage(format!("Invalid storage credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Storage(format!("Failed to open bucket: {}", e)))?;

        // Path-style URLs (http://endpoint/bucket/key) work for MinIO and S3 alike
        bucket.set_path_style();

        let http_client = Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let storage = Self {
            bucket,
            region,
            credentials,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
            key_prefix: config.key_prefix,
            access_key: config.access_key,
            secret_key: config.secret_key,
            region_name: config.region,
            http_client,
        };

        storage.ensure_bucket_exists().await;
        storage.allow_public_reads().await;

        info!(
            "Image storage ready: endpoint={}, bucket={}, prefix={}",
            storage.endpoint,
            storage.bucket.name(),
            storage.key_prefix
        );

        Ok(storage)
    }

    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    /// Create the bucket; an "already exists" answer counts as success
    async fn ensure_bucket_exists(&self) {
        let result = Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await;

        match result {
            Ok(_) => info!("Bucket '{}' created", self.bucket.name()),
            Err(e) => {
                let message = e.to_string();
                if message.contains("BucketAlreadyOwnedByYou")
                    || message.contains("BucketAlreadyExists")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                }
            }
        }
    }

    /// Grant anonymous `s3:GetObject` on the upload prefix.
    ///
    /// Failure is logged only; the policy can also be set by hand.
    async fn allow_public_reads(&self) {
        let bucket_name = self.bucket.name();
        let policy = json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Effect": "Allow",
                "Principal": {"AWS": "*"},
                "Action": ["s3:GetObject"],
                "Resource": [format!("arn:aws:s3:::{}/{}/*", bucket_name, self.key_prefix)]
            }]
        })
        .to_string();

        match self.put_bucket_policy(&bucket_name, &policy).await {
            Ok(()) => info!("Public read enabled for {}/{}/*", bucket_name, self.key_prefix),
            Err(e) => warn!(
                "Failed to set public read policy on '{}': {}. Set it manually with: \
                 mc anonymous set download <alias>/{}/{}",
                bucket_name, e, bucket_name, self.key_prefix
            ),
        }
    }

    async fn put_bucket_policy(&self, bucket_name: &str, policy: &str) -> Result<(), AppError> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| AppError::Storage(format!("Invalid endpoint URL: {}", e)))?;
        let host = endpoint
            .host_str()
            .ok_or_else(|| AppError::Storage("Endpoint URL has no host".to_string()))?;
        let host = match endpoint.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        let uri = format!("/{}", bucket_name);
        let signed = sigv4::sign(
            &sigv4::CanonicalRequest {
                method: "PUT",
                host: &host,
                uri: &uri,
                query: "policy=",
                payload: policy.as_bytes(),
            },
            &sigv4::Credentials {
                access_key: &self.access_key,
                secret_key: &self.secret_key,
                region: &self.region_name,
                service: "s3",
            },
            Utc::now(),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign policy request: {}", e)))?;

        let response = self
            .http_client
            .put(format!("{}{}?policy", self.endpoint, uri))
            .header("Host", &host)
            .header("x-amz-date", &signed.amz_date)
            .header("x-amz-content-sha256", &signed.payload_hash)
            .header("Authorization", &signed.authorization)
            .header("Content-Type", "application/json")
            .body(policy.to_string())
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Policy request failed: {}", e)))?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Storage(format!(
            "Policy request rejected: {} {}",
            status, body
        )))
    }
}

#[async_trait]
impl ImageStorage for S3Storage {
    async fn upload(
        &self,
        original_filename: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, AppError> {
        let key = random_object_key(&self.key_prefix, original_filename, content_type);

        let response = self
            .bucket
            .put_object_with_content_type(&key, &data, content_type)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload '{}': {}", key, e)))?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(AppError::Storage(format!(
                "Upload of '{}' rejected with status {}",
                key, status
            )));
        }

        debug!(
            "Uploaded '{}' ({} bytes) to bucket '{}'",
            key,
            data.len(),
            self.bucket.name()
        );

        Ok(StoredObject {
            url: self.public_url(&key),
            key,
        })
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let response = self
            .bucket
            .delete_object(key)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to delete '{}': {}", key, e)))?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(AppError::Storage(format!(
                "Delete of '{}' rejected with status {}",
                key, status
            )));
        }

        debug!("Deleted '{}' from bucket '{}'", key, self.bucket.name());
        Ok(())
    }

    fn key_from_url(&self, url: &str) -> Option<String> {
        key_from_bucket_url(url, &self.bucket.name())
    }
}
