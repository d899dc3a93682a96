use jsonwebtoken::DecodingKey;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Deserialize)]
struct JwksDocument {
    keys: Vec<Jwk>,
}

#[derive(Debug, Clone, Deserialize)]
struct Jwk {
    kid: String,
    kty: String,
    #[serde(default)]
    n: Option<String>,
    #[serde(default)]
    e: Option<String>,
}

struct CachedKeys {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

/// Fetches and caches the issuer's signing keys
pub struct JwksClient {
    jwks_url: String,
    client: reqwest::Client,
    cache: Arc<RwLock<Option<CachedKeys>>>,
    cache_ttl: Duration,
}

impl JwksClient {
    pub fn new(issuer_url: &str, cache_ttl: Duration) -> Self {
        Self {
            jwks_url: format!(
                "{}/.well-known/jwks.json",
                issuer_url.trim_end_matches('/')
            ),
            client: reqwest::Client::new(),
            cache: Arc::new(RwLock::new(None)),
            cache_ttl,
        }
    }

    pub async fn get_key(&self, kid: &str) -> Result<DecodingKey, JwksError> {
        if let Some(key) = self.cached_key(kid, true).await {
            return Ok(key);
        }

        // Unknown kid or stale cache: the issuer may have rotated keys
        self.refresh().await?;

        self.cached_key(kid, false)
            .await
            .ok_or_else(|| JwksError::KeyNotFound(kid.to_string()))
    }

    async fn cached_key(&self, kid: &str, require_fresh: bool) -> Option<DecodingKey> {
        let cache = self.cache.read().await;
        let cached = cache.as_ref()?;
        if require_fresh && cached.fetched_at.elapsed() >= self.cache_ttl {
            return None;
        }
        cached.keys.get(kid).cloned()
    }

    async fn refresh(&self) -> Result<(), JwksError> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| JwksError::FetchError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(JwksError::FetchError(format!(
                "HTTP {} from {}",
                response.status(),
                self.jwks_url
            )));
        }

        let document: JwksDocument = response
            .json()
            .await
            .map_err(|e| JwksError::ParseError(e.to_string()))?;

        let keys = rsa_keys(document)?;
        tracing::debug!("Loaded {} signing keys from {}", keys.len(), self.jwks_url);

        let mut cache = self.cache.write().await;
        *cache = Some(CachedKeys {
            keys,
            fetched_at: Instant::now(),
        });

        Ok(())
    }
}

/// Keeps only RSA keys; other key types cannot verify RS256 tokens
fn rsa_keys(document: JwksDocument) -> Result<HashMap<String, DecodingKey>, JwksError> {
    let mut keys = HashMap::new();

    for jwk in document.keys {
        if jwk.kty != "RSA" {
            continue;
        }
        let (Some(n), Some(e)) = (jwk.n.as_deref(), jwk.e.as_deref()) else {
            continue;
        };
        let key = DecodingKey::from_rsa_components(n, e)
            .map_err(|err| JwksError::KeyConversionError(err.to_string()))?;
        keys.insert(jwk.kid, key);
    }

    Ok(keys)
}

#[derive(Debug, thiserror::Error)]
pub enum JwksError {
    #[error("Failed to fetch JWKS: {0}")]
    FetchError(String),

    #[error("Failed to parse JWKS: {0}")]
    ParseError(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Failed to convert key: {0}")]
    KeyConversionError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_rsa_keys_are_skipped() {
        let document: JwksDocument = serde_json::from_value(serde_json::json!({
            "keys": [
                { "kid": "ec-1", "kty": "EC", "crv": "P-256", "x": "abc", "y": "def" },
                { "kid": "rsa-without-modulus", "kty": "RSA" }
            ]
        }))
        .unwrap();

        let keys = rsa_keys(document).unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_jwks_url_from_issuer() {
        let client = JwksClient::new("https://auth.example.com/", Duration::from_secs(60));
        assert_eq!(
            client.jwks_url,
            "https://auth.example.com/.well-known/jwks.json"
        );
    }
}
