use super::model::AuthenticatedUser;
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use super::jwks::JwksClient;

pub struct JwtValidator {
    jwks_client: Arc<JwksClient>,
    issuer: String,
    audience: String,
    leeway: u64,
}

/// Claims this service reads; iss/aud/exp are checked by `Validation`
#[derive(Debug, Clone, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
}

impl JwtValidator {
    pub fn new(
        jwks_client: Arc<JwksClient>,
        issuer: String,
        audience: String,
        leeway: Duration,
    ) -> Self {
        Self {
            jwks_client,
            issuer,
            audience,
            leeway: leeway.as_secs(),
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only RS256 is allowed",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AppError::Auth("Missing kid in token header".to_string()))?;

        let decoding_key = self
            .jwks_client
            .get_key(&kid)
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let claims = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?
            .claims;

        Ok(AuthenticatedUser {
            sub: claims.sub,
            email: claims.email,
            roles: claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn validator() -> JwtValidator {
        JwtValidator::new(
            Arc::new(JwksClient::new(
                "https://auth.example.com",
                Duration::from_secs(60),
            )),
            "https://auth.example.com".to_string(),
            "creative-crafts-admin".to_string(),
            Duration::from_secs(30),
        )
    }

    #[tokio::test]
    async fn test_rejects_garbage_token() {
        let result = validator().validate_token("not-a-jwt").await;
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_rejects_symmetric_algorithm_before_key_lookup() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "sub": "someone", "roles": ["admin"], "exp": 4_000_000_000u64 }),
            &EncodingKey::from_secret(b"shared-secret"),
        )
        .unwrap();

        match validator().validate_token(&token).await {
            Err(AppError::Auth(message)) => assert!(message.contains("Unsupported algorithm")),
            other => panic!("expected auth error, got {:?}", other.map(|u| u.sub)),
        }
    }
}
