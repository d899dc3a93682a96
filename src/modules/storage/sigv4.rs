//! Minimal AWS Signature v4 signer.
//!
//! rust-s3 has no bucket-policy call, so the policy request that makes the
//! image bucket publicly readable is signed here.

use chrono::{DateTime, Utc};
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SIGNED_HEADERS: &str = "host;x-amz-content-sha256;x-amz-date";

pub struct Credentials<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub region: &'a str,
    pub service: &'a str,
}

/// Request parts covered by the signature
pub struct CanonicalRequest<'a> {
    pub method: &'a str,
    pub host: &'a str,
    pub uri: &'a str,
    pub query: &'a str,
    pub payload: &'a [u8],
}

/// Header values to attach to the signed request
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    pub amz_date: String,
    pub payload_hash: String,
    pub authorization: String,
}

pub fn sign(
    request: &CanonicalRequest<'_>,
    credentials: &Credentials<'_>,
    now: DateTime<Utc>,
) -> Result<SignedHeaders, InvalidLength> {
    let date_stamp = now.format("%Y%m%d").to_string();
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let payload_hash = hex::encode(Sha256::digest(request.payload));

    let canonical_headers = format!(
        "host:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n",
        request.host, payload_hash, amz_date
    );
    let canonical_request = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        request.method,
        request.uri,
        request.query,
        canonical_headers,
        SIGNED_HEADERS,
        payload_hash
    );

    let scope = format!(
        "{}/{}/{}/aws4_request",
        date_stamp, credentials.region, credentials.service
    );
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        hex::encode(Sha256::digest(canonical_request.as_bytes()))
    );

    let key = signing_key(
        credentials.secret_key,
        &date_stamp,
        credentials.region,
        credentials.service,
    )?;
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes())?);

    Ok(SignedHeaders {
        amz_date,
        payload_hash,
        authorization: format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, credentials.access_key, scope, SIGNED_HEADERS, signature
        ),
    })
}

fn signing_key(
    secret_key: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>, InvalidLength> {
    let k_date = hmac_sha256(
        format!("AWS4{}", secret_key).as_bytes(),
        date_stamp.as_bytes(),
    )?;
    let k_region = hmac_sha256(&k_date, region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, service.as_bytes())?;
    hmac_sha256(&k_service, b"aws4_request")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, InvalidLength> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_signing_key_matches_aws_reference() {
        // Reference values from the AWS SigV4 key derivation example
        let key = signing_key(
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            "20120215",
            "us-east-1",
            "iam",
        )
        .unwrap();
        assert_eq!(
            hex::encode(key),
            "f4780e2d9f65fa895f9c67b32ce1baf0b0d8a43505a000a1a9e090d414db404d"
        );
    }

    #[test]
    fn test_sign_produces_scoped_authorization() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        let signed = sign(
            &CanonicalRequest {
                method: "PUT",
                host: "localhost:9000",
                uri: "/product-images",
                query: "policy=",
                payload: b"{}",
            },
            &Credentials {
                access_key: "minioadmin",
                secret_key: "minioadmin",
                region: "us-east-1",
                service: "s3",
            },
            now,
        )
        .unwrap();

        assert_eq!(signed.amz_date, "20250601T123000Z");
        assert!(signed
            .authorization
            .starts_with("AWS4-HMAC-SHA256 Credential=minioadmin/20250601/us-east-1/s3/aws4_request"));
        let signature = signed.authorization.rsplit("Signature=").next().unwrap();
        assert_eq!(signature.len(), 64);
    }
}
