use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{
    domain::User,
    ports::security::{TokenClaims, TokenProvider},
};

const HEADER_B64: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"; // {"alg":"HS256","typ":"JWT"}

#[derive(Debug, Serialize, Deserialize)]
struct ClaimsDoc {
    sub: Uuid,
    email: String,
    role: String,
    exp: i64,
}

/// HMAC-SHA256 signed compact token (JWT wire format).
///
/// Validation is stateless: signature check plus expiry. Anything
/// malformed, tampered or expired comes back as `None`.
pub struct HmacTokenProvider {
    secret: Vec<u8>,
    ttl: Duration,
}

impl HmacTokenProvider {
    pub fn new(secret: impl Into<Vec<u8>>, ttl_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    fn sign(&self, signing_input: &str) -> [u8; 32] {
        hmac_sha256(&self.secret, signing_input.as_bytes())
    }
}

impl TokenProvider for HmacTokenProvider {
    fn issue(&self, user: &User) -> (String, DateTime<Utc>) {
        let expires_at = Utc::now() + self.ttl;
        let claims = ClaimsDoc {
            sub: user.id(),
            email: user.email().to_string(),
            role: user.role().to_string(),
            exp: expires_at.timestamp(),
        };
        // serializing a plain struct of owned fields cannot fail
        let payload = serde_json::to_vec(&claims).expect("claims serialize");
        let signing_input = format!("{HEADER_B64}.{}", URL_SAFE_NO_PAD.encode(payload));
        let signature = URL_SAFE_NO_PAD.encode(self.sign(&signing_input));
        (format!("{signing_input}.{signature}"), expires_at)
    }

    fn validate(&self, token: &str) -> Option<TokenClaims> {
        let mut parts = token.splitn(3, '.');
        let header = parts.next()?;
        let payload = parts.next()?;
        let signature = parts.next()?;
        if header != HEADER_B64 {
            return None;
        }

        let expected = self.sign(&format!("{header}.{payload}"));
        let provided = URL_SAFE_NO_PAD.decode(signature).ok()?;
        if !constant_time_eq(&expected, &provided) {
            return None;
        }

        let claims: ClaimsDoc =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).ok()?).ok()?;
        let expires_at_utc = Utc.timestamp_opt(claims.exp, 0).single()?;
        if expires_at_utc <= Utc::now() {
            return None;
        }

        Some(TokenClaims {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
            expires_at_utc,
        })
    }
}

/// RFC 2104 HMAC over SHA-256.
fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut key_block = [0u8; 64];
    if key.len() > 64 {
        key_block[..32].copy_from_slice(&Sha256::digest(key));
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let ipad: Vec<u8> = key_block.iter().map(|b| b ^ 0x36).collect();
    let opad: Vec<u8> = key_block.iter().map(|b| b ^ 0x5c).collect();

    let mut inner = Sha256::new();
    inner.update(&ipad);
    inner.update(message);
    let inner_hash = inner.finalize();

    let mut outer = Sha256::new();
    outer.update(&opad);
    outer.update(inner_hash);
    outer.finalize().into()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("jane@example.com", "hash", "admin").unwrap()
    }

    #[test]
    fn issued_token_validates() {
        let provider = HmacTokenProvider::new(b"test-secret".to_vec(), 60);
        let u = user();
        let (token, expires_at) = provider.issue(&u);

        let claims = provider.validate(&token).unwrap();
        assert_eq!(claims.user_id, u.id());
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.expires_at_utc.timestamp(), expires_at.timestamp());
    }

    #[test]
    fn tampered_token_rejected() {
        let provider = HmacTokenProvider::new(b"test-secret".to_vec(), 60);
        let (token, _) = provider.issue(&user());

        let mut tampered = token.clone();
        tampered.truncate(token.len() - 2);
        assert!(provider.validate(&tampered).is_none());
        assert!(provider.validate("not.a.token").is_none());
        assert!(provider.validate("").is_none());
    }

    #[test]
    fn wrong_secret_rejected() {
        let provider = HmacTokenProvider::new(b"secret-a".to_vec(), 60);
        let (token, _) = provider.issue(&user());
        let other = HmacTokenProvider::new(b"secret-b".to_vec(), 60);
        assert!(other.validate(&token).is_none());
    }

    #[test]
    fn expired_token_rejected() {
        let provider = HmacTokenProvider::new(b"test-secret".to_vec(), -1);
        let (token, _) = provider.issue(&user());
        assert!(provider.validate(&token).is_none());
    }

    #[test]
    fn hmac_matches_rfc_vector() {
        // RFC 4231 test case 2
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        let expected = [
            0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26, 0x08, 0x95,
            0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83, 0x9d, 0xec, 0x58, 0xb9,
            0x64, 0xec, 0x38, 0x43,
        ];
        assert_eq!(mac, expected);
    }
}
