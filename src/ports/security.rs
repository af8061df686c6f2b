//! Collaborator contracts for the auth subsystem. The concrete scheme
//! (hash format, token wire format) belongs to the adapters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::User;

/// Validated claims carried by a bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
    pub expires_at_utc: DateTime<Utc>,
}

/// Issues and validates bearer tokens.
pub trait TokenProvider: Send + Sync + 'static {
    /// Returns the encoded token and its expiry.
    fn issue(&self, user: &User) -> (String, DateTime<Utc>);

    /// `None` for malformed, tampered or expired tokens.
    fn validate(&self, token: &str) -> Option<TokenClaims>;
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync + 'static {
    fn hash(&self, password: &str) -> String;

    fn verify(&self, password: &str, password_hash: &str) -> bool;
}
