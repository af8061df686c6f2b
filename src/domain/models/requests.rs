//! Plain request shapes consumed by the application services.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateOwner {
    pub name: String,
    pub address: String,
    pub photo: String,
}

#[derive(Debug, Clone)]
pub struct UpdateOwner {
    pub name: String,
    pub address: String,
    pub photo: String,
}

#[derive(Debug, Clone)]
pub struct CreateProperty {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub price: f64,
    pub currency: String,
    pub year: i32,
    pub area: f64,
    pub owner_id: Uuid,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateProperty {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub year: i32,
    pub area: f64,
}

#[derive(Debug, Clone)]
pub struct PriceUpdate {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct CreateImage {
    pub property_id: Uuid,
    pub url: String,
    pub description: String,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct CreateTrace {
    pub property_id: Uuid,
    pub date_utc: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Issued bearer token plus the claims it encodes.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub access_token: String,
    pub expires_at_utc: DateTime<Utc>,
    pub email: String,
    pub role: String,
}
