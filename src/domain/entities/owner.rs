use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::ValidationResult;
use crate::domain::validate::{optional_text, required_text};

/// A property owner. The `address` here is free text, deliberately not the
/// `Address` value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    id: Uuid,
    name: String,
    address: String,
    photo: String,
    created_at_utc: DateTime<Utc>,
}

impl Owner {
    pub fn new(name: &str, address: &str, photo: &str) -> ValidationResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: required_text("name", name, 200)?,
            address: required_text("address", address, 300)?,
            photo: optional_text("photo", photo, 500)?,
            created_at_utc: Utc::now(),
        })
    }

    /// Re-validates every field before mutating; a failure leaves the
    /// entity untouched.
    pub fn update(&mut self, name: &str, address: &str, photo: &str) -> ValidationResult<()> {
        let name = required_text("name", name, 200)?;
        let address = required_text("address", address, 300)?;
        let photo = optional_text("photo", photo, 500)?;
        self.name = name;
        self.address = address;
        self.photo = photo;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        self.created_at_utc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_with_generated_id() {
        let a = Owner::new("Jane", "Main St 1", "").unwrap();
        let b = Owner::new("Jane", "Main St 1", "").unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.photo(), "");
    }

    #[test]
    fn update_revalidates_and_keeps_state_on_failure() {
        let mut owner = Owner::new("Jane", "Main St 1", "").unwrap();
        assert!(owner.update("", "Elsewhere", "").is_err());
        assert_eq!(owner.name(), "Jane");
        assert_eq!(owner.address(), "Main St 1");

        owner.update("Janet", "Elsewhere 2", "photo.jpg").unwrap();
        assert_eq!(owner.name(), "Janet");
        assert_eq!(owner.photo(), "photo.jpg");
    }
}
