use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::validate::required_text;

/// An authenticated API user. The hash scheme is the hasher adapter's
/// concern; the entity only guarantees the field is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: Uuid,
    email: String,
    password_hash: String,
    role: String,
    created_at_utc: DateTime<Utc>,
}

impl User {
    pub fn new(email: &str, password_hash: &str, role: &str) -> ValidationResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            email: validate_email(email)?,
            password_hash: required_text("passwordHash", password_hash, 500)?,
            role: required_text("role", role, 100)?,
            created_at_utc: Utc::now(),
        })
    }

    pub fn update_password(&mut self, new_password_hash: &str) -> ValidationResult<()> {
        self.password_hash = required_text("passwordHash", new_password_hash, 500)?;
        Ok(())
    }

    pub fn update_role(&mut self, role: &str) -> ValidationResult<()> {
        self.role = required_text("role", role, 100)?;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        self.created_at_utc
    }
}

/// Lowercased, exactly one `@`, neither at the start nor the end.
fn validate_email(email: &str) -> ValidationResult<String> {
    let value = required_text("email", email, 200)?;
    let ats = value.matches('@').count();
    if ats != 1 || value.starts_with('@') || value.ends_with('@') {
        return Err(ValidationError::InvalidEmail(value));
    }
    Ok(value.to_lowercase())
}
