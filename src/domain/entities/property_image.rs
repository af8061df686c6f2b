use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::validate::optional_text;

/// An image attached to a property, referenced by absolute http(s) URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    id: Uuid,
    property_id: Uuid,
    url: String,
    description: String,
    enabled: bool,
    created_at_utc: DateTime<Utc>,
}

impl PropertyImage {
    pub fn new(
        property_id: Uuid,
        url: &str,
        description: &str,
        enabled: bool,
    ) -> ValidationResult<Self> {
        if property_id.is_nil() {
            return Err(ValidationError::MissingPropertyId);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            property_id,
            url: validate_url(url)?,
            description: optional_text("description", description, 500)?,
            enabled,
            created_at_utc: Utc::now(),
        })
    }

    pub fn update(&mut self, url: &str, description: &str) -> ValidationResult<()> {
        let url = validate_url(url)?;
        let description = optional_text("description", description, 500)?;
        self.url = url;
        self.description = description;
        Ok(())
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn property_id(&self) -> Uuid {
        self.property_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        self.created_at_utc
    }
}

fn validate_url(url: &str) -> ValidationResult<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField { field: "url" });
    }
    if trimmed.chars().count() > 1000 {
        return Err(ValidationError::FieldTooLong {
            field: "url",
            actual: trimmed.chars().count(),
            max: 1000,
        });
    }
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    let valid = match rest {
        // host must be present and the url must not contain whitespace
        Some(rest) => !rest.is_empty()
            && !rest.starts_with('/')
            && !trimmed.chars().any(|c| c.is_whitespace()),
        None => false,
    };
    if !valid {
        return Err(ValidationError::InvalidUrl(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_http_urls() {
        let img = PropertyImage::new(
            Uuid::new_v4(),
            " https://cdn.example.com/p/1.jpg ",
            "front",
            true,
        )
        .unwrap();
        assert_eq!(img.url(), "https://cdn.example.com/p/1.jpg");
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        let pid = Uuid::new_v4();
        assert!(PropertyImage::new(pid, "/p/1.jpg", "", true).is_err());
        assert!(PropertyImage::new(pid, "ftp://example.com/1.jpg", "", true).is_err());
        assert!(PropertyImage::new(pid, "http://", "", true).is_err());
        assert!(PropertyImage::new(pid, "http://a b.com/x", "", true).is_err());
        assert!(PropertyImage::new(pid, "", "", true).is_err());
    }

    #[test]
    fn rejects_nil_property_id() {
        assert!(matches!(
            PropertyImage::new(Uuid::nil(), "https://example.com/1.jpg", "", true),
            Err(ValidationError::MissingPropertyId)
        ));
    }

    #[test]
    fn enable_disable_toggle() {
        let mut img =
            PropertyImage::new(Uuid::new_v4(), "https://example.com/1.jpg", "", true).unwrap();
        img.disable();
        assert!(!img.enabled());
        img.enable();
        assert!(img.enabled());
    }
}
