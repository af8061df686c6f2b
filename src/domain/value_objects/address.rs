use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationResult;
use crate::domain::validate::{optional_text, required_text};

/// A validated postal address. Immutable; equality by value.
///
/// `state` is the only optional component and defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    street: String,
    city: String,
    state: String,
    country: String,
    zip_code: String,
}

impl Address {
    pub fn new(
        street: &str,
        city: &str,
        state: &str,
        country: &str,
        zip_code: &str,
    ) -> ValidationResult<Self> {
        Ok(Self {
            street: required_text("street", street, 200)?,
            city: required_text("city", city, 100)?,
            state: optional_text("state", state, 100)?,
            country: required_text("country", country, 100)?,
            zip_code: required_text("zipCode", zip_code, 20)?,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.city, self.country, self.zip_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address() {
        let a = Address::new(" Calle 10 #4 ", "Bogota", "", "Colombia", "110111").unwrap();
        assert_eq!(a.street(), "Calle 10 #4");
        assert_eq!(a.state(), "");
    }

    #[test]
    fn required_fields_rejected_when_blank() {
        assert!(Address::new("", "Bogota", "", "Colombia", "110111").is_err());
        assert!(Address::new("Calle 10", "  ", "", "Colombia", "110111").is_err());
        assert!(Address::new("Calle 10", "Bogota", "", "", "110111").is_err());
        assert!(Address::new("Calle 10", "Bogota", "", "Colombia", "").is_err());
    }

    #[test]
    fn length_caps_enforced() {
        assert!(Address::new(&"s".repeat(201), "c", "", "co", "z").is_err());
        assert!(Address::new("s", "c", &"x".repeat(101), "co", "z").is_err());
        assert!(Address::new("s", "c", "", "co", &"z".repeat(21)).is_err());
    }

    #[test]
    fn equality_by_value() {
        let a = Address::new("Calle 10", "Bogota", "DC", "Colombia", "110111").unwrap();
        let b = Address::new(" Calle 10 ", "Bogota", "DC", "Colombia", "110111").unwrap();
        assert_eq!(a, b);
    }
}
