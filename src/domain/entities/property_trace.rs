use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::validate::optional_text;
use crate::domain::value_objects::Price;

/// A historical operation on a property (sale, price change).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTrace {
    id: Uuid,
    property_id: Uuid,
    date_utc: DateTime<Utc>,
    description: String,
    value: Price,
}

impl PropertyTrace {
    pub fn new(
        property_id: Uuid,
        date_utc: DateTime<Utc>,
        description: &str,
        value: Price,
    ) -> ValidationResult<Self> {
        if property_id.is_nil() {
            return Err(ValidationError::MissingPropertyId);
        }
        // one day of slack covers clock skew on the caller's side
        if date_utc > Utc::now() + Duration::days(1) {
            return Err(ValidationError::DateTooFarInFuture);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            property_id,
            date_utc,
            description: optional_text("description", description, 500)?,
            value,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn property_id(&self) -> Uuid {
        self.property_id
    }

    pub fn date_utc(&self) -> DateTime<Utc> {
        self.date_utc
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> &Price {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_past_and_near_future_dates() {
        let price = Price::new(1000.0, "USD").unwrap();
        let pid = Uuid::new_v4();
        assert!(PropertyTrace::new(pid, Utc::now() - Duration::days(30), "sold", price.clone()).is_ok());
        assert!(PropertyTrace::new(pid, Utc::now() + Duration::hours(23), "", price).is_ok());
    }

    #[test]
    fn rejects_far_future_dates() {
        let price = Price::new(1000.0, "USD").unwrap();
        assert!(matches!(
            PropertyTrace::new(Uuid::new_v4(), Utc::now() + Duration::days(2), "", price),
            Err(ValidationError::DateTooFarInFuture)
        ));
    }

    #[test]
    fn rejects_nil_property_id() {
        let price = Price::new(1000.0, "USD").unwrap();
        assert!(PropertyTrace::new(Uuid::nil(), Utc::now(), "", price).is_err());
    }
}
