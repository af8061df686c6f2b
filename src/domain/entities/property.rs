use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::validate::required_text;
use crate::domain::value_objects::{Address, Price};

/// Oldest construction year accepted by the catalog.
pub const MIN_YEAR: i32 = 1800;

/// A catalog property: address and price as value objects, owner by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    id: Uuid,
    name: String,
    address: Address,
    price: Price,
    year: i32,
    area: f64,
    owner_id: Uuid,
    active: bool,
    created_at_utc: DateTime<Utc>,
}

impl Property {
    pub fn new(
        name: &str,
        address: Address,
        price: Price,
        year: i32,
        area: f64,
        owner_id: Uuid,
        active: bool,
    ) -> ValidationResult<Self> {
        if owner_id.is_nil() {
            return Err(ValidationError::MissingOwnerId);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: required_text("name", name, 200)?,
            address,
            price,
            year: validate_year(year)?,
            area: validate_area(area)?,
            owner_id,
            active,
            created_at_utc: Utc::now(),
        })
    }

    /// Updates everything but price and ownership, re-running the
    /// construction validations. Leaves the entity untouched on failure.
    pub fn update_basics(
        &mut self,
        name: &str,
        address: Address,
        year: i32,
        area: f64,
    ) -> ValidationResult<()> {
        let name = required_text("name", name, 200)?;
        let year = validate_year(year)?;
        let area = validate_area(area)?;
        self.name = name;
        self.address = address;
        self.year = year;
        self.area = area;
        Ok(())
    }

    pub fn change_price(&mut self, new_price: Price) {
        self.price = new_price;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        self.created_at_utc
    }
}

fn validate_year(year: i32) -> ValidationResult<i32> {
    // next year allowed for presale listings
    let max = Utc::now().year() + 1;
    if year < MIN_YEAR || year > max {
        return Err(ValidationError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max,
        });
    }
    Ok(year)
}

fn validate_area(area: f64) -> ValidationResult<f64> {
    if !area.is_finite() || area <= 0.0 {
        return Err(ValidationError::NonPositiveArea(area));
    }
    Ok(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_address() -> Address {
        Address::new("Calle 10 #4", "Bogota", "", "Colombia", "110111").unwrap()
    }

    fn sample_price() -> Price {
        Price::new(150000.0, "USD").unwrap()
    }

    #[test]
    fn creates_active_property() {
        let owner = Uuid::new_v4();
        let p = Property::new("Casa Centro", sample_address(), sample_price(), 2020, 100.0, owner, true)
            .unwrap();
        assert_eq!(p.owner_id(), owner);
        assert_eq!(p.price().amount(), 150000.0);
        assert!(p.active());
    }

    #[test]
    fn rejects_out_of_range_year() {
        let owner = Uuid::new_v4();
        let next_year = Utc::now().year() + 1;
        assert!(Property::new("x", sample_address(), sample_price(), 1799, 10.0, owner, true).is_err());
        assert!(
            Property::new("x", sample_address(), sample_price(), next_year + 1, 10.0, owner, true)
                .is_err()
        );
        assert!(
            Property::new("x", sample_address(), sample_price(), next_year, 10.0, owner, true).is_ok()
        );
    }

    #[test]
    fn rejects_non_positive_area() {
        let owner = Uuid::new_v4();
        assert!(Property::new("x", sample_address(), sample_price(), 2020, 0.0, owner, true).is_err());
        assert!(Property::new("x", sample_address(), sample_price(), 2020, -5.0, owner, true).is_err());
    }

    #[test]
    fn rejects_nil_owner() {
        assert!(matches!(
            Property::new("x", sample_address(), sample_price(), 2020, 10.0, Uuid::nil(), true),
            Err(ValidationError::MissingOwnerId)
        ));
    }

    #[test]
    fn update_basics_keeps_state_on_failure() {
        let mut p =
            Property::new("Casa", sample_address(), sample_price(), 2020, 100.0, Uuid::new_v4(), true)
                .unwrap();
        assert!(p.update_basics("Casa", sample_address(), 2020, -1.0).is_err());
        assert_eq!(p.area(), 100.0);

        p.update_basics("Casa Norte", sample_address(), 2021, 120.0).unwrap();
        assert_eq!(p.name(), "Casa Norte");
        assert_eq!(p.year(), 2021);
    }

    #[test]
    fn activate_deactivate_toggle() {
        let mut p =
            Property::new("Casa", sample_address(), sample_price(), 2020, 100.0, Uuid::new_v4(), true)
                .unwrap();
        p.deactivate();
        assert!(!p.active());
        p.activate();
        assert!(p.active());
    }
}
