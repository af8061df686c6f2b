use uuid::Uuid;

use crate::domain::entities::Property;

/// Composite search filter for the property catalog.
///
/// Every criterion is optional and the supplied ones combine with logical
/// AND. The storage adapters execute the same semantics this type defines:
/// `matches` is the reference predicate the in-memory backend runs directly
/// and the SQL backend reproduces in its WHERE clause.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub owner_id: Option<Uuid>,
    pub text: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub year: Option<i32>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_page(mut self, page: i64, page_size: i64) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    /// 1-based page; anything below 1 normalizes to 1.
    pub fn page(&self) -> i64 {
        match self.page {
            Some(p) if p > 0 => p,
            _ => 1,
        }
    }

    /// Page size; anything below 1 normalizes to 20.
    pub fn page_size(&self) -> i64 {
        match self.page_size {
            Some(s) if s > 0 => s,
            _ => 20,
        }
    }

    /// Number of matching items to skip before the returned page.
    pub fn skip(&self) -> i64 {
        (self.page() - 1) * self.page_size()
    }

    /// The text criterion, trimmed; blank input counts as absent.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Reference matching predicate: AND across supplied criteria, with the
    /// text term matched as a case-insensitive prefix against any of name,
    /// street, city, state, country and zip code.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(owner_id) = self.owner_id {
            if property.owner_id() != owner_id {
                return false;
            }
        }
        if let Some(text) = self.text() {
            let address = property.address();
            let fields = [
                property.name(),
                address.street(),
                address.city(),
                address.state(),
                address.country(),
                address.zip_code(),
            ];
            if !fields.iter().any(|f| starts_with_ignore_case(f, text)) {
                return false;
            }
        }
        let amount = property.price().amount();
        if let Some(min) = self.price_min {
            if amount < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if amount > max {
                return false;
            }
        }
        if let Some(year) = self.year {
            if property.year() != year {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive prefix match. Prefix, not substring: the SQL backend
/// anchors its ILIKE pattern the same way.
pub fn starts_with_ignore_case(field: &str, prefix: &str) -> bool {
    field.to_lowercase().starts_with(&prefix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Address, Price};

    fn property(name: &str, city: &str, amount: f64, year: i32, owner: Uuid) -> Property {
        Property::new(
            name,
            Address::new("Calle 10", city, "", "Colombia", "110111").unwrap(),
            Price::new(amount, "USD").unwrap(),
            year,
            100.0,
            owner,
            true,
        )
        .unwrap()
    }

    #[test]
    fn page_normalization() {
        let f = PropertyFilter::new().with_page(0, -5);
        assert_eq!(f.page(), 1);
        assert_eq!(f.page_size(), 20);
        assert_eq!(f.skip(), 0);

        let f = PropertyFilter::new().with_page(3, 10);
        assert_eq!(f.skip(), 20);
    }

    #[test]
    fn text_matches_prefix_not_substring() {
        let owner = Uuid::new_v4();
        let centro = property("Casa Centro", "Bogota", 100000.0, 2020, owner);
        let la_casa = property("La Casa", "Bogota", 100000.0, 2020, owner);

        let f = PropertyFilter::new().with_text("Cas");
        assert!(f.matches(&centro));
        assert!(!f.matches(&la_casa));

        // prefix applies across address fields too
        let f = PropertyFilter::new().with_text("bogo");
        assert!(f.matches(&la_casa));
    }

    #[test]
    fn criteria_combine_with_and() {
        let owner = Uuid::new_v4();
        let p = property("Casa Centro", "Bogota", 100000.0, 2020, owner);

        let f = PropertyFilter::new().with_text("Cas").with_year(2020).with_owner(owner);
        assert!(f.matches(&p));

        let f = PropertyFilter::new().with_text("Cas").with_year(2021);
        assert!(!f.matches(&p));

        let f = PropertyFilter::new().with_owner(Uuid::new_v4());
        assert!(!f.matches(&p));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let p = property("Casa", "Bogota", 100000.0, 2020, Uuid::new_v4());

        assert!(PropertyFilter::new()
            .with_price_range(Some(100000.0), Some(100000.0))
            .matches(&p));
        assert!(!PropertyFilter::new()
            .with_price_range(Some(100000.01), None)
            .matches(&p));
        assert!(!PropertyFilter::new()
            .with_price_range(None, Some(99999.99))
            .matches(&p));
    }

    #[test]
    fn blank_text_is_absent() {
        let p = property("Casa", "Bogota", 100000.0, 2020, Uuid::new_v4());
        assert!(PropertyFilter::new().with_text("   ").matches(&p));
    }
}
