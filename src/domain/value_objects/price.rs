use serde::{Deserialize, Serialize};

use crate::domain::errors::{ValidationError, ValidationResult};

/// A validated monetary amount with its currency code.
///
/// Immutable once constructed: the amount is non-negative and rounded to
/// two decimals (half away from zero), the currency is a trimmed uppercase
/// 3-4 letter code. `increase_by`/`decrease_by` return new instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    amount: f64,
    currency: String,
}

impl Price {
    pub fn new(amount: f64, currency: &str) -> ValidationResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::NegativeAmount(amount));
        }
        let code = currency.trim().to_uppercase();
        if code.is_empty()
            || !(3..=4).contains(&code.chars().count())
            || !code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ValidationError::InvalidCurrency(currency.to_string()));
        }
        Ok(Self {
            amount: round_half_away(amount),
            currency: code,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// New price with the amount increased by a non-negative delta.
    pub fn increase_by(&self, delta: f64) -> ValidationResult<Self> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(ValidationError::NegativeDelta(delta));
        }
        Self::new(self.amount + delta, &self.currency)
    }

    /// New price with the amount decreased by a non-negative delta.
    /// Fails rather than ever producing a negative amount.
    pub fn decrease_by(&self, delta: f64) -> ValidationResult<Self> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(ValidationError::NegativeDelta(delta));
        }
        let rounded = round_half_away(delta);
        if rounded > self.amount {
            return Err(ValidationError::PriceUnderflow {
                amount: self.amount,
                delta: rounded,
            });
        }
        Self::new(self.amount - rounded, &self.currency)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

/// Round to 2 decimals, half away from zero.
///
/// Works on the value's shortest decimal representation so that an amount
/// written as `1.005` rounds on its decimal digits to `1.01`, not on the
/// binary neighbor it actually stores (`1.00499…`).
fn round_half_away(value: f64) -> f64 {
    let text = format!("{value}");
    let unsigned = text.strip_prefix('-').unwrap_or(&text);
    let Some((whole_digits, frac_digits)) = unsigned.split_once('.') else {
        return value;
    };
    if frac_digits.len() <= 2 {
        return value;
    }
    let Ok(whole) = whole_digits.parse::<f64>() else {
        return (value * 100.0).round() / 100.0;
    };
    let frac = frac_digits.as_bytes();
    let mut cents = u32::from(frac[0] - b'0') * 10 + u32::from(frac[1] - b'0');
    // any digits past the third only push further from the midpoint
    if frac[2] - b'0' >= 5 {
        cents += 1;
    }
    let magnitude = whole + f64::from(cents) / 100.0;
    if value < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_prices() {
        let p = Price::new(150000.0, "usd").unwrap();
        assert_eq!(p.amount(), 150000.0);
        assert_eq!(p.currency(), "USD");

        assert!(Price::new(0.0, "EUR").is_ok());
        assert!(Price::new(99.999, "MXNX").is_ok());
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(Price::new(10.333, "USD").unwrap().amount(), 10.33);
        assert_eq!(Price::new(10.336, "USD").unwrap().amount(), 10.34);
        assert_eq!(Price::new(2.675001, "USD").unwrap().amount(), 2.68);
        // decimal midpoints round up even when the nearest f64 sits below
        assert_eq!(Price::new(1.005, "USD").unwrap().amount(), 1.01);
        assert_eq!(Price::new(2.675, "USD").unwrap().amount(), 2.68);
        assert_eq!(Price::new(1.004, "USD").unwrap().amount(), 1.0);
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(Price::new(-1.0, "USD").is_err());
        assert!(Price::new(f64::NAN, "USD").is_err());
        assert!(Price::new(1.0, "").is_err());
        assert!(Price::new(1.0, "US").is_err());
        assert!(Price::new(1.0, "DOLLA R").is_err());
        assert!(Price::new(1.0, "US1").is_err());
    }

    #[test]
    fn increase_and_decrease_return_new_instances() {
        let p = Price::new(100.0, "USD").unwrap();
        let up = p.increase_by(50.0).unwrap();
        assert_eq!(up.amount(), 150.0);
        assert_eq!(p.amount(), 100.0);

        let down = up.decrease_by(150.0).unwrap();
        assert_eq!(down.amount(), 0.0);
    }

    #[test]
    fn decrease_never_goes_negative() {
        let p = Price::new(100.0, "USD").unwrap();
        assert!(matches!(
            p.decrease_by(100.01),
            Err(ValidationError::PriceUnderflow { .. })
        ));
        assert!(p.decrease_by(-1.0).is_err());
    }

    #[test]
    fn equality_by_value() {
        assert_eq!(
            Price::new(10.0, "usd").unwrap(),
            Price::new(10.0, "USD").unwrap()
        );
        assert_ne!(
            Price::new(10.0, "USD").unwrap(),
            Price::new(10.0, "EUR").unwrap()
        );
    }
}
