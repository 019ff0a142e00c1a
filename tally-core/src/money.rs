//! Exact decimal money arithmetic.
//!
//! Budget comparisons are exact by contract: a cart that lands precisely on
//! the budget is within it, so amounts are stored as integer paise rather
//! than floats. Two decimal places of precision cover the currency.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::error::MoneyParseError;

/// A non-negative monetary amount in integer paise (hundredths of a rupee).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Construct from integer paise.
    pub const fn from_paise(paise: u64) -> Self {
        Money(paise)
    }

    /// Construct from whole rupees.
    pub const fn from_rupees(rupees: u64) -> Self {
        Money(rupees * 100)
    }

    /// The amount in integer paise.
    pub const fn paise(&self) -> u64 {
        self.0
    }

    /// Parse a user-entered amount such as `"100"`, `"99.5"` or `"99.50"`.
    ///
    /// Rejects empty input, signs, non-digits, and more than two decimal
    /// places. Zero parses successfully; callers that need a positive amount
    /// check separately.
    pub fn parse(input: &str) -> Result<Money, MoneyParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoneyParseError::NotANumber(input.to_string()));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoneyParseError::NotANumber(input.to_string()));
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.to_string()));
        }

        let rupees: u64 = whole
            .parse()
            .map_err(|_| MoneyParseError::Overflow(input.to_string()))?;
        let paise = match fraction.len() {
            0 => 0,
            // "99.5" means 50 paise, not 5
            1 => fraction.parse::<u64>().unwrap_or(0) * 10,
            _ => fraction.parse::<u64>().unwrap_or(0),
        };

        rupees
            .checked_mul(100)
            .and_then(|r| r.checked_add(paise))
            .map(Money)
            .ok_or_else(|| MoneyParseError::Overflow(input.to_string()))
    }

    /// Checked addition.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked subtraction; `None` if the result would be negative.
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiply a unit price by a quantity.
    pub fn times(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(quantity as u64).map(Money)
    }

    /// True for the zero amount.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rupees = self.0 / 100;
        let paise = self.0 % 100;
        if paise == 0 {
            write!(f, "₹{rupees}")
        } else {
            write!(f, "₹{rupees}.{paise:02}")
        }
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative amount with at most two decimal places")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount {v} too large")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        let v = u64::try_from(v).map_err(|_| E::custom(format!("negative amount {v}")))?;
        self.visit_u64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() || v < 0.0 {
            return Err(E::custom(format!("invalid amount {v}")));
        }
        let scaled = v * 100.0;
        let paise = scaled.round();
        // catalog prices carry at most two decimal places
        if (scaled - paise).abs() > 1e-6 || paise > u64::MAX as f64 {
            return Err(E::custom(format!(
                "amount {v} has more than two decimal places"
            )));
        }
        Ok(Money(paise as u64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_rupees() {
        assert_eq!(Money::parse("100"), Ok(Money::from_rupees(100)));
    }

    #[test]
    fn parse_one_decimal_place_means_tens_of_paise() {
        assert_eq!(Money::parse("99.5"), Ok(Money::from_paise(9950)));
    }

    #[test]
    fn parse_two_decimal_places() {
        assert_eq!(Money::parse("99.05"), Ok(Money::from_paise(9905)));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Money::parse("  42 "), Ok(Money::from_rupees(42)));
    }

    #[test]
    fn parse_zero_succeeds() {
        assert_eq!(Money::parse("0"), Ok(Money::ZERO));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
    }

    #[test]
    fn parse_rejects_negative() {
        assert!(matches!(
            Money::parse("-5"),
            Err(MoneyParseError::NotANumber(_))
        ));
    }

    #[test]
    fn parse_rejects_text() {
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::NotANumber(_))
        ));
        assert!(matches!(
            Money::parse("12x"),
            Err(MoneyParseError::NotANumber(_))
        ));
    }

    #[test]
    fn parse_rejects_three_decimal_places() {
        assert!(matches!(
            Money::parse("1.005"),
            Err(MoneyParseError::TooPrecise(_))
        ));
    }

    #[test]
    fn parse_rejects_bare_fraction() {
        assert!(matches!(
            Money::parse(".5"),
            Err(MoneyParseError::NotANumber(_))
        ));
    }

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(
            Money::from_rupees(50).times(2),
            Some(Money::from_rupees(100))
        );
    }

    #[test]
    fn checked_sub_underflow_is_none() {
        assert_eq!(Money::from_rupees(1).checked_sub(Money::from_rupees(2)), None);
    }

    #[test]
    fn display_whole_amount_has_no_fraction() {
        assert_eq!(Money::from_rupees(40).to_string(), "₹40");
    }

    #[test]
    fn display_fractional_amount_pads_paise() {
        assert_eq!(Money::from_paise(9905).to_string(), "₹99.05");
    }

    #[test]
    fn deserialize_integer_price() {
        let m: Money = serde_json::from_str("40").unwrap();
        assert_eq!(m, Money::from_rupees(40));
    }

    #[test]
    fn deserialize_fractional_price_is_exact() {
        let m: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(m, Money::from_paise(1250));
    }

    #[test]
    fn deserialize_string_price() {
        let m: Money = serde_json::from_str("\"99.50\"").unwrap();
        assert_eq!(m, Money::from_paise(9950));
    }

    #[test]
    fn deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Money>("-3").is_err());
    }

    #[test]
    fn deserialize_rejects_sub_paise_precision() {
        assert!(serde_json::from_str::<Money>("1.005").is_err());
    }

    #[test]
    fn ordering_follows_amount() {
        assert!(Money::from_rupees(5) < Money::from_rupees(6));
        assert!(Money::from_paise(100) == Money::from_rupees(1));
    }
}
