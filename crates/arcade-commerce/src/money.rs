//! Money type for representing prices.
//!
//! Uses a cents-based integer representation so cart totals add up
//! exactly (29.99 + 14.99 is 44.98, not 44.980000000000004).

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

const CENTS_PER_UNIT: i64 = 100;

/// Largest accepted unit price: $1,000,000.00.
pub const MAX_PRICE: Money = Money::new(1_000_000 * CENTS_PER_UNIT);

/// A US dollar amount.
///
/// Serialized as a decimal JSON number (`29.99`), which is how prices
/// appear in catalog data and in the stored cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounding to the
    /// nearest cent.
    ///
    /// ```
    /// use arcade_commerce::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Zero dollars.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Check if this is usable as a unit price: between zero and
    /// [`MAX_PRICE`] inclusive.
    pub fn is_valid_price(&self) -> bool {
        (0..=MAX_PRICE.amount_cents).contains(&self.amount_cents)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format with symbol and two decimals (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${}", self.display_amount())
    }

    /// Format with two decimals and no symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!(
            "{}{}.{:02}",
            sign,
            cents / CENTS_PER_UNIT as u64,
            cents % CENTS_PER_UNIT as u64
        )
    }
}

impl Add for Money {
    type Output = Money;

    /// Saturates at the `i64` bounds instead of overflowing.
    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(de::Error::custom(format!("price is not finite: {amount}")));
        }
        Ok(Money::from_decimal(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(29.99).amount_cents, 2999);
        assert_eq!(Money::from_decimal(9.99).amount_cents, 999);
        assert_eq!(Money::from_decimal(0.0).amount_cents, 0);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(5).display_amount(), "0.05");
        assert_eq!(Money::new(-150).display_amount(), "-1.50");
        assert_eq!(Money::new(4498).to_string(), "$44.98");
    }

    #[test]
    fn test_money_sum_is_exact() {
        let prices = [Money::from_decimal(29.99), Money::from_decimal(14.99)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::new(4498));
    }

    #[test]
    fn test_price_bounds() {
        assert!(Money::zero().is_valid_price());
        assert!(MAX_PRICE.is_valid_price());
        assert!(!Money::new(-1).is_valid_price());
        assert!(!Money::from_decimal(1e300).is_valid_price());
    }

    #[test]
    fn test_addition_saturates() {
        let huge = Money::from_decimal(1e300);
        assert_eq!(huge.amount_cents, i64::MAX);

        let total: Money = [huge, huge, Money::new(1)].into_iter().sum();
        assert_eq!(total.amount_cents, i64::MAX);
        assert_eq!((Money::new(i64::MIN) + Money::new(-5)).amount_cents, i64::MIN);
    }

    #[test]
    fn test_money_serializes_as_number() {
        let json = serde_json::to_string(&Money::new(2499)).unwrap();
        assert_eq!(json, "24.99");

        let parsed: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(parsed, Money::new(1999));

        let integer: Money = serde_json::from_str("10").unwrap();
        assert_eq!(integer, Money::new(1000));
    }
}
