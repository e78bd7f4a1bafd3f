//! Type-safe price representation using decimal arithmetic.
//!
//! The cart deals in a single currency, so a [`Price`] is a non-negative
//! decimal amount and nothing more. Display formatting always uses two
//! decimal places followed by [`CURRENCY_LABEL`], e.g. `"149.90 DH"`.
//!
//! On the wire a price is a JSON number (not a string), matching the cart
//! snapshot format. Because that number is an `f64`, a price only exists if
//! its amount survives the trip through `f64` unchanged, and amounts are
//! capped at [`Price::MAX_UNITS`] so line totals and cart totals stay far
//! from the `Decimal` range.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Currency suffix used when displaying prices.
pub const CURRENCY_LABEL: &str = "DH";

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// The input string is not a decimal number.
    #[error("invalid price: {0:?}")]
    Invalid(String),
    /// The amount is above [`Price::MAX_UNITS`].
    #[error("price exceeds {max}: {amount}")]
    TooLarge { amount: Decimal, max: u64 },
    /// The amount has more precision than a stored snapshot can keep.
    #[error("price is too precise to store: {0}")]
    TooPrecise(Decimal),
}

/// A non-negative amount in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest accepted amount, in whole currency units.
    pub const MAX_UNITS: u64 = 10_000_000_000;

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero,
    /// [`PriceError::TooLarge`] above [`Price::MAX_UNITS`] and
    /// [`PriceError::TooPrecise`] if the amount would change when written
    /// to a snapshot.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount > Decimal::from(Self::MAX_UNITS) {
            return Err(PriceError::TooLarge {
                amount,
                max: Self::MAX_UNITS,
            });
        }
        if !survives_f64(amount) {
            return Err(PriceError::TooPrecise(amount));
        }
        Ok(Self(amount.normalize()))
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Parse a price from a plain decimal string such as `"19.99"`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Invalid`] for non-numeric input and
    /// [`PriceError::Negative`] for amounts below zero.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price, saturating at
    /// `Decimal::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(
            self.0
                .checked_mul(Decimal::from(quantity))
                .unwrap_or(Decimal::MAX),
        )
    }

    /// Format for display, e.g. `"19.99 DH"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {CURRENCY_LABEL}", self.display_amount())
    }

    /// Format the amount with two decimal places and no currency label.
    #[must_use]
    pub fn display_amount(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Price {
    type Output = Self;

    /// Saturates at `Decimal::MAX`.
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Whether `amount` reads back unchanged after being written as an `f64`
/// JSON number, the way [`Price`] is serialized.
fn survives_f64(amount: Decimal) -> bool {
    amount
        .to_f64()
        .and_then(|f| Decimal::from_str(&f.to_string()).ok())
        .is_some_and(|back| back == amount)
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let err = Price::new(Decimal::new(-1, 0)).unwrap_err();
        assert!(matches!(err, PriceError::Negative(_)));
    }

    #[test]
    fn test_new_accepts_zero() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Price::parse("19.99").unwrap().amount(), Decimal::new(1999, 2));
        assert_eq!(Price::parse(" 100 ").unwrap(), Price::from_units(100));
        assert!(matches!(Price::parse("abc"), Err(PriceError::Invalid(_))));
        assert!(matches!(Price::parse(""), Err(PriceError::Invalid(_))));
        assert!(matches!(Price::parse("-3"), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_times_and_sum() {
        let shirt = Price::parse("49.50").unwrap();
        let hat = Price::from_units(30);
        let total: Price = [shirt.times(2), hat.times(1)].into_iter().sum();
        assert_eq!(total, Price::from_units(129));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Price = std::iter::empty().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_units(200).display(), "200.00 DH");
        assert_eq!(Price::parse("0.5").unwrap().to_string(), "0.50 DH");
        assert_eq!(Price::parse("12.345").unwrap().display_amount(), "12.35");
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Price::from_units(10)).unwrap(), "10.0");
        assert_eq!(
            serde_json::to_string(&Price::parse("19.99").unwrap()).unwrap(),
            "19.99"
        );
    }

    #[test]
    fn test_deserializes_integers_and_floats() {
        let a: Price = serde_json::from_str("10").unwrap();
        assert_eq!(a, Price::from_units(10));

        let b: Price = serde_json::from_str("19.99").unwrap();
        assert_eq!(b, Price::parse("19.99").unwrap());
    }

    #[test]
    fn test_new_rejects_amounts_above_max() {
        let err = Price::parse("50000000000000000000000000000").unwrap_err();
        assert!(matches!(err, PriceError::TooLarge { .. }));
        assert!(Price::new(Decimal::from(Price::MAX_UNITS)).is_ok());
    }

    #[test]
    fn test_new_rejects_amounts_lost_in_snapshot() {
        let err = Price::parse("12.3456789012345678901").unwrap_err();
        assert!(matches!(err, PriceError::TooPrecise(_)));
    }

    #[test]
    fn test_accepted_prices_round_trip_through_json() {
        for raw in ["19.99", "0.1", "149.90", "12.345678901", "10000000000"] {
            let price = Price::parse(raw).unwrap();
            let json = serde_json::to_string(&price).unwrap();
            let back: Price = serde_json::from_str(&json).unwrap();
            assert_eq!(back, price, "{raw} came back as {json}");
        }
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let max = Price::new(Decimal::from(Price::MAX_UNITS)).unwrap();
        let line = max.times(u32::MAX);
        assert!(line > max);

        let huge = Price(Decimal::MAX);
        assert_eq!(huge.times(2), huge);
        assert_eq!(huge + max, huge);
        let total: Price = [huge, huge, max].into_iter().sum();
        assert_eq!(total, huge);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }
}
