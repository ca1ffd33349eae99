//! Exact decimal money type
//!
//! All balances and interest amounts go through [`Money`], a thin wrapper over
//! `rust_decimal::Decimal`. Values never pass through binary floating point,
//! and the textual form round-trips exactly.

use crate::types::error::DepositError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of decimal places in a cent-denominated amount
pub const CENT_SCALE: u32 = 2;

/// Monetary amount with exact base-10 representation
///
/// Serializes as a decimal string (`"1002.50"`), never as a JSON number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::str")] Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wrap a decimal without rounding
    pub const fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Build from an integer number of cents
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, CENT_SCALE))
    }

    /// Underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Round to whole cents, ties away from zero (0.005 -> 0.01)
    pub fn round_cents(&self) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply by a rate expressed as a fraction (0.05 for 5%)
    pub fn checked_mul_rate(self, rate: Decimal) -> Option<Money> {
        self.0.checked_mul(rate).map(Money)
    }

    /// Divide by a whole number of periods; `None` on overflow or a zero divisor
    pub fn checked_div(self, periods: Decimal) -> Option<Money> {
        self.0.checked_div(periods).map(Money)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True for strictly negative amounts (negative zero is not negative)
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Money {
    /// Exact decimal string, padded to at least cent precision
    ///
    /// Extra fractional digits are never dropped: `1000.125` prints as-is,
    /// `1000` prints as `1000.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        if value.scale() < CENT_SCALE {
            value.rescale(CENT_SCALE);
        }
        write!(f, "{}", value)
    }
}

impl FromStr for Money {
    type Err = DepositError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DepositError::invalid_amount(s));
        }
        Decimal::from_str(trimmed)
            .map(Money)
            .map_err(|_| DepositError::invalid_amount(s))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl From<i32> for Money {
    fn from(value: i32) -> Self {
        Money(Decimal::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::tie_rounds_up("0.005", "0.01")]
    #[case::tie_rounds_up_odd("0.015", "0.02")]
    #[case::tie_not_bankers("0.025", "0.03")]
    #[case::below_tie("0.8333333333", "0.83")]
    #[case::above_tie("4.1666666667", "4.17")]
    #[case::negative_tie_away_from_zero("-0.005", "-0.01")]
    #[case::already_cents("2.50", "2.50")]
    fn test_round_cents(#[case] input: &str, #[case] expected: &str) {
        let money: Money = input.parse().unwrap();
        assert_eq!(money.round_cents().to_string(), expected);
    }

    #[rstest]
    #[case::integer("1000", "1000.00")]
    #[case::one_place("1002.5", "1002.50")]
    #[case::cents("1004.17", "1004.17")]
    #[case::sub_cent_kept("1000.125", "1000.125")]
    #[case::whitespace("  15.1  ", "15.10")]
    fn test_parse_and_display(#[case] input: &str, #[case] expected: &str) {
        let money: Money = input.parse().unwrap();
        assert_eq!(money.to_string(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::word("abc")]
    #[case::thousands_separator("1,000")]
    #[case::float_nan("NaN")]
    fn test_parse_rejects_non_numeric(#[case] input: &str) {
        let result = input.parse::<Money>();
        assert_eq!(result, Err(DepositError::invalid_amount(input)));
    }

    #[test]
    fn test_string_round_trip_is_exact() {
        let text = "123456789.123456789";
        let money: Money = text.parse().unwrap();
        assert_eq!(money.to_string(), text);
    }

    #[test]
    fn test_serializes_as_string() {
        let money = Money::from_cents(100250);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "\"1002.50\"");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }

    #[test]
    fn test_rejects_json_number() {
        assert!(serde_json::from_str::<Money>("1002.5").is_err());
        assert!(serde_json::from_str::<Money>("\"abc\"").is_err());
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::from(1)), None);
        assert_eq!(
            Money::from(1000).checked_add(Money::from_cents(83)),
            Some(Money::from_cents(100083))
        );
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(
            Money::from_cents(6).checked_div(Decimal::from(12)),
            Some(Money::new(Decimal::new(5, 3)))
        );
        assert_eq!(Money::from(1).checked_div(Decimal::ZERO), None);
    }

    #[test]
    fn test_is_negative() {
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::from(5).is_negative());
    }
}
