//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 hundredths) so that sums and
//! differences are exact. On the wire the backend speaks decimal numbers, so
//! serialization converts to and from a decimal `f64`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::currency::Currency;

/// Largest decimal magnitude accepted from the wire
const MAX_DECIMAL: f64 = 9.0e15;

/// Represents a monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use dolla::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_decimal(), 10.5);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and minor units
    pub const fn from_units(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Convert a decimal amount, rounding to the nearest minor unit
    ///
    /// Returns `None` for NaN, infinities and magnitudes that do not fit.
    ///
    /// # Examples
    /// ```
    /// use dolla::models::Money;
    /// assert_eq!(Money::from_decimal(12.345).unwrap().cents(), 1235);
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > MAX_DECIMAL {
            return None;
        }
        Some(Self((value * 100.0).round() as i64))
    }

    /// Add two amounts, or `None` if the sum does not fit
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a decimal number
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Clamp negative amounts to zero
    pub fn non_negative(self) -> Self {
        self.max(Self::zero())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "1,250.00", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
        let value: f64 = cleaned
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
        Self::from_decimal(value).ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))
    }

    /// Plain decimal string with two fractional digits, e.g. "-1250.05"
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        }
    }

    /// Format with a currency code and thousands separators, e.g. "KES 1,250.00"
    pub fn format_with_currency(&self, currency: Currency) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{} {}.{:02}",
            sign,
            currency,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value)))
    }
}

// The operators saturate at the i64 range. Aggregations over records use
// `checked_add` instead so an out-of-range record is reported, not clamped.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Money amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_unit_parts() {
        let rent = Money::from_units(18_500, 75);
        assert_eq!(rent.cents(), 1_850_075);
        assert_eq!(rent.units(), 18_500);
        assert_eq!(rent.cents_part(), 75);
        assert_eq!((-rent).cents_part(), 75);
    }

    #[test]
    fn test_from_decimal_rounds_to_minor_units() {
        assert_eq!(Money::from_decimal(0.1).unwrap().cents(), 10);
        assert_eq!(Money::from_decimal(19.999).unwrap().cents(), 2000);
        assert_eq!(Money::from_decimal(-4.5).unwrap().cents(), -450);
        assert!(Money::from_decimal(f64::INFINITY).is_none());
        assert!(Money::from_decimal(1.0e20).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_format_with_currency() {
        let m = Money::from_cents(123_456_789);
        assert_eq!(m.format_with_currency(Currency::Kes), "KES 1,234,567.89");
        assert_eq!(
            Money::from_cents(-50_000).format_with_currency(Currency::Usd),
            "-USD 500.00"
        );
        assert_eq!(Money::zero().format_with_currency(Currency::Eur), "EUR 0.00");
    }

    #[test]
    fn test_ledger_arithmetic() {
        let salary = Money::from_units(60_000, 0);
        let mut left = salary;
        left -= Money::from_units(18_500, 0);
        left += Money::from_cents(250);

        assert_eq!(left.cents(), 4_150_250);
        assert_eq!(salary - left, Money::from_cents(1_849_750));
        assert_eq!((left - salary).non_negative(), Money::zero());
        assert!((-salary).is_negative());
    }

    #[test]
    fn test_arithmetic_at_the_edges() {
        let big = Money::from_cents(i64::MAX - 10);
        assert_eq!(big.checked_add(Money::from_cents(10)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_cents(11)), None);

        assert_eq!(big + big, Money::from_cents(i64::MAX));
        assert_eq!(-big - big, Money::from_cents(i64::MIN));
        assert_eq!(-Money::from_cents(i64::MIN), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("2,499.99").unwrap().cents(), 249_999);
        assert_eq!(Money::parse("-0.5").unwrap().cents(), -50);
        assert_eq!(Money::parse(" 7 ").unwrap().cents(), 700);
        assert!(matches!(
            Money::parse("seven"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("1e30"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_sum_owned_and_borrowed() {
        let fares: Vec<Money> = [120, 80, 300].into_iter().map(Money::from_cents).collect();
        let borrowed: Money = fares.iter().sum();
        let owned: Money = fares.into_iter().sum();
        assert_eq!(owned, Money::from_cents(500));
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_serialization_uses_decimals() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str("10.5").unwrap();
        assert_eq!(m, deserialized);

        let whole: Money = serde_json::from_str("250").unwrap();
        assert_eq!(whole.cents(), 25_000);
    }
}
