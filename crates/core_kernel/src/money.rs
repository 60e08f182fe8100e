//! Money and ratio types with precise decimal arithmetic
//!
//! Amounts are carried as `rust_decimal::Decimal` at full precision. No
//! rounding to cents happens during calculation; rounding is applied only
//! when an amount is displayed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid ratio: {0}")]
    InvalidRatio(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount
///
/// Single-currency by construction; the report layer renders it in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from an integer amount in cents
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds to whole cents
    pub fn round_to_cents(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Multiplies by a scalar
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.0.checked_div(divisor).map(Self).ok_or(MoneyError::Overflow)
    }

    /// Checked addition that returns an error on overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0.checked_add(other.0).map(Self).ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that returns an error on overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0.checked_sub(other.0).map(Self).ok_or(MoneyError::Overflow)
    }

    /// Checked multiplication by a scalar
    pub fn checked_mul(&self, factor: Decimal) -> Result<Money, MoneyError> {
        self.0.checked_mul(factor).map(Self).ok_or(MoneyError::Overflow)
    }

    /// Sums amounts, returning an error instead of overflowing
    pub fn checked_sum<'a>(
        amounts: impl IntoIterator<Item = &'a Money>,
    ) -> Result<Money, MoneyError> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, m| acc.checked_add(m))
    }

    /// Divides into `n` equal shares
    pub fn split_evenly(&self, n: usize) -> Result<Self, MoneyError> {
        self.divide(Decimal::from(n))
    }

    /// Returns true if `other` is within `tolerance` of this amount
    pub fn approx_eq(&self, other: &Money, tolerance: Decimal) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }

    /// Formats as `$#,##0.00`, with a leading minus sign for negative amounts
    pub fn to_dollars(&self) -> String {
        let rounded = self.0.round_dp(2);
        let text = format!("{:.2}", rounded.abs());
        let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        format!("{}${}.{}", sign, grouped, cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dollars())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Mul<Ratio> for Money {
    type Output = Self;

    fn mul(self, ratio: Ratio) -> Self {
        ratio.apply(&self)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + *m)
    }
}

/// A non-negative share of a cost (e.g., 0.5 for half of a room)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Ratio {
    value: Decimal,
}

impl Ratio {
    /// Nobody's share
    pub const ZERO: Ratio = Ratio { value: Decimal::ZERO };
    /// The whole cost
    pub const ONE: Ratio = Ratio { value: Decimal::ONE };

    /// Creates a ratio, rejecting negative values
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::InvalidRatio(format!(
                "ratio must not be negative, got {}",
                value
            )));
        }
        Ok(Self { value })
    }

    /// Creates a ratio from a percentage (e.g., 50 for one half)
    pub fn from_percentage(percentage: Decimal) -> Result<Self, MoneyError> {
        Self::new(percentage / dec!(100))
    }

    /// Returns the ratio as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns true if this is exactly one
    pub fn is_one(&self) -> bool {
        self.value == Decimal::ONE
    }

    /// Applies this ratio to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl TryFrom<Decimal> for Ratio {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Ratio::new(value)
    }
}

impl From<Ratio> for Decimal {
    fn from(ratio: Ratio) -> Decimal {
        ratio.value
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((-a).amount(), dec!(-100.00));
    }

    #[test]
    fn test_divide_by_zero_is_an_error() {
        let m = Money::new(dec!(10));
        assert_eq!(m.divide(Decimal::ZERO), Err(MoneyError::DivisionByZero));
        assert_eq!(m.split_evenly(0), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let max = Money::new(Decimal::MAX);

        assert_eq!(max.checked_add(&Money::new(dec!(1))), Err(MoneyError::Overflow));
        assert_eq!(
            Money::new(Decimal::MIN).checked_sub(&Money::new(dec!(1))),
            Err(MoneyError::Overflow)
        );
        assert_eq!(max.checked_mul(dec!(2)), Err(MoneyError::Overflow));
        assert_eq!(Money::checked_sum(&[max, max]), Err(MoneyError::Overflow));
        assert_eq!(
            Money::checked_sum(&[Money::new(dec!(1.5)), Money::new(dec!(2))]),
            Ok(Money::new(dec!(3.5)))
        );
    }

    #[test]
    fn test_dollar_formatting() {
        assert_eq!(Money::new(dec!(5095)).to_dollars(), "$5,095.00");
        assert_eq!(Money::new(dec!(163.636363)).to_dollars(), "$163.64");
        assert_eq!(Money::new(dec!(-1234567.891)).to_dollars(), "-$1,234,567.89");
        assert_eq!(Money::new(dec!(0.001)).to_dollars(), "$0.00");
        assert_eq!(Money::new(dec!(-0.001)).to_dollars(), "$0.00");
    }

    #[test]
    fn test_ratio_rejects_negative() {
        assert!(Ratio::new(dec!(-0.1)).is_err());
        assert!(Ratio::new(dec!(0)).is_ok());
        assert!(Ratio::new(dec!(1.5)).is_ok());
    }

    #[test]
    fn test_ratio_application() {
        let ratio = Ratio::from_percentage(dec!(30)).unwrap();
        let amount = Money::new(dec!(1000.00));

        assert_eq!((amount * ratio).amount(), dec!(300.00));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn even_split_sums_back_to_original(
            cents in 1i64..1_000_000_000i64,
            parts in 1usize..50usize
        ) {
            let money = Money::from_cents(cents);
            let share = money.split_evenly(parts).unwrap();
            let total: Money = std::iter::repeat(share).take(parts).sum();

            prop_assert!(total.approx_eq(&money, dec!(0.000000001)));
        }

        #[test]
        fn money_addition_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_cents(a);
            let mb = Money::from_cents(b);
            let mc = Money::from_cents(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }
    }
}
