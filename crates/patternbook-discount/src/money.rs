//! Money type for representing monetary values.
//!
//! Amounts are exact decimals, so sums, flat subtractions and percentage
//! discounts never lose precision. Rounding to the currency's minor unit
//! only happens when formatting for display.

use crate::error::{DiscountError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts may be negative: a flat discount larger than the total it is
/// applied to produces a negative result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in major units (e.g., dollars), unrounded.
    pub amount: Decimal,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value from whole major units.
    ///
    /// Every `i64` is representable, so this cannot overflow.
    ///
    /// ```
    /// use patternbook_discount::money::{Currency, Money};
    /// use rust_decimal::Decimal;
    /// let price = Money::from_major(150, Currency::USD);
    /// assert_eq!(price.amount, Decimal::from(150));
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(Decimal::from(amount), currency)
    }

    /// Create a Money value from minor units (e.g., cents).
    ///
    /// ```
    /// use patternbook_discount::money::{Currency, Money};
    /// use rust_decimal::Decimal;
    /// let price = Money::from_minor(4999, Currency::USD);
    /// assert_eq!(price.amount, Decimal::new(4999, 2));
    /// ```
    pub fn from_minor(amount: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(amount, currency.decimal_places()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Round to the currency's minor unit, half away from zero.
    pub fn round_to_minor(&self) -> Money {
        let rounded = self.amount.round_dp_with_strategy(
            self.currency.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        );
        Money::new(rounded, self.currency)
    }

    /// Format as a display string (e.g., "$49.99", "-$5.00").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let rounded = self.round_to_minor();
        let sign = if rounded.is_negative() { "-" } else { "" };
        format!(
            "{}{}{:.places$}",
            sign,
            self.currency.symbol(),
            rounded.amount.abs()
        )
    }

    /// Add another Money value of the same currency.
    pub fn try_add(&self, other: &Money) -> Result<Money> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(DiscountError::Overflow)
    }

    /// Subtract another Money value of the same currency.
    pub fn try_subtract(&self, other: &Money) -> Result<Money> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(DiscountError::Overflow)
    }

    /// Calculate `percent`% of this amount, exactly.
    pub fn percentage(&self, percent: Decimal) -> Result<Money> {
        self.amount
            .checked_mul(percent)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(DiscountError::Overflow)
    }

    /// Sum an iterator of Money values.
    pub fn try_sum(iter: impl IntoIterator<Item = Money>, currency: Currency) -> Result<Money> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(&m))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<()> {
        if self.currency != other.currency {
            return Err(DiscountError::currency_mismatch(self.currency, other.currency));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        assert_eq!(Money::from_major(100, Currency::USD).amount, Decimal::from(100));
        assert_eq!(Money::from_major(-60, Currency::JPY).amount, Decimal::from(-60));
    }

    #[test]
    fn test_money_from_major_extremes() {
        let max = Money::from_major(i64::MAX, Currency::USD);
        assert_eq!(max.amount, Decimal::from(i64::MAX));

        let min = Money::from_major(i64::MIN, Currency::USD);
        assert_eq!(min.amount, Decimal::from(i64::MIN));
    }

    #[test]
    fn test_money_from_minor() {
        assert_eq!(Money::from_minor(4999, Currency::USD).amount, Decimal::new(4999, 2));
        assert_eq!(Money::from_minor(100, Currency::JPY).amount, Decimal::from(100)); // JPY has no decimals
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_minor(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::from_major(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::from_minor(-500, Currency::USD).display(), "-$5.00");
        assert_eq!(Money::new(Decimal::new(8415, 4), Currency::USD).display(), "$0.84");
        assert_eq!(Money::new(Decimal::new(-1, 3), Currency::USD).display(), "$0.00");
    }

    #[test]
    fn test_round_to_minor() {
        let m = Money::new(Decimal::new(125, 3), Currency::USD); // 0.125
        assert_eq!(m.round_to_minor().amount, Decimal::new(13, 2));
    }

    #[test]
    fn test_money_addition() {
        let a = Money::from_minor(1000, Currency::USD);
        let b = Money::from_minor(500, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap(), Money::from_major(15, Currency::USD));
    }

    #[test]
    fn test_money_subtraction_can_go_negative() {
        let a = Money::from_major(3, Currency::USD);
        let b = Money::from_major(10, Currency::USD);
        assert_eq!(a.try_subtract(&b).unwrap(), Money::from_major(-7, Currency::USD));
    }

    #[test]
    fn test_money_percentage_is_exact() {
        let m = Money::from_major(100, Currency::USD);
        assert_eq!(m.percentage(Decimal::from(10)).unwrap().amount, Decimal::from(10));

        // 15% of $0.99 keeps the sub-cent remainder.
        let m = Money::from_minor(99, Currency::USD);
        assert_eq!(m.percentage(Decimal::from(15)).unwrap().amount, Decimal::new(1485, 4));
    }

    #[test]
    fn test_money_percentage_large_amount() {
        let cents = (1_i64 << 53) + 1;
        let m = Money::from_minor(cents, Currency::USD);
        assert_eq!(m.percentage(Decimal::ONE_HUNDRED).unwrap(), m);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::from_major(10, Currency::USD);
        let eur = Money::from_major(10, Currency::EUR);
        assert_eq!(
            usd.try_add(&eur),
            Err(DiscountError::CurrencyMismatch {
                expected: "USD".to_string(),
                got: "EUR".to_string(),
            })
        );
    }

    #[test]
    fn test_money_overflow() {
        let max = Money::new(Decimal::MAX, Currency::USD);
        let one = Money::from_major(1, Currency::USD);
        assert_eq!(max.try_add(&one), Err(DiscountError::Overflow));
        assert_eq!(max.percentage(Decimal::from(200)), Err(DiscountError::Overflow));
    }

    #[test]
    fn test_money_sum() {
        let items = [
            Money::from_major(1, Currency::USD),
            Money::from_minor(250, Currency::USD),
        ];
        let total = Money::try_sum(items, Currency::USD).unwrap();
        assert_eq!(total.amount, Decimal::new(350, 2));

        let empty = Money::try_sum(std::iter::empty(), Currency::EUR).unwrap();
        assert!(empty.is_zero());
        assert_eq!(empty.currency, Currency::EUR);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
