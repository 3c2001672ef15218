//! Discount strategies.
//!
//! A strategy is a pure function from a cart total to a discounted total.
//! The set of strategies is closed, so dispatch is a `match` rather than a
//! trait object.

use crate::error::Result;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a promo code reduces a cart total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountStrategy {
    /// Subtract a fixed amount. The result is not floored at zero.
    Flat { amount: Money },
    /// Subtract `percent`% of the total.
    Percentage { percent: Decimal },
}

impl DiscountStrategy {
    /// Create a flat discount.
    pub fn flat(amount: Money) -> Self {
        DiscountStrategy::Flat { amount }
    }

    /// Create a percentage discount (10 means 10%).
    pub fn percentage(percent: impl Into<Decimal>) -> Self {
        DiscountStrategy::Percentage {
            percent: percent.into(),
        }
    }

    /// Currency this strategy is tied to. Percentages work in any currency.
    pub fn currency(&self) -> Option<Currency> {
        match self {
            DiscountStrategy::Flat { amount } => Some(amount.currency),
            DiscountStrategy::Percentage { .. } => None,
        }
    }

    /// Apply the discount to `total`, returning the discounted total.
    pub fn apply(&self, total: &Money) -> Result<Money> {
        match self {
            DiscountStrategy::Flat { amount } => total.try_subtract(amount),
            DiscountStrategy::Percentage { percent } => {
                total.try_subtract(&total.percentage(*percent)?)
            }
        }
    }

    /// The amount taken off `total` by this strategy.
    pub fn discount_amount(&self, total: &Money) -> Result<Money> {
        let discounted = self.apply(total)?;
        total.try_subtract(&discounted)
    }

    /// Short human-readable label, e.g. "$30.00 off" or "10% off".
    pub fn describe(&self) -> String {
        match self {
            DiscountStrategy::Flat { amount } => format!("{} off", amount.display()),
            DiscountStrategy::Percentage { percent } => format!("{}% off", percent.normalize()),
        }
    }
}
