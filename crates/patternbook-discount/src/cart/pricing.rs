//! Cart pricing breakdown.

use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of product prices before discounts.
    pub subtotal: Money,
    /// Amount taken off by the active discount.
    pub discount_total: Money,
    /// Final total (subtotal - discount). May be negative.
    pub grand_total: Money,
    /// Promo code that activated the discount, if any.
    pub applied_code: Option<String>,
    /// Number of products in the cart.
    pub item_count: usize,
}

impl CartPricing {
    /// Calculate the savings from discounts.
    pub fn savings(&self) -> Money {
        self.discount_total
    }

    /// Check if a discount reduced the total.
    pub fn has_discount(&self) -> bool {
        self.discount_total.amount > Decimal::ZERO
    }

    /// Get discount percentage of subtotal.
    ///
    /// `None` when the subtotal is zero.
    pub fn discount_percentage(&self) -> Option<Decimal> {
        self.discount_total
            .amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(self.subtotal.amount))
    }
}
