//! Shopping cart discount engine.
//!
//! Discounts are strategies: a promo code resolves to a [`DiscountStrategy`]
//! that maps a cart total to a discounted total. A cart carries at most one
//! active strategy and swaps it whenever a known code is applied.
//!
//! - **Money**: exact decimal amounts with currency
//! - **Strategies**: flat and percentage discounts
//! - **Promo registry**: code to strategy lookup
//! - **Cart**: products, active discount, totals
//!
//! # Example
//!
//! ```rust
//! use patternbook_discount::prelude::*;
//!
//! let mut registry = PromoRegistry::new();
//! registry.add_promo_code(PromoCode::new("SAVE10", DiscountStrategy::percentage(10)));
//!
//! let mut cart = Cart::new(&registry);
//! cart.add_product(Product::new("Product 1", Money::from_major(200, Currency::USD)))?;
//! cart.add_product(Product::new("Product 2", Money::from_major(300, Currency::USD)))?;
//! cart.apply_promo_code("SAVE10");
//!
//! assert_eq!(cart.get_total()?, Money::from_major(450, Currency::USD));
//! # Ok::<(), DiscountError>(())
//! ```

pub mod error;
pub mod money;
pub mod product;
pub mod promo;
pub mod strategy;

pub mod cart;

pub use error::{DiscountError, Result};
pub use money::{Currency, Money};
pub use rust_decimal::Decimal;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartPricing};
    pub use crate::error::DiscountError;
    pub use crate::money::{Currency, Money};
    pub use crate::product::Product;
    pub use crate::promo::{PromoCode, PromoRegistry};
    pub use crate::strategy::DiscountStrategy;
    pub use rust_decimal::Decimal;
}
