//! Shopping cart module.
//!
//! Contains the cart and its pricing breakdown.

mod cart;
mod pricing;

pub use cart::Cart;
pub use pricing::CartPricing;
