//! Discount engine error types.

use thiserror::Error;

/// Errors that can occur while pricing a cart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscountError {
    /// No promo code is registered under this key.
    #[error("Unknown promo code: {0}")]
    UnknownPromoCode(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl DiscountError {
    pub(crate) fn currency_mismatch(expected: impl ToString, got: impl ToString) -> Self {
        DiscountError::CurrencyMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }
}

/// Result alias for discount engine operations.
pub type Result<T> = std::result::Result<T, DiscountError>;
