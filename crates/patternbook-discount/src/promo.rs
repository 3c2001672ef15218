//! Promo codes and the registry that resolves them.

use crate::strategy::DiscountStrategy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A promotional code paired with the discount it unlocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    code: String,
    strategy: DiscountStrategy,
}

impl PromoCode {
    /// Create a new promo code.
    pub fn new(code: impl Into<String>, strategy: DiscountStrategy) -> Self {
        Self {
            code: code.into(),
            strategy,
        }
    }

    /// The code customers type, e.g. "SAVE10".
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The discount this code unlocks.
    pub fn strategy(&self) -> &DiscountStrategy {
        &self.strategy
    }
}

/// Keyed store of promo codes.
///
/// Codes are matched exactly; "save10" and "SAVE10" are different keys.
#[derive(Debug, Clone, Default)]
pub struct PromoRegistry {
    codes: HashMap<String, PromoCode>,
}

impl PromoRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from promo codes, e.g. ones deserialized from
    /// application configuration. Later duplicates overwrite earlier ones.
    pub fn from_codes(codes: impl IntoIterator<Item = PromoCode>) -> Self {
        let mut registry = Self::new();
        for promo in codes {
            registry.add_promo_code(promo);
        }
        registry
    }

    /// Register a promo code, replacing any existing entry for the same code.
    ///
    /// Returns the replaced entry, if there was one.
    pub fn add_promo_code(&mut self, promo: PromoCode) -> Option<PromoCode> {
        debug!(code = %promo.code, discount = %promo.strategy.describe(), "registering promo code");
        self.codes.insert(promo.code.clone(), promo)
    }

    /// Look up the strategy for `code`.
    pub fn get_strategy(&self, code: &str) -> Option<&DiscountStrategy> {
        self.codes.get(code).map(PromoCode::strategy)
    }

    /// Look up the full promo code entry.
    pub fn get(&self, code: &str) -> Option<&PromoCode> {
        self.codes.get(code)
    }

    /// Check if `code` is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains_key(code)
    }

    /// Remove a promo code. Carts that already applied it keep their discount.
    pub fn remove(&mut self, code: &str) -> Option<PromoCode> {
        self.codes.remove(code)
    }

    /// Number of registered promo codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if no promo codes are registered.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate registered promo codes in arbitrary order.
    pub fn codes(&self) -> impl Iterator<Item = &PromoCode> {
        self.codes.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_add_and_get_strategy() {
        let mut registry = PromoRegistry::new();
        registry.add_promo_code(PromoCode::new("SAVE10", DiscountStrategy::percentage(10)));

        assert_eq!(
            registry.get_strategy("SAVE10"),
            Some(&DiscountStrategy::percentage(10))
        );
        assert!(registry.contains("SAVE10"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_code_is_none() {
        let registry = PromoRegistry::new();
        assert!(registry.get_strategy("INVALID").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let mut registry = PromoRegistry::new();
        registry.add_promo_code(PromoCode::new("SAVE10", DiscountStrategy::percentage(10)));
        assert!(registry.get_strategy("save10").is_none());
    }

    #[test]
    fn test_add_overwrites_existing_code() {
        let mut registry = PromoRegistry::new();
        registry.add_promo_code(PromoCode::new("DEAL", DiscountStrategy::percentage(5)));
        let replaced = registry.add_promo_code(PromoCode::new(
            "DEAL",
            DiscountStrategy::flat(Money::from_major(20, Currency::USD)),
        ));

        assert_eq!(
            replaced.map(|p| *p.strategy()),
            Some(DiscountStrategy::percentage(5))
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get_strategy("DEAL"),
            Some(&DiscountStrategy::flat(Money::from_major(20, Currency::USD)))
        );
    }

    #[test]
    fn test_remove() {
        let mut registry = PromoRegistry::new();
        registry.add_promo_code(PromoCode::new("SAVE10", DiscountStrategy::percentage(10)));

        assert!(registry.remove("SAVE10").is_some());
        assert!(registry.remove("SAVE10").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_from_deserialized_codes() {
        let codes: Vec<PromoCode> = serde_json::from_str(
            r#"[
                {"code": "FLAT30", "strategy": {"kind": "flat", "amount": {"amount": "30.00", "currency": "USD"}}},
                {"code": "SAVE10", "strategy": {"kind": "percentage", "percent": "10"}}
            ]"#,
        )
        .unwrap();

        let registry = PromoRegistry::from_codes(codes);
        let mut keys: Vec<&str> = registry.codes().map(PromoCode::code).collect();
        keys.sort();
        assert_eq!(keys, vec!["FLAT30", "SAVE10"]);
    }
}
