//! Shopping cart with a swappable discount strategy.

use crate::cart::CartPricing;
use crate::error::{DiscountError, Result};
use crate::money::{Currency, Money};
use crate::product::Product;
use crate::promo::PromoRegistry;
use crate::strategy::DiscountStrategy;
use tracing::{debug, warn};

/// A shopping cart bound to a promo registry.
///
/// Holds products in insertion order and at most one active discount.
/// Every product price and flat discount must share the cart currency.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    registry: &'a PromoRegistry,
    products: Vec<Product>,
    discount: Option<DiscountStrategy>,
    applied_code: Option<String>,
    currency: Option<Currency>,
    pinned: bool,
}

impl<'a> Cart<'a> {
    /// Create an empty cart that resolves promo codes against `registry`.
    ///
    /// The cart currency is taken from the first product or flat discount
    /// added, and released again once the cart holds neither.
    pub fn new(registry: &'a PromoRegistry) -> Self {
        Self {
            registry,
            products: Vec::new(),
            discount: None,
            applied_code: None,
            currency: None,
            pinned: false,
        }
    }

    /// Fix the cart currency up front. A pinned currency survives [`Cart::clear`].
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self.pinned = true;
        self
    }

    /// Cart currency. Defaults to USD while the cart is empty and unpinned.
    pub fn currency(&self) -> Currency {
        self.currency.unwrap_or_default()
    }

    /// Add a product to the cart.
    ///
    /// Returns an error if the product is priced in a different currency
    /// than the cart.
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        self.adopt_currency(product.price().currency)?;

        debug!(product = %product.name(), price = %product.price(), "adding product to cart");
        self.products.push(product);
        Ok(())
    }

    /// Remove the first product with the given name.
    pub fn remove_product(&mut self, name: &str) -> bool {
        match self.products.iter().position(|p| p.name() == name) {
            Some(index) => {
                self.products.remove(index);
                self.release_inferred_currency();
                true
            }
            None => false,
        }
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the cart.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the cart holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Remove all products and the active discount.
    ///
    /// An inferred currency is forgotten; one set with
    /// [`Cart::with_currency`] is kept.
    pub fn clear(&mut self) {
        self.products.clear();
        self.clear_discount();
    }

    /// Apply a promo code.
    ///
    /// If the code is registered its strategy replaces the active discount
    /// and `true` is returned. An unknown code, or a flat discount in another
    /// currency, leaves the cart untouched and returns `false`; use
    /// [`Cart::try_apply_promo_code`] to get the error instead.
    pub fn apply_promo_code(&mut self, code: &str) -> bool {
        match self.try_apply_promo_code(code) {
            Ok(()) => true,
            Err(e) => {
                warn!(code, error = %e, "ignoring promo code");
                false
            }
        }
    }

    /// Apply a promo code, failing on unknown codes and currency mismatches.
    pub fn try_apply_promo_code(&mut self, code: &str) -> Result<()> {
        let strategy = *self
            .registry
            .get_strategy(code)
            .ok_or_else(|| DiscountError::UnknownPromoCode(code.to_string()))?;

        self.install_discount(strategy)?;
        debug!(code, discount = %strategy.describe(), "applied promo code");
        self.applied_code = Some(code.to_string());
        Ok(())
    }

    /// Set a discount directly, bypassing the registry.
    ///
    /// Fails without touching the cart if a flat amount is in another currency.
    pub fn set_discount(&mut self, strategy: DiscountStrategy) -> Result<()> {
        self.install_discount(strategy)?;
        self.applied_code = None;
        Ok(())
    }

    /// Drop the active discount.
    pub fn clear_discount(&mut self) {
        self.discount = None;
        self.applied_code = None;
        self.release_inferred_currency();
    }

    /// The active discount, if any.
    pub fn active_discount(&self) -> Option<&DiscountStrategy> {
        self.discount.as_ref()
    }

    /// Promo code behind the active discount, if it came from the registry.
    pub fn applied_code(&self) -> Option<&str> {
        self.applied_code.as_deref()
    }

    /// Sum of product prices.
    pub fn subtotal(&self) -> Result<Money> {
        Money::try_sum(self.products.iter().map(Product::price), self.currency())
    }

    /// Subtotal with the active discount applied once, if any.
    pub fn get_total(&self) -> Result<Money> {
        let subtotal = self.subtotal()?;
        match &self.discount {
            Some(strategy) => strategy.apply(&subtotal),
            None => Ok(subtotal),
        }
    }

    /// Calculate the full pricing breakdown.
    pub fn pricing(&self) -> Result<CartPricing> {
        let subtotal = self.subtotal()?;
        let grand_total = self.get_total()?;
        let discount_total = subtotal.try_subtract(&grand_total)?;

        Ok(CartPricing {
            subtotal,
            discount_total,
            grand_total,
            applied_code: self.applied_code.clone(),
            item_count: self.products.len(),
        })
    }

    fn install_discount(&mut self, strategy: DiscountStrategy) -> Result<()> {
        if let Some(currency) = strategy.currency() {
            self.adopt_currency(currency)?;
        }
        self.discount = Some(strategy);
        self.release_inferred_currency();
        Ok(())
    }

    /// Check `currency` against the cart, inferring it if none is set yet.
    fn adopt_currency(&mut self, currency: Currency) -> Result<()> {
        match self.currency {
            Some(current) if current != currency => {
                Err(DiscountError::currency_mismatch(current, currency))
            }
            Some(_) => Ok(()),
            None => {
                self.currency = Some(currency);
                Ok(())
            }
        }
    }

    fn release_inferred_currency(&mut self) {
        let discount_currency = self.discount.as_ref().and_then(DiscountStrategy::currency);
        if !self.pinned && self.products.is_empty() && discount_currency.is_none() {
            self.currency = None;
        }
    }
}
