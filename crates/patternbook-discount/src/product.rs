//! Products placed in a cart.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable product. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_accessors() {
        let product = Product::new("Product 1", Money::from_major(100, Currency::USD));
        assert_eq!(product.name(), "Product 1");
        assert_eq!(product.price(), Money::from_minor(10000, Currency::USD));
    }

    #[test]
    fn test_product_serde_shape() {
        let product = Product::new("Mug", Money::from_minor(1250, Currency::EUR));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["name"], "Mug");
        assert_eq!(json["price"]["amount"], "12.50");
        assert_eq!(json["price"]["currency"], "EUR");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
