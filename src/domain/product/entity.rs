use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;

/// A catalog product. `price` is the current catalog price and is copied
/// into the order line when the product is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, id: Option<String>) -> Result<Self, ProductError> {
        if !(price >= 0.0) || !price.is_finite() {
            return Err(ProductError::InvalidPrice(price));
        }

        Ok(Self {
            id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: name.into(),
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("Laptop", 1000.0, Some("product-1".to_string())).unwrap();

        assert_eq!(product.id, "product-1");
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price, 1000.0);
    }

    #[test]
    fn test_free_product_allowed() {
        let product = Product::new("Sticker", 0.0, None).unwrap();
        assert_eq!(product.price, 0.0);
        assert!(Uuid::parse_str(&product.id).is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Product::new("Broken", -1.0, None);
        assert!(matches!(result, Err(ProductError::InvalidPrice(p)) if p == -1.0));
    }

    #[test]
    fn test_nan_price_rejected() {
        assert!(Product::new("Broken", f64::NAN, None).is_err());
    }
}
