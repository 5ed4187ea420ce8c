use serde::{Deserialize, Serialize};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// A requested order line: which product and how many.
///
/// The quantity is left unvalidated here; it is checked when the line is
/// priced into a [`LineItem`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i32,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, quantity: i32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A priced order line. The unit price is a snapshot of the product price
/// taken when the line was built.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    product_id: String,
    quantity: i32,
    unit_price: f64,
}

impl LineItem {
    pub fn new(product_id: impl Into<String>, quantity: i32, unit_price: f64) -> Result<Self, OrderError> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        // NaN fails the comparison and is rejected along with negatives
        if !(unit_price >= 0.0) || unit_price.is_infinite() {
            return Err(OrderError::InvalidUnitPrice(unit_price));
        }

        Ok(Self {
            product_id: product_id.into(),
            quantity,
            unit_price,
        })
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
