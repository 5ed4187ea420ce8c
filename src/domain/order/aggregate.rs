use serde::Serialize;
use uuid::Uuid;

use crate::domain::customer::Customer;
use crate::domain::product::Product;
use super::value_objects::LineItem;
use super::errors::OrderError;

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    // Identity
    id: String,

    // References resolved through external lookups
    customer_id: String,

    // Insertion order is preserved
    items: Vec<LineItem>,
}

impl Order {
    /// Start an empty order for `customer`
    pub fn new(customer: &Customer) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            customer_id: customer.id.clone(),
            items: Vec::new(),
        }
    }

    /// Append a line for `product`, pricing it at `unit_price`
    pub fn add_item(&mut self, product: &Product, quantity: i32, unit_price: f64) -> Result<(), OrderError> {
        let line = LineItem::new(product.id.clone(), quantity, unit_price)?;
        self.items.push(line);
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fails with [`OrderError::EmptyOrder`] when no line was added
    pub fn ensure_not_empty(&self) -> Result<(), OrderError> {
        if self.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerType;

    fn customer() -> Customer {
        Customer::new("john@example.com", CustomerType::Standard, 0.0, Some("customer-1".to_string()))
    }

    fn product(id: &str, price: f64) -> Product {
        Product::new(id, price, Some(id.to_string())).unwrap()
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new(&customer());

        assert!(order.is_empty());
        assert_eq!(order.subtotal(), 0.0);
        assert_eq!(order.customer_id(), "customer-1");
        assert!(matches!(order.ensure_not_empty(), Err(OrderError::EmptyOrder)));
    }

    #[test]
    fn test_subtotal_multiple_items() {
        let mut order = Order::new(&customer());
        order.add_item(&product("laptop", 1000.0), 2, 1000.0).unwrap();
        order.add_item(&product("mouse", 50.0), 1, 50.0).unwrap();

        assert!(!order.is_empty());
        assert_eq!(order.subtotal(), 2050.0);
        assert!(order.ensure_not_empty().is_ok());
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut order = Order::new(&customer());
        order.add_item(&product("b", 2.0), 1, 2.0).unwrap();
        order.add_item(&product("a", 1.0), 1, 1.0).unwrap();
        order.add_item(&product("b", 2.0), 3, 2.0).unwrap();

        let ids: Vec<&str> = order.items().iter().map(LineItem::product_id).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_invalid_item_not_appended() {
        let mut order = Order::new(&customer());

        let result = order.add_item(&product("laptop", 1000.0), 0, 1000.0);
        assert!(matches!(result, Err(OrderError::InvalidQuantity(0))));

        let result = order.add_item(&product("laptop", 1000.0), 1, -5.0);
        assert!(matches!(result, Err(OrderError::InvalidUnitPrice(_))));

        assert!(order.is_empty());
    }

    #[test]
    fn test_unit_price_is_independent_of_product_price() {
        let mut order = Order::new(&customer());
        order.add_item(&product("laptop", 1000.0), 1, 900.0).unwrap();

        assert_eq!(order.subtotal(), 900.0);
    }
}
