// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Order cannot be empty")]
    EmptyOrder,

    #[error("Quantity must be greater than 0, got {0}")]
    InvalidQuantity(i32),

    #[error("Unit price cannot be negative, got {0}")]
    InvalidUnitPrice(f64),
}
