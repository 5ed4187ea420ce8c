// ============================================================================
// Product Invariant Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("Product price cannot be negative: {0}")]
    InvalidPrice(f64),
}
