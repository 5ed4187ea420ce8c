use crate::domain::order::OrderError;
use crate::lookup::LookupError;

// ============================================================================
// Pricing Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Strategy with code \"{0}\" not found")]
    PolicyNotFound(String),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Lookup failed: {0}")]
    LookupFailed(LookupError),
}

/// Coarse classification for callers that translate errors into transport
/// responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Unavailable,
}

impl PricingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CustomerNotFound(_) | Self::ProductNotFound(_) => ErrorKind::NotFound,
            // Unknown strategy codes are a malformed request, not a missing resource
            Self::PolicyNotFound(_) => ErrorKind::InvalidInput,
            Self::Order(_) => ErrorKind::InvalidInput,
            Self::LookupFailed(_) => ErrorKind::Unavailable,
        }
    }

    /// Stable snake_case label, used for metrics and log fields
    pub fn label(&self) -> &'static str {
        match self {
            Self::CustomerNotFound(_) => "customer_not_found",
            Self::ProductNotFound(_) => "product_not_found",
            Self::PolicyNotFound(_) => "policy_not_found",
            Self::Order(OrderError::EmptyOrder) => "empty_order",
            Self::Order(OrderError::InvalidQuantity(_)) => "invalid_quantity",
            Self::Order(OrderError::InvalidUnitPrice(_)) => "invalid_unit_price",
            Self::LookupFailed(_) => "lookup_failed",
        }
    }
}
