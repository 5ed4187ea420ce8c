// ============================================================================
// Lookup Contracts - read access to externally owned entities
// ============================================================================
//
// The pricing core never stores customers, products or promotional events.
// It reads them by identifier through these traits. Implementations must be
// safe to call from several threads at once; the core adds no locking.
//
// ============================================================================

mod in_memory;

pub use in_memory::InMemoryCatalog;

use crate::domain::customer::Customer;
use crate::domain::product::Product;
use crate::domain::promotion::PromotionalEvent;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("{entity} store unavailable: {reason}")]
    Unavailable { entity: &'static str, reason: String },
}

impl LookupError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound { entity, key: key.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub trait CustomerLookup: Send + Sync {
    fn find_by_id(&self, id: &str) -> Result<Customer, LookupError>;
}

pub trait ProductLookup: Send + Sync {
    fn find_by_id(&self, id: &str) -> Result<Product, LookupError>;
}

pub trait PromotionalEventLookup: Send + Sync {
    fn find_by_code(&self, code: &str) -> Result<PromotionalEvent, LookupError>;
}
