// ============================================================================
// Order Domain - Order Aggregate used for pricing
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderItem request lines, priced LineItem)
// - Errors (OrderError enum)
// - Aggregate (Order with subtotal computation)
//
// An order lives only for the duration of one pricing request.
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
