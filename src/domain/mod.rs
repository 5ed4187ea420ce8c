// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each entity has its own subdirectory with:
// - Value objects
// - Errors
// - Entity / aggregate implementation
//
// Customers, products and promotional events are owned by external stores
// and only read here. The order aggregate is built per pricing request and
// never persisted.
//
// ============================================================================

pub mod customer;
pub mod order;
pub mod product;
pub mod promotion;
