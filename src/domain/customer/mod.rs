// ============================================================================
// Customer Domain
// ============================================================================
//
// - Value objects (CustomerType, Email)
// - Entity (Customer)
//
// ============================================================================

pub mod value_objects;
pub mod entity;

// Re-export for convenience
pub use value_objects::*;
pub use entity::*;
