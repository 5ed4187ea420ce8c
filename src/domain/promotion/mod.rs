// ============================================================================
// Promotion Domain
// ============================================================================
//
// Time-bounded promotional events. An event carries a percentage discount
// that only applies while a reference instant lies inside its window.
//
// ============================================================================

pub mod errors;
pub mod entity;

pub use errors::*;
pub use entity::*;
