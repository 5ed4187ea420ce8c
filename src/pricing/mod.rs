// ============================================================================
// Pricing - discount policies and the pricing pipeline
// ============================================================================
//
// - policy/   - DiscountPolicy variants (standard, flat percent, time-gated)
// - registry/ - strategy code → policy resolution
// - pipeline/ - customer + items + codes → PricingResult
// - dto/      - request/response shapes for an outer transport layer
// - errors/   - PricingError and its classification
//
// ============================================================================

pub mod policy;
pub mod registry;
pub mod pipeline;
pub mod dto;
pub mod errors;

pub use policy::DiscountPolicy;
pub use registry::PolicyRegistry;
pub use pipeline::PricingPipeline;
pub use dto::{round_money, AppliedStrategy, PriceOrderRequest, PricingResult};
pub use errors::{ErrorKind, PricingError};
