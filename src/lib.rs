//! Order pricing: builds an order from customer and product lookups, then
//! folds a sequence of named discount policies over its subtotal and reports
//! each step.

pub mod config;
pub mod domain;
pub mod lookup;
pub mod metrics;
pub mod pricing;

pub use pricing::{PolicyRegistry, PricingError, PricingPipeline, PricingResult};
