use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::lookup::{LookupError, PromotionalEventLookup};
use super::errors::PricingError;
use super::policy::DiscountPolicy;

pub const STANDARD_CODE: &str = "standard";
pub const VIP_CODE: &str = "vip";
pub const STUDENT_CODE: &str = "student";

/// Resolves strategy codes to discount policies.
///
/// The fixed codes map to built-in policies; any other code is looked up as
/// a promotional event and gated on the registry's reference instant, which
/// is fixed when the registry is built.
#[derive(Clone)]
pub struct PolicyRegistry {
    events: Arc<dyn PromotionalEventLookup>,
    reference_time: DateTime<Utc>,
}

impl PolicyRegistry {
    /// Registry gated on the wall clock at construction time
    pub fn new(events: Arc<dyn PromotionalEventLookup>) -> Self {
        Self::with_reference_time(events, Utc::now())
    }

    pub fn with_reference_time(events: Arc<dyn PromotionalEventLookup>, reference_time: DateTime<Utc>) -> Self {
        Self { events, reference_time }
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time
    }

    pub fn resolve(&self, code: &str) -> Result<DiscountPolicy, PricingError> {
        match code {
            STANDARD_CODE => Ok(DiscountPolicy::Standard),
            VIP_CODE => Ok(DiscountPolicy::vip()),
            STUDENT_CODE => Ok(DiscountPolicy::student()),
            _ => self.resolve_event(code),
        }
    }

    fn resolve_event(&self, code: &str) -> Result<DiscountPolicy, PricingError> {
        let event = match self.events.find_by_code(code) {
            Ok(event) => event,
            Err(LookupError::NotFound { .. }) => {
                tracing::debug!(code, "No promotional event for strategy code");
                return Err(PricingError::PolicyNotFound(code.to_string()));
            }
            Err(e) => return Err(PricingError::LookupFailed(e)),
        };

        let active = event.is_active(self.reference_time);
        tracing::debug!(
            code,
            event = event.name(),
            active,
            reference_time = %self.reference_time,
            "Resolved promotional event"
        );

        Ok(DiscountPolicy::time_gated(event, self.reference_time))
    }
}

impl fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("reference_time", &self.reference_time)
            .finish_non_exhaustive()
    }
}
