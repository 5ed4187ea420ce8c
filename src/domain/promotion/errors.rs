use chrono::{DateTime, Utc};

// ============================================================================
// Promotional Event Invariant Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PromotionError {
    #[error("Discount percentage must be between 0 and 100, got {0}")]
    InvalidDiscountPercent(i64),

    #[error("End date {end} must not be before start date {start}")]
    InvalidEventDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
