use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::PromotionError;

/// A promotional event with a discount window.
///
/// Fields are private so that every instance has passed the percent and
/// date-range checks in [`PromotionalEvent::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionalEvent {
    id: String,
    name: String,
    code: String,
    discount_percent: u8,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl PromotionalEvent {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        discount_percent: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        id: Option<String>,
    ) -> Result<Self, PromotionError> {
        if !(0..=100).contains(&discount_percent) {
            return Err(PromotionError::InvalidDiscountPercent(discount_percent));
        }

        if end < start {
            return Err(PromotionError::InvalidEventDateRange { start, end });
        }

        Ok(Self {
            id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: name.into(),
            code: code.into(),
            discount_percent: discount_percent as u8,
            start,
            end,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Inclusive on both ends
    pub fn is_active(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at <= self.end
    }
}
