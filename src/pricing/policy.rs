use chrono::{DateTime, Utc};

use crate::domain::promotion::PromotionalEvent;

// ============================================================================
// Discount Policies
// ============================================================================
//
// A policy maps an amount to a discounted amount and reports what it did.
// Policies hold no mutable state; applying one twice to the same amount
// gives the same result.
//
// ============================================================================

pub const VIP_DISCOUNT_PERCENT: u8 = 15;
pub const STUDENT_DISCOUNT_PERCENT: u8 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum DiscountPolicy {
    /// Leaves the amount unchanged
    Standard,

    /// Fixed percentage under a fixed display name
    FlatPercent { name: &'static str, percent: u8 },

    /// Event discount, applied only while `at` lies in the event window
    TimeGated {
        event: PromotionalEvent,
        at: DateTime<Utc>,
    },
}

impl DiscountPolicy {
    pub fn vip() -> Self {
        Self::FlatPercent {
            name: "VIP",
            percent: VIP_DISCOUNT_PERCENT,
        }
    }

    pub fn student() -> Self {
        Self::FlatPercent {
            name: "Student",
            percent: STUDENT_DISCOUNT_PERCENT,
        }
    }

    pub fn time_gated(event: PromotionalEvent, at: DateTime<Utc>) -> Self {
        Self::TimeGated { event, at }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Standard => "Standard",
            Self::FlatPercent { name, .. } => *name,
            Self::TimeGated { event, .. } => event.name(),
        }
    }

    /// Percentage actually taken off by [`apply`](Self::apply).
    ///
    /// An inactive event reports 0 whatever its nominal percentage.
    pub fn discount_percent(&self) -> u8 {
        match self {
            Self::Standard => 0,
            Self::FlatPercent { percent, .. } => *percent,
            Self::TimeGated { event, at } => {
                if event.is_active(*at) {
                    event.discount_percent()
                } else {
                    0
                }
            }
        }
    }

    pub fn apply(&self, amount: f64) -> f64 {
        match self {
            Self::Standard => amount,
            Self::FlatPercent { percent, .. } => discount(amount, *percent),
            Self::TimeGated { event, at } => {
                if event.is_active(*at) {
                    discount(amount, event.discount_percent())
                } else {
                    amount
                }
            }
        }
    }
}

fn discount(amount: f64, percent: u8) -> f64 {
    amount * (1.0 - f64::from(percent) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event_around(now: DateTime<Utc>, start_offset_days: i64, end_offset_days: i64) -> PromotionalEvent {
        PromotionalEvent::new(
            "Black Friday",
            "BF2025",
            20,
            now + Duration::days(start_offset_days),
            now + Duration::days(end_offset_days),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_standard_policy() {
        let policy = DiscountPolicy::Standard;

        assert_eq!(policy.apply(100.0), 100.0);
        assert_eq!(policy.apply(0.0), 0.0);
        assert_eq!(policy.name(), "Standard");
        assert_eq!(policy.discount_percent(), 0);
    }

    #[test]
    fn test_vip_policy() {
        let policy = DiscountPolicy::vip();

        assert_eq!(policy.apply(100.0), 85.0);
        assert_eq!(policy.apply(1000.0), 850.0);
        assert_eq!(policy.name(), "VIP");
        assert_eq!(policy.discount_percent(), 15);
    }

    #[test]
    fn test_student_policy() {
        let policy = DiscountPolicy::student();

        assert_eq!(policy.apply(100.0), 90.0);
        assert_eq!(policy.apply(500.0), 450.0);
        assert_eq!(policy.name(), "Student");
        assert_eq!(policy.discount_percent(), 10);
    }

    #[test]
    fn test_zero_amount_stays_zero() {
        assert_eq!(DiscountPolicy::vip().apply(0.0), 0.0);
        assert_eq!(DiscountPolicy::student().apply(0.0), 0.0);
    }

    #[test]
    fn test_event_applies_when_active() {
        let now = Utc::now();
        let policy = DiscountPolicy::time_gated(event_around(now, -1, 1), now);

        assert_eq!(policy.apply(100.0), 80.0);
        assert_eq!(policy.discount_percent(), 20);
    }

    #[test]
    fn test_event_not_started() {
        let now = Utc::now();
        let policy = DiscountPolicy::time_gated(event_around(now, 1, 2), now);

        assert_eq!(policy.apply(100.0), 100.0);
        assert_eq!(policy.discount_percent(), 0);
    }

    #[test]
    fn test_event_ended() {
        let now = Utc::now();
        let policy = DiscountPolicy::time_gated(event_around(now, -2, -1), now);

        assert_eq!(policy.apply(100.0), 100.0);
        assert_eq!(policy.discount_percent(), 0);
    }

    #[test]
    fn test_event_window_edges_are_active() {
        let now = Utc::now();
        let event = event_around(now, -1, 1);

        let at_start = DiscountPolicy::time_gated(event.clone(), event.start());
        let at_end = DiscountPolicy::time_gated(event.clone(), event.end());

        assert_eq!(at_start.apply(100.0), 80.0);
        assert_eq!(at_end.apply(100.0), 80.0);
    }

    #[test]
    fn test_event_name_reported_even_when_inactive() {
        let now = Utc::now();
        let policy = DiscountPolicy::time_gated(event_around(now, 5, 6), now);

        assert_eq!(policy.name(), "Black Friday");
    }
}
