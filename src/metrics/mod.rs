// Private module declaration
mod server;

use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Pricing requests (outcome, latency)
// - Failures by error kind
// - Strategies applied, by policy name
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub pricing_requests: IntCounterVec,
    pub pricing_failures: IntCounterVec,
    pub pricing_duration: Histogram,
    pub strategies_applied: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let pricing_requests = IntCounterVec::new(
            Opts::new("pricing_requests_total", "Total pricing requests"),
            &["outcome"],
        )?;
        registry.register(Box::new(pricing_requests.clone()))?;

        let pricing_failures = IntCounterVec::new(
            Opts::new("pricing_failures_total", "Pricing requests that failed, by error kind"),
            &["kind"],
        )?;
        registry.register(Box::new(pricing_failures.clone()))?;

        let pricing_duration = Histogram::with_opts(
            HistogramOpts::new("pricing_duration_seconds", "Pricing request duration")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
        )?;
        registry.register(Box::new(pricing_duration.clone()))?;

        let strategies_applied = IntCounterVec::new(
            Opts::new("pricing_strategies_applied_total", "Discount policies applied"),
            &["strategy"],
        )?;
        registry.register(Box::new(strategies_applied.clone()))?;

        Ok(Self {
            registry,
            pricing_requests,
            pricing_failures,
            pricing_duration,
            strategies_applied,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record a finished request; `failure` carries the error label
    pub fn record_request(&self, duration_secs: f64, failure: Option<&str>) {
        match failure {
            None => self.pricing_requests.with_label_values(&["success"]).inc(),
            Some(kind) => {
                self.pricing_requests.with_label_values(&["failure"]).inc();
                self.pricing_failures.with_label_values(&[kind]).inc();
            }
        }
        self.pricing_duration.observe(duration_secs);
    }

    pub fn record_strategy(&self, name: &str) {
        self.strategies_applied.with_label_values(&[name]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        let gathered = metrics.registry.gather();
        assert!(gathered.iter().any(|m| m.name() == "pricing_duration_seconds"));
    }

    #[test]
    fn test_record_success() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request(0.002, None);

        let gathered = metrics.registry.gather();
        let requests = gathered.iter().find(|m| m.name() == "pricing_requests_total").unwrap();
        assert_eq!(requests.metric[0].counter.value, Some(1.0));
    }

    #[test]
    fn test_record_failure() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request(0.001, Some("empty_order"));
        metrics.record_request(0.001, Some("empty_order"));

        let gathered = metrics.registry.gather();
        let failures = gathered.iter().find(|m| m.name() == "pricing_failures_total").unwrap();
        assert_eq!(failures.metric[0].counter.value, Some(2.0));
    }

    #[test]
    fn test_record_strategy() {
        let metrics = Metrics::new().unwrap();
        metrics.record_strategy("VIP");
        metrics.record_strategy("Student");
        metrics.record_strategy("VIP");

        let gathered = metrics.registry.gather();
        let applied = gathered.iter().find(|m| m.name() == "pricing_strategies_applied_total").unwrap();
        assert_eq!(applied.metric.len(), 2);
    }
}
