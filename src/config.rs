use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

// ============================================================================
// Application Configuration
// ============================================================================
//
// Read once from environment variables at startup:
// - RUST_LOG               - tracing filter
// - PRICING_REFERENCE_TIME - RFC 3339 instant pinning promotional gating
// - PRICING_METRICS_PORT   - serve /metrics on this port after the run
// - PRICING_REQUEST_FILE   - JSON pricing request to evaluate
//
// ============================================================================

pub const DEFAULT_LOG_FILTER: &str = "info,order_pricing=debug";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    pub reference_time: Option<DateTime<Utc>>,
    pub metrics_port: Option<u16>,
    pub request_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            reference_time: None,
            metrics_port: None,
            request_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let log_filter = get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let reference_time = get("PRICING_REFERENCE_TIME")
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .map(|t| t.with_timezone(&Utc))
                    .with_context(|| format!("PRICING_REFERENCE_TIME is not RFC 3339: {}", raw))
            })
            .transpose()?;

        let metrics_port = get("PRICING_METRICS_PORT")
            .map(|raw| {
                raw.trim()
                    .parse::<u16>()
                    .with_context(|| format!("PRICING_METRICS_PORT is not a port number: {}", raw))
            })
            .transpose()?;

        let request_file = get("PRICING_REQUEST_FILE").map(PathBuf::from);

        Ok(Self {
            log_filter,
            reference_time,
            metrics_port,
            request_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter, "info,order_pricing=debug");
    }

    #[test]
    fn test_all_values() {
        let config = config_from(&[
            ("RUST_LOG", "warn"),
            ("PRICING_REFERENCE_TIME", "2024-11-25T10:00:00+01:00"),
            ("PRICING_METRICS_PORT", "9090"),
            ("PRICING_REQUEST_FILE", "request.json"),
        ])
        .unwrap();

        assert_eq!(config.log_filter, "warn");
        assert_eq!(
            config.reference_time,
            Some(Utc.with_ymd_and_hms(2024, 11, 25, 9, 0, 0).unwrap())
        );
        assert_eq!(config.metrics_port, Some(9090));
        assert_eq!(config.request_file, Some(PathBuf::from("request.json")));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = config_from(&[("PRICING_REFERENCE_TIME", ""), ("PRICING_METRICS_PORT", "  ")]).unwrap();
        assert_eq!(config.reference_time, None);
        assert_eq!(config.metrics_port, None);
    }

    #[test]
    fn test_invalid_reference_time() {
        let err = config_from(&[("PRICING_REFERENCE_TIME", "next tuesday")]).unwrap_err();
        assert!(err.to_string().contains("PRICING_REFERENCE_TIME"));
    }

    #[test]
    fn test_invalid_port() {
        assert!(config_from(&[("PRICING_METRICS_PORT", "70000")]).is_err());
    }
}
