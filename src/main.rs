use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_pricing::config::AppConfig;
use order_pricing::domain::order::OrderItem;
use order_pricing::lookup::InMemoryCatalog;
use order_pricing::metrics::{self, Metrics};
use order_pricing::pricing::{PolicyRegistry, PriceOrderRequest, PricingPipeline};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Structured logging; RUST_LOG overrides the default filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("🚀 Starting order pricing");

    // === 1. Seed the in-memory catalog ===
    let catalog = Arc::new(InMemoryCatalog::with_fixtures()?);

    // === 2. Policy registry, pinned or wall clock ===
    let reference_time = config.reference_time.unwrap_or_else(Utc::now);
    tracing::info!(%reference_time, "Promotional events gated on reference time");
    let registry = PolicyRegistry::with_reference_time(catalog.clone(), reference_time);

    // === 3. Metrics + pipeline ===
    let metrics = Arc::new(Metrics::new()?);
    let pipeline = PricingPipeline::new(catalog.clone(), catalog, registry).with_metrics(metrics.clone());

    // === 4. Price the requested order, or the demo set ===
    let requests = match &config.request_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read request file {}", path.display()))?;
            let request: PriceOrderRequest = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid pricing request in {}", path.display()))?;
            vec![request]
        }
        None => demo_requests(),
    };

    for request in &requests {
        let output = match pipeline.price_request(request) {
            Ok(result) => serde_json::to_value(&result)?,
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    // === 5. Optionally keep serving metrics ===
    if let Some(port) = config.metrics_port {
        metrics::start_metrics_server(metrics.registry().clone(), port).await?;
    }

    tracing::info!("🎉 Done");
    Ok(())
}

fn demo_requests() -> Vec<PriceOrderRequest> {
    let request = |customer: &str, items: Vec<OrderItem>, strategies: &[&str]| PriceOrderRequest {
        customer_id: customer.to_string(),
        items,
        strategies: strategies.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        request("customer-standard", vec![OrderItem::new("product-laptop", 1)], &[]),
        request("customer-vip", vec![OrderItem::new("product-laptop", 1)], &["vip"]),
        request(
            "customer-student",
            vec![OrderItem::new("product-headphones", 1), OrderItem::new("product-mouse", 2)],
            &["student"],
        ),
        request(
            "customer-vip",
            vec![OrderItem::new("product-smartphone", 2), OrderItem::new("product-keyboard", 1)],
            &["vip", "black-friday"],
        ),
        request("customer-standard", vec![OrderItem::new("product-monitor", 1)], &["mystery"]),
    ]
}
