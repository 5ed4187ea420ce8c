use std::sync::Arc;
use std::time::Instant;

use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderItem};
use crate::lookup::{CustomerLookup, LookupError, ProductLookup};
use crate::metrics::Metrics;
use super::dto::{round_money, AppliedStrategy, PriceOrderRequest, PricingResult};
use super::errors::PricingError;
use super::registry::PolicyRegistry;

// ============================================================================
// Pricing Pipeline
// ============================================================================
//
// Orchestrates: Customer → Order (lines, subtotal) → Policies → Breakdown
//
// Every lookup happens before the first policy is applied. Any failure
// aborts the request; no partial result is returned.
//
// ============================================================================

pub struct PricingPipeline {
    customers: Arc<dyn CustomerLookup>,
    products: Arc<dyn ProductLookup>,
    registry: PolicyRegistry,
    metrics: Option<Arc<Metrics>>,
}

impl PricingPipeline {
    pub fn new(
        customers: Arc<dyn CustomerLookup>,
        products: Arc<dyn ProductLookup>,
        registry: PolicyRegistry,
    ) -> Self {
        Self {
            customers,
            products,
            registry,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn price_request(&self, request: &PriceOrderRequest) -> Result<PricingResult, PricingError> {
        self.price(&request.customer_id, &request.items, request.strategies.as_slice())
    }

    /// Price `items` for `customer_id`, applying `strategy_codes` in order
    pub fn price<S: AsRef<str>>(
        &self,
        customer_id: &str,
        items: &[OrderItem],
        strategy_codes: &[S],
    ) -> Result<PricingResult, PricingError> {
        let started = Instant::now();
        let result = self.run(customer_id, items, strategy_codes);
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(priced) => {
                tracing::info!(
                    customer_id,
                    items = items.len(),
                    strategies = strategy_codes.len(),
                    subtotal = priced.subtotal,
                    total = priced.total,
                    "Order priced"
                );
            }
            Err(e) => {
                tracing::warn!(customer_id, kind = e.label(), error = %e, "Pricing failed");
            }
        }

        if let Some(metrics) = &self.metrics {
            metrics.record_request(elapsed, result.as_ref().err().map(PricingError::label));
            if let Ok(priced) = &result {
                for applied in &priced.applied_strategies {
                    metrics.record_strategy(&applied.name);
                }
            }
        }

        result
    }

    fn run<S: AsRef<str>>(
        &self,
        customer_id: &str,
        items: &[OrderItem],
        strategy_codes: &[S],
    ) -> Result<PricingResult, PricingError> {
        let customer = self.find_customer(customer_id)?;
        let order = self.build_order(&customer, items)?;

        // Checked only once every line has been built, so bad lines are
        // reported as such rather than as an empty order
        order.ensure_not_empty()?;

        let subtotal = order.subtotal();
        tracing::debug!(
            order_id = order.id(),
            customer_id = order.customer_id(),
            lines = order.items().len(),
            subtotal,
            "Order built"
        );

        let mut current = subtotal;
        let mut applied_strategies = Vec::with_capacity(strategy_codes.len());

        for code in strategy_codes {
            let code = code.as_ref();
            let policy = self.registry.resolve(code)?;
            current = policy.apply(current);

            tracing::debug!(
                code,
                policy = policy.name(),
                discount = policy.discount_percent(),
                amount_after = current,
                "Applied discount policy"
            );

            applied_strategies.push(AppliedStrategy {
                name: policy.name().to_string(),
                discount_percent: policy.discount_percent(),
                amount_after: round_money(current),
            });
        }

        Ok(PricingResult {
            subtotal: round_money(subtotal),
            total: round_money(current),
            applied_strategies,
        })
    }

    fn find_customer(&self, customer_id: &str) -> Result<Customer, PricingError> {
        self.customers.find_by_id(customer_id).map_err(|e| match e {
            LookupError::NotFound { .. } => PricingError::CustomerNotFound(customer_id.to_string()),
            other => PricingError::LookupFailed(other),
        })
    }

    fn build_order(&self, customer: &Customer, items: &[OrderItem]) -> Result<Order, PricingError> {
        let mut order = Order::new(customer);

        for item in items {
            let product = self.products.find_by_id(&item.product_id).map_err(|e| match e {
                LookupError::NotFound { .. } => PricingError::ProductNotFound(item.product_id.clone()),
                other => PricingError::LookupFailed(other),
            })?;

            // Price snapshot taken now; later catalog changes do not affect this order
            let unit_price = product.price;
            order.add_item(&product, item.quantity, unit_price)?;
        }

        for line in order.items() {
            tracing::trace!(
                product_id = line.product_id(),
                quantity = line.quantity(),
                unit_price = line.unit_price(),
                line_total = line.total(),
                "Order line"
            );
        }

        Ok(order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
