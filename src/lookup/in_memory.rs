use std::collections::HashMap;

use anyhow::Result;
use chrono::{TimeZone, Utc};

use crate::domain::customer::{Customer, CustomerType};
use crate::domain::product::Product;
use crate::domain::promotion::PromotionalEvent;
use super::{CustomerLookup, LookupError, ProductLookup, PromotionalEventLookup};

/// HashMap-backed store for customers, products and promotional events.
///
/// Populate it up front, then share it behind an `Arc`; lookups only take
/// `&self`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    customers: HashMap<String, Customer>,
    products: HashMap<String, Product>,
    events: HashMap<String, PromotionalEvent>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_customer(&mut self, customer: Customer) {
        self.customers.insert(customer.id.clone(), customer);
    }

    pub fn insert_product(&mut self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    /// Events are keyed by code; inserting a second event with the same code
    /// replaces the first.
    pub fn insert_event(&mut self, event: PromotionalEvent) {
        self.events.insert(event.code().to_string(), event);
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.insert_customer(customer);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.insert_product(product);
        self
    }

    pub fn with_event(mut self, event: PromotionalEvent) -> Self {
        self.insert_event(event);
        self
    }

    /// Demo data set: four customers, seven products and four 2024 events
    pub fn with_fixtures() -> Result<Self> {
        let mut catalog = Self::new();

        // ========== CUSTOMERS ==========
        catalog.insert_customer(Customer::new(
            "john.doe@example.com",
            CustomerType::Standard,
            1200.0,
            Some("customer-standard".to_string()),
        ));
        catalog.insert_customer(Customer::new(
            "jane.smith@example.com",
            CustomerType::Vip,
            12500.0,
            Some("customer-vip".to_string()),
        ));
        catalog.insert_customer(Customer::new(
            "alice.student@university.edu",
            CustomerType::Student,
            450.0,
            Some("customer-student".to_string()),
        ));
        catalog.insert_customer(Customer::new(
            "bob.martin@example.com",
            CustomerType::Standard,
            800.0,
            Some("customer-bob".to_string()),
        ));

        // ========== PRODUCTS ==========
        let products = [
            ("product-laptop", "MacBook Pro 14\" M3", 2499.0),
            ("product-smartphone", "iPhone 15 Pro", 1199.0),
            ("product-headphones", "AirPods Pro 2", 279.0),
            ("product-mouse", "Magic Mouse", 99.0),
            ("product-keyboard", "Magic Keyboard", 149.0),
            ("product-monitor", "Dell UltraSharp 27\"", 549.0),
            ("product-webcam", "Logitech Brio 4K", 199.0),
        ];
        for (id, name, price) in products {
            catalog.insert_product(Product::new(name, price, Some(id.to_string()))?);
        }

        // ========== PROMOTIONAL EVENTS ==========
        let events = [
            ("Black Friday 2024", "black-friday", 25, (2024, 11, 24), (2024, 11, 27)),
            ("Summer Sale 2024", "summer-sale", 20, (2024, 7, 1), (2024, 8, 31)),
            ("Cyber Monday 2024", "cyber-monday", 30, (2024, 11, 30), (2024, 12, 2)),
            ("Spring Sale 2024", "spring-sale", 15, (2024, 3, 1), (2024, 3, 31)),
        ];
        for (name, code, percent, (sy, sm, sd), (ey, em, ed)) in events {
            let start = Utc
                .with_ymd_and_hms(sy, sm, sd, 0, 0, 0)
                .single()
                .ok_or_else(|| anyhow::anyhow!("invalid start date for {}", code))?;
            let end = Utc
                .with_ymd_and_hms(ey, em, ed, 0, 0, 0)
                .single()
                .ok_or_else(|| anyhow::anyhow!("invalid end date for {}", code))?;
            catalog.insert_event(PromotionalEvent::new(name, code, percent, start, end, None)?);
        }

        tracing::debug!(
            customers = catalog.customers.len(),
            products = catalog.products.len(),
            events = catalog.events.len(),
            "Seeded in-memory catalog"
        );

        Ok(catalog)
    }
}

impl CustomerLookup for InMemoryCatalog {
    fn find_by_id(&self, id: &str) -> Result<Customer, LookupError> {
        self.customers
            .get(id)
            .cloned()
            .ok_or_else(|| LookupError::not_found("Customer", id))
    }
}

impl ProductLookup for InMemoryCatalog {
    fn find_by_id(&self, id: &str) -> Result<Product, LookupError> {
        self.products
            .get(id)
            .cloned()
            .ok_or_else(|| LookupError::not_found("Product", id))
    }
}

impl PromotionalEventLookup for InMemoryCatalog {
    fn find_by_code(&self, code: &str) -> Result<PromotionalEvent, LookupError> {
        self.events
            .get(code)
            .cloned()
            .ok_or_else(|| LookupError::not_found("PromotionalEvent", code))
    }
}
