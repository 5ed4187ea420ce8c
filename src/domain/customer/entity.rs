use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{CustomerType, Email};

/// A customer as supplied by the customer store.
///
/// Pricing only needs the customer to exist; the type and purchase history
/// are carried for callers that pick strategy codes from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: Email,
    pub customer_type: CustomerType,
    pub total_purchases: f64,
}

impl Customer {
    /// Create a customer, generating a UUID v4 identifier when `id` is `None`
    pub fn new(
        email: impl Into<String>,
        customer_type: CustomerType,
        total_purchases: f64,
        id: Option<String>,
    ) -> Self {
        Self {
            id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            email: Email::new(email),
            customer_type,
            total_purchases,
        }
    }

    pub fn is_vip(&self) -> bool {
        self.customer_type == CustomerType::Vip
    }

    pub fn is_student(&self) -> bool {
        self.customer_type == CustomerType::Student
    }

    pub fn is_standard(&self) -> bool {
        self.customer_type == CustomerType::Standard
    }
}
