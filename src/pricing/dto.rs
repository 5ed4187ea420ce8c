use serde::{Deserialize, Serialize};

use crate::domain::order::OrderItem;

// ============================================================================
// Boundary Shapes
// ============================================================================
//
// Request and response bodies as exchanged with an outer transport layer.
// Field names are camelCase on the wire.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceOrderRequest {
    pub customer_id: String,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub strategies: Vec<String>,
}

/// One step of the discount breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedStrategy {
    pub name: String,
    #[serde(rename = "discount")]
    pub discount_percent: u8,
    pub amount_after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub subtotal: f64,
    pub total: f64,
    pub applied_strategies: Vec<AppliedStrategy>,
}

/// Round half away from zero to two decimals.
///
/// The scaled value is first cut to 15 significant digits so that decimal
/// halves stored just below .5 in binary (1.275 as 1.27499...) still round up.
pub fn round_money(amount: f64) -> f64 {
    let scaled = amount * 100.0;
    let scaled = format!("{:.14e}", scaled).parse::<f64>().unwrap_or(scaled);
    scaled.round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_strategies() {
        let request: PriceOrderRequest = serde_json::from_value(json!({
            "customerId": "customer-1",
            "items": [{"productId": "product-1", "quantity": 1}]
        }))
        .unwrap();

        assert_eq!(request.customer_id, "customer-1");
        assert_eq!(request.items, vec![OrderItem::new("product-1", 1)]);
        assert!(request.strategies.is_empty());
    }

    #[test]
    fn test_request_missing_items_rejected() {
        let result: Result<PriceOrderRequest, _> =
            serde_json::from_value(json!({"customerId": "customer-1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_wire_shape() {
        let result = PricingResult {
            subtotal: 1000.0,
            total: 850.0,
            applied_strategies: vec![AppliedStrategy {
                name: "VIP".to_string(),
                discount_percent: 15,
                amount_after: 850.0,
            }],
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "subtotal": 1000.0,
                "total": 850.0,
                "appliedStrategies": [
                    {"name": "VIP", "discount": 15, "amountAfter": 850.0}
                ]
            })
        );
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(637.5), 637.5);
        assert_eq!(round_money(12.344), 12.34);
        assert_eq!(round_money(12.346), 12.35);
        assert_eq!(round_money(0.0), 0.0);
    }

    #[test]
    fn test_round_money_binary_halves_round_up() {
        // 1.50 * 0.85 is stored as 1.2749999999999999
        assert_eq!(round_money(1.5 * 0.85), 1.28);
        assert_eq!(round_money(1.005), 1.01);
        assert_eq!(round_money(-1.005), -1.01);
    }
}
