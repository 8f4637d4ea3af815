use crate::model::OrderLine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Identifier of an order owned by the remote order service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order as loaded from the order service.
///
/// This is the read-only seed an edit session starts from. `order_details`
/// stays loosely typed: historical orders carry heterogeneous line shapes and
/// are normalized by [`crate::ledger::reconcile`] when a session opens.
/// `total_amount` is informational only and is never trusted on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub order_details: Value,
}

impl Order {
    /// Creates a seed order from already-loose line data.
    pub fn new(id: impl Into<OrderId>, date: Option<String>, order_details: Value) -> Self {
        Self {
            id: id.into(),
            date,
            total_amount: 0.0,
            order_details,
        }
    }
}

/// Payload sent to the order service when an edit is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub date: String,
    pub total_amount: f64,
    pub order_details: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_reads_camel_case_fields() {
        let order: Order = serde_json::from_value(json!({
            "id": "ord-7",
            "date": "2024-03-01",
            "totalAmount": 12.5,
            "orderDetails": [{ "item": "Tea", "quantity": 1, "price": 12.5 }]
        }))
        .unwrap();

        assert_eq!(order.id, OrderId::from("ord-7"));
        assert_eq!(order.date.as_deref(), Some("2024-03-01"));
        assert!(order.order_details.is_array());
    }

    #[test]
    fn test_order_tolerates_missing_fields() {
        let order: Order = serde_json::from_value(json!({ "id": "ord-8" })).unwrap();
        assert_eq!(order.date, None);
        assert!(order.order_details.is_null());
    }

    #[test]
    fn test_update_writes_camel_case_fields() {
        let update = OrderUpdate {
            date: "2024-03-01".into(),
            total_amount: 3.0,
            order_details: vec![OrderLine::new("Tea", 2, 1.5)],
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["totalAmount"], json!(3.0));
        assert_eq!(value["orderDetails"][0]["quantity"], json!(2));
    }
}
