//! Food Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Food order entity (one ordered dish)
///
/// `id` stays `None` until the order is persisted. `ticket_id` links the
/// order to the ticket it was placed on; orders created directly through
/// the CRUD endpoint have no ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodOrder {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub food_id: Option<i64>,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub ticket_id: Option<i64>,
}

impl FoodOrder {
    /// Whether this order was placed without a ticket
    pub fn has_no_ticket(&self) -> bool {
        self.ticket_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_deserialize_camel_case_without_id() {
        let json = r#"{"foodId": 3, "quantity": 2, "unitPrice": 12.5, "note": "no onion"}"#;
        let order: FoodOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, None);
        assert_eq!(order.food_id, Some(3));
        assert_eq!(order.quantity, 2);
        assert_eq!(order.unit_price, dec("12.5"));
        assert_eq!(order.note.as_deref(), Some("no onion"));
        assert!(order.has_no_ticket());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let order = FoodOrder {
            id: Some(9),
            food_id: Some(1),
            quantity: 1,
            unit_price: dec("4.00"),
            note: None,
            ticket_id: Some(2),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["ticketId"], 2);
        assert_eq!(json["unitPrice"], 4.0);
        assert!(json.get("note").is_none());
    }
}
