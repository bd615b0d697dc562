//! Ticket Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ticket produced by a successful cart submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketGo {
    pub id: i64,
    /// 取餐号, sequential per food joint starting at 1
    pub number: u32,
    pub food_joint_id: i64,
    pub payment_info: String,
    /// Food orders placed on this ticket
    pub order_ids: Vec<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl TicketGo {
    /// Location of this ticket relative to the server root
    pub fn location(&self) -> String {
        format!("/api/tickets/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_and_json_shape() {
        let ticket = TicketGo {
            id: 12,
            number: 3,
            food_joint_id: 5,
            payment_info: "cash".to_string(),
            order_ids: vec![30, 31],
            total_price: Decimal::new(1850, 2),
            created_at: Utc::now(),
        };
        assert_eq!(ticket.location(), "/api/tickets/12");

        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["foodJointId"], 5);
        assert_eq!(json["orderIds"], serde_json::json!([30, 31]));
        assert_eq!(json["totalPrice"], 18.5);
    }
}
