//! Cart submission payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Cart submission (购物车下单)
///
/// Missing fields fall back to empty/zero so the endpoint can reject them
/// with 400 instead of failing JSON extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[serde(default)]
    pub payment_info: String,
    #[serde(default)]
    pub food_joint_id: i64,
    #[serde(default)]
    pub items: Vec<OrderItemDto>,
}

/// One cart line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub food_id: i64,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OrderItemDto {
    /// 小计 (unit price × quantity), `None` on overflow
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

impl OrderDto {
    /// First violated submission constraint, if any
    ///
    /// Checked in order: payment info, food joint id, items.
    pub fn rejection(&self) -> Option<ErrorCode> {
        if self.payment_info.is_empty() {
            Some(ErrorCode::PaymentInfoMissing)
        } else if self.food_joint_id <= 0 {
            Some(ErrorCode::InvalidFoodJoint)
        } else if self.items.is_empty() {
            Some(ErrorCode::CartEmpty)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_cart() -> OrderDto {
        OrderDto {
            payment_info: "card".to_string(),
            food_joint_id: 4,
            items: vec![OrderItemDto {
                food_id: 1,
                quantity: 2,
                unit_price: Decimal::new(350, 2),
                note: None,
            }],
        }
    }

    #[test]
    fn test_valid_cart_has_no_rejection() {
        assert_eq!(valid_cart().rejection(), None);
    }

    #[test]
    fn test_each_constraint_rejects_independently() {
        let mut dto = valid_cart();
        dto.payment_info.clear();
        assert_eq!(dto.rejection(), Some(ErrorCode::PaymentInfoMissing));

        let mut dto = valid_cart();
        dto.food_joint_id = 0;
        assert_eq!(dto.rejection(), Some(ErrorCode::InvalidFoodJoint));
        dto.food_joint_id = -3;
        assert_eq!(dto.rejection(), Some(ErrorCode::InvalidFoodJoint));

        let mut dto = valid_cart();
        dto.items.clear();
        assert_eq!(dto.rejection(), Some(ErrorCode::CartEmpty));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let dto: OrderDto = serde_json::from_str("{}").unwrap();
        assert!(dto.payment_info.is_empty());
        assert_eq!(dto.food_joint_id, 0);
        assert!(dto.items.is_empty());
        assert_eq!(dto.rejection(), Some(ErrorCode::PaymentInfoMissing));
    }

    #[test]
    fn test_line_total() {
        let item = &valid_cart().items[0];
        assert_eq!(item.line_total(), Some(Decimal::new(700, 2)));
    }

    #[test]
    fn test_line_total_overflow_is_none() {
        let item = OrderItemDto {
            food_id: 1,
            quantity: 2,
            unit_price: Decimal::MAX,
            note: None,
        };
        assert_eq!(item.line_total(), None);
    }

    #[test]
    fn test_whitespace_payment_info_is_not_empty() {
        let mut dto = valid_cart();
        dto.payment_info = " ".to_string();
        assert_eq!(dto.rejection(), None);
    }
}
