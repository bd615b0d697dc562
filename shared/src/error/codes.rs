//! Unified error codes
//!
//! Codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Search errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so the UI can switch on plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// A new food order already carries an id
    OrderIdExists = 4002,
    /// Cart has no items
    CartEmpty = 4003,
    /// Food joint id is not positive
    InvalidFoodJoint = 4004,
    /// Payment info is empty
    PaymentInfoMissing = 4005,
    /// Item quantity is not positive
    InvalidQuantity = 4006,
    /// Item price is negative
    InvalidPrice = 4007,

    // ==================== 6xxx: Search ====================
    /// Search index failure
    SearchFailed = 6001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Storage error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Order
            ErrorCode::OrderIdExists => "A new food order cannot already have an ID",
            ErrorCode::CartEmpty => "Cart has no items",
            ErrorCode::InvalidFoodJoint => "Food joint id must be positive",
            ErrorCode::PaymentInfoMissing => "Payment info is required",
            ErrorCode::InvalidQuantity => "Item quantity must be positive",
            ErrorCode::InvalidPrice => "Item price must not be negative",

            // Search
            ErrorCode::SearchFailed => "Search failed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            4002 => Ok(ErrorCode::OrderIdExists),
            4003 => Ok(ErrorCode::CartEmpty),
            4004 => Ok(ErrorCode::InvalidFoodJoint),
            4005 => Ok(ErrorCode::PaymentInfoMissing),
            4006 => Ok(ErrorCode::InvalidQuantity),
            4007 => Ok(ErrorCode::InvalidPrice),

            // Search
            6001 => Ok(ErrorCode::SearchFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);
        assert_eq!(ErrorCode::OrderIdExists.code(), 4002);
        assert_eq!(ErrorCode::InvalidPrice.code(), 4007);
        assert_eq!(ErrorCode::SearchFailed.code(), 6001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_known_and_unknown() {
        assert_eq!(ErrorCode::try_from(4006), Ok(ErrorCode::InvalidQuantity));
        assert_eq!(ErrorCode::try_from(6), Err(InvalidErrorCode(6)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::CartEmpty).unwrap();
        assert_eq!(json, "4003");

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);

        assert!(serde_json::from_str::<ErrorCode>("4999").is_err());
    }
}
