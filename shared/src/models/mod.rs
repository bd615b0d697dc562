//! Data models
//!
//! Shared between order-server and the ordering UI (via API).
//! JSON uses camelCase field names; all IDs are `i64`.

pub mod food_order;
pub mod order_dto;
pub mod ticket;

// Re-exports
pub use food_order::*;
pub use order_dto::*;
pub use ticket::*;
