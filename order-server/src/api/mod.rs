//! API 路由模块
//!
//! - [`food_orders`] - 点餐订单接口 (CRUD + 搜索 + 购物车下单)
//! - [`health`] - 健康检查

pub mod food_orders;
pub mod health;

pub use crate::utils::{AppError, AppResult};
