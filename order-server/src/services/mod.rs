//! 业务服务模块
//!
//! - [`FoodOrderService`] - 点餐业务接口 (HTTP 层唯一依赖)
//! - [`DefaultFoodOrderService`] - 基于仓储与搜索索引的默认实现

pub mod food_order;

pub use food_order::{DefaultFoodOrderService, FoodOrderService};
