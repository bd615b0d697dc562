//! Food Order Server - 点餐订单 HTTP 服务
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务服务 (FoodOrderService)
//! ├── db/            # 仓储接口与内存实现
//! ├── search/        # 全文搜索索引
//! ├── server/        # 应用组装与中间件
//! └── utils/         # 日志、提示响应头
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod search;
pub mod server;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use server::build_app;
pub use services::{DefaultFoodOrderService, FoodOrderService};
pub use utils::{AppError, AppResult};

/// 设置环境: 按配置初始化日志
///
/// Must run inside a tokio runtime when `LOG_DIR` is set.
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    utils::logger::init_logger(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
        config.log_retention_days,
    )
}
