use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::services::{DefaultFoodOrderService, FoodOrderService};
use crate::utils::Alerts;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次的成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | food_orders | 点餐业务服务 |
/// | alerts | UI 提示响应头构造器 |
/// | started_at | 启动时间 (健康检查) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub food_orders: Arc<dyn FoodOrderService>,
    pub alerts: Alerts,
    pub started_at: Instant,
}

impl ServerState {
    /// 使用默认的内存存储初始化
    pub fn initialize(config: &Config) -> Self {
        tracing::info!("Using in-memory food order storage and search index");
        Self::with_service(config.clone(), Arc::new(DefaultFoodOrderService::in_memory()))
    }

    /// 注入任意业务服务实现
    pub fn with_service(config: Config, food_orders: Arc<dyn FoodOrderService>) -> Self {
        Self {
            alerts: Alerts::new(config.app_name.clone()),
            config,
            food_orders,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
