//! 工具模块
//!
//! - [`Alerts`] - UI 提示响应头
//! - [`logger`] - 日志初始化与清理

pub mod alert;
pub mod logger;

pub use alert::Alerts;
pub use shared::{AppError, AppResult};
