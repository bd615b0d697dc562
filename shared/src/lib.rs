//! Shared types for the food order service
//!
//! Wire models exchanged with the ordering UI and the unified error system
//! used by every HTTP handler.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
