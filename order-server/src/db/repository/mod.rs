//! Repository Module
//!
//! Storage traits used by the food order service, plus in-memory
//! implementations backed by `DashMap`.

pub mod food_order;
pub mod ticket;

pub use food_order::MemoryFoodOrderRepository;
pub use ticket::MemoryTicketRepository;

use async_trait::async_trait;
use shared::AppError;
use shared::models::{FoodOrder, TicketGo};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Food order storage
#[async_trait]
pub trait FoodOrderRepository: Send + Sync {
    /// Insert (id absent) or upsert (id present); returns the stored order
    async fn save(&self, order: FoodOrder) -> RepoResult<FoodOrder>;
    async fn find_all(&self) -> RepoResult<Vec<FoodOrder>>;
    async fn find_all_where_ticket_is_null(&self) -> RepoResult<Vec<FoodOrder>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<FoodOrder>>;
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<FoodOrder>>;
    /// Returns whether a row was removed
    async fn delete(&self, id: i64) -> RepoResult<bool>;
    async fn count(&self) -> RepoResult<usize>;
}

/// Ticket storage
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Reserve the next ticket id and the next number for `food_joint_id`
    async fn next_identity(&self, food_joint_id: i64) -> RepoResult<(i64, u32)>;
    async fn save(&self, ticket: TicketGo) -> RepoResult<TicketGo>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<TicketGo>>;
}
