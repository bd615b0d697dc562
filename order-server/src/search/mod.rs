//! Full-text search over food orders
//!
//! [`SearchIndex`] is the seam the service talks to; [`MemorySearchIndex`]
//! is the bundled implementation.

mod memory;

pub use memory::MemorySearchIndex;

use async_trait::async_trait;
use shared::AppError;
use shared::models::FoodOrder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Document without id cannot be indexed")]
    MissingId,
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::search(err.to_string())
    }
}

pub type SearchResult<T> = Result<T, SearchError>;

#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Index or re-index a persisted order
    async fn index(&self, order: &FoodOrder) -> SearchResult<()>;
    async fn remove(&self, id: i64) -> SearchResult<()>;
    /// Ids of matching orders, ascending
    async fn search(&self, query: &str) -> SearchResult<Vec<i64>>;
}
