//! Ticket Repository

use super::{RepoError, RepoResult, TicketRepository};
use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::TicketGo;
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory ticket table
#[derive(Debug, Default)]
pub struct MemoryTicketRepository {
    rows: DashMap<i64, TicketGo>,
    last_id: AtomicI64,
    /// 每个门店的取餐号计数器
    numbers: DashMap<i64, u32>,
}

impl MemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketRepository for MemoryTicketRepository {
    async fn next_identity(&self, food_joint_id: i64) -> RepoResult<(i64, u32)> {
        let id = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|last| last + 1)
            .map_err(|_| RepoError::Database("ticket id sequence exhausted".into()))?;

        let mut number = self.numbers.entry(food_joint_id).or_insert(0);
        // 取餐号用尽后从 1 重新开始
        *number = number.checked_add(1).unwrap_or(1);
        Ok((id, *number))
    }

    async fn save(&self, ticket: TicketGo) -> RepoResult<TicketGo> {
        self.rows.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<TicketGo>> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }
}
