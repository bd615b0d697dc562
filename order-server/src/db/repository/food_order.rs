//! Food Order Repository

use super::{FoodOrderRepository, RepoError, RepoResult};
use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::FoodOrder;
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory food order table
///
/// Ids come from a monotonically increasing sequence. An upsert with an
/// explicit id advances the sequence past it so later inserts never collide.
#[derive(Debug, Default)]
pub struct MemoryFoodOrderRepository {
    rows: DashMap<i64, FoodOrder>,
    last_id: AtomicI64,
}

impl MemoryFoodOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> RepoResult<i64> {
        self.last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|last| last + 1)
            .map_err(|_| RepoError::Database("food order id sequence exhausted".into()))
    }

    fn sorted(mut orders: Vec<FoodOrder>) -> Vec<FoodOrder> {
        orders.sort_by_key(|o| o.id);
        orders
    }
}

#[async_trait]
impl FoodOrderRepository for MemoryFoodOrderRepository {
    async fn save(&self, mut order: FoodOrder) -> RepoResult<FoodOrder> {
        let id = match order.id {
            Some(id) => {
                self.last_id.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => self.next_id()?,
        };
        order.id = Some(id);
        self.rows.insert(id, order.clone());
        Ok(order)
    }

    async fn find_all(&self) -> RepoResult<Vec<FoodOrder>> {
        let orders = self.rows.iter().map(|r| r.value().clone()).collect();
        Ok(Self::sorted(orders))
    }

    async fn find_all_where_ticket_is_null(&self) -> RepoResult<Vec<FoodOrder>> {
        let orders = self
            .rows
            .iter()
            .filter(|r| r.value().has_no_ticket())
            .map(|r| r.value().clone())
            .collect();
        Ok(Self::sorted(orders))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<FoodOrder>> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<FoodOrder>> {
        let orders = ids
            .iter()
            .filter_map(|id| self.rows.get(id).map(|r| r.value().clone()))
            .collect();
        Ok(Self::sorted(orders))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.rows.remove(&id).is_some())
    }

    async fn count(&self) -> RepoResult<usize> {
        Ok(self.rows.len())
    }
}
