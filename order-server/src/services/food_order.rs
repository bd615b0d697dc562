//! Food order service
//!
//! The HTTP layer only ever talks to [`FoodOrderService`]. Storage and search
//! are injected into [`DefaultFoodOrderService`] as trait objects.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{FoodOrder, OrderDto, OrderItemDto, TicketGo};
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;

use crate::db::repository::{
    FoodOrderRepository, MemoryFoodOrderRepository, MemoryTicketRepository, TicketRepository,
};
use crate::search::{MemorySearchIndex, SearchIndex};

#[async_trait]
pub trait FoodOrderService: Send + Sync {
    /// Persist an order (insert or update) and keep the search index in sync
    async fn save(&self, order: FoodOrder) -> AppResult<FoodOrder>;
    /// Turn a validated cart into a ticket and its food orders
    async fn create_order(&self, dto: OrderDto) -> AppResult<TicketGo>;
    async fn find_all(&self) -> AppResult<Vec<FoodOrder>>;
    async fn find_all_where_ticket_is_null(&self) -> AppResult<Vec<FoodOrder>>;
    async fn find_one(&self, id: i64) -> AppResult<Option<FoodOrder>>;
    /// Unknown ids are ignored
    async fn delete(&self, id: i64) -> AppResult<()>;
    async fn search(&self, query: &str) -> AppResult<Vec<FoodOrder>>;
    async fn count(&self) -> AppResult<usize>;
}

#[derive(Clone)]
pub struct DefaultFoodOrderService {
    orders: Arc<dyn FoodOrderRepository>,
    tickets: Arc<dyn TicketRepository>,
    index: Arc<dyn SearchIndex>,
}

impl DefaultFoodOrderService {
    pub fn new(
        orders: Arc<dyn FoodOrderRepository>,
        tickets: Arc<dyn TicketRepository>,
        index: Arc<dyn SearchIndex>,
    ) -> Self {
        Self {
            orders,
            tickets,
            index,
        }
    }

    /// 内存存储 + 内存索引
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryFoodOrderRepository::new()),
            Arc::new(MemoryTicketRepository::new()),
            Arc::new(MemorySearchIndex::new()),
        )
    }

    /// Validate every item and compute the ticket total
    ///
    /// Runs before anything is reserved, so a rejected cart leaves no trace.
    fn price_cart(dto: &OrderDto) -> AppResult<Decimal> {
        let mut total = Decimal::ZERO;
        for (index, item) in dto.items.iter().enumerate() {
            if item.quantity <= 0 {
                return Err(AppError::new(ErrorCode::InvalidQuantity)
                    .with_detail("index", index)
                    .with_detail("quantity", item.quantity));
            }
            if item.unit_price.is_sign_negative() {
                return Err(AppError::new(ErrorCode::InvalidPrice)
                    .with_detail("index", index)
                    .with_detail("unitPrice", item.unit_price.to_string()));
            }
            total = item
                .line_total()
                .and_then(|line| total.checked_add(line))
                .ok_or_else(|| {
                    AppError::new(ErrorCode::ValueOutOfRange).with_detail("index", index)
                })?;
        }
        Ok(total)
    }

    /// Save and index one order per item, recording every persisted id
    async fn place_items(
        &self,
        ticket_id: i64,
        items: Vec<OrderItemDto>,
        placed: &mut Vec<i64>,
    ) -> AppResult<()> {
        for item in items {
            let saved = self
                .orders
                .save(FoodOrder {
                    id: None,
                    food_id: Some(item.food_id),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    note: item.note,
                    ticket_id: Some(ticket_id),
                })
                .await?;
            let id = saved
                .id
                .ok_or_else(|| AppError::internal("Saved FoodOrder has no id"))?;
            placed.push(id);
            self.index.index(&saved).await?;
        }
        Ok(())
    }

    /// Undo [`Self::place_items`] after a failed checkout
    async fn discard(&self, ids: &[i64]) {
        for &id in ids {
            if let Err(e) = self.orders.delete(id).await {
                tracing::warn!(id, error = %e, "Failed to discard FoodOrder");
            }
            if let Err(e) = self.index.remove(id).await {
                tracing::warn!(id, error = %e, "Failed to unindex FoodOrder");
            }
        }
    }
}

#[async_trait]
impl FoodOrderService for DefaultFoodOrderService {
    async fn save(&self, order: FoodOrder) -> AppResult<FoodOrder> {
        let saved = self.orders.save(order).await?;
        self.index.index(&saved).await?;
        Ok(saved)
    }

    async fn create_order(&self, dto: OrderDto) -> AppResult<TicketGo> {
        let total_price = Self::price_cart(&dto)?;

        let (ticket_id, number) = self.tickets.next_identity(dto.food_joint_id).await?;

        let mut order_ids = Vec::with_capacity(dto.items.len());
        let result = match self.place_items(ticket_id, dto.items, &mut order_ids).await {
            Ok(()) => self
                .tickets
                .save(TicketGo {
                    id: ticket_id,
                    number,
                    food_joint_id: dto.food_joint_id,
                    payment_info: dto.payment_info,
                    order_ids: order_ids.clone(),
                    total_price,
                    created_at: Utc::now(),
                })
                .await
                .map_err(AppError::from),
            Err(e) => Err(e),
        };

        let ticket = match result {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::warn!(
                    ticket_id,
                    placed = order_ids.len(),
                    error = %e,
                    "Checkout failed, discarding placed orders"
                );
                self.discard(&order_ids).await;
                return Err(e);
            }
        };

        tracing::info!(
            ticket_id = ticket.id,
            number = ticket.number,
            food_joint_id = ticket.food_joint_id,
            orders = ticket.order_ids.len(),
            total = %ticket.total_price,
            "Ticket created"
        );
        Ok(ticket)
    }

    async fn find_all(&self) -> AppResult<Vec<FoodOrder>> {
        Ok(self.orders.find_all().await?)
    }

    async fn find_all_where_ticket_is_null(&self) -> AppResult<Vec<FoodOrder>> {
        Ok(self.orders.find_all_where_ticket_is_null().await?)
    }

    async fn find_one(&self, id: i64) -> AppResult<Option<FoodOrder>> {
        Ok(self.orders.find_by_id(id).await?)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let removed = self.orders.delete(id).await?;
        self.index.remove(id).await?;
        if !removed {
            tracing::debug!(id, "Delete of unknown FoodOrder ignored");
        }
        Ok(())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<FoodOrder>> {
        let ids = self.index.search(query).await?;
        Ok(self.orders.find_by_ids(&ids).await?)
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.orders.count().await?)
    }
}
