//! Food Order API Handlers
//!
//! Pure HTTP translation: shallow input checks, one service call, then
//! status / `Location` / alert headers. Everything else surfaces as
//! [`AppError`].

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use shared::ErrorCode;
use shared::models::{FoodOrder, OrderDto};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

const ENTITY_NAME: &str = "foodOrder";

/// `filter` value selecting orders that were not placed through a ticket
pub const TICKET_IS_NULL: &str = "ticket-is-null";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

/// POST /api/food-orders - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    Json(order): Json<FoodOrder>,
) -> AppResult<Response> {
    tracing::debug!(?order, "REST request to save FoodOrder");
    create_food_order(&state, order).await
}

async fn create_food_order(state: &ServerState, order: FoodOrder) -> AppResult<Response> {
    if let Some(id) = order.id {
        let code = ErrorCode::OrderIdExists;
        tracing::debug!(%code, id, reason = code.message(), "Rejected new FoodOrder");
        let headers = state.alerts.failure(
            ENTITY_NAME,
            "idexists",
            "A new foodOrder cannot already have an ID",
        );
        return Ok((StatusCode::BAD_REQUEST, headers).into_response());
    }

    let result = state.food_orders.save(order).await?;
    let id = persisted_id(&result)?.to_string();

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/api/food-orders/{id}"))],
        state.alerts.entity_created(ENTITY_NAME, &id),
        Json(result),
    )
        .into_response())
}

/// POST /api/food-orders/new - 购物车下单
pub async fn create_from_cart(
    State(state): State<ServerState>,
    Json(dto): Json<OrderDto>,
) -> AppResult<Response> {
    tracing::debug!(?dto, "REST request to createOrder OrderDTO");

    if let Some(code) = dto.rejection() {
        tracing::debug!(%code, reason = code.message(), "Rejected cart submission");
        let headers = state.alerts.failure(ENTITY_NAME, "wrong param", "wrong param");
        return Ok((StatusCode::BAD_REQUEST, headers).into_response());
    }

    let ticket = state.food_orders.create_order(dto).await?;
    let id = ticket.id.to_string();

    Ok((
        StatusCode::CREATED,
        [(LOCATION, ticket.location())],
        state.alerts.entity_created(ENTITY_NAME, &id),
        Json(ticket),
    )
        .into_response())
}

/// PUT /api/food-orders - 更新订单
pub async fn update(
    State(state): State<ServerState>,
    Json(order): Json<FoodOrder>,
) -> AppResult<Response> {
    tracing::debug!(?order, "REST request to update FoodOrder");

    let Some(id) = order.id else {
        return create_food_order(&state, order).await;
    };

    let result = state.food_orders.save(order).await?;

    Ok((
        StatusCode::OK,
        state.alerts.entity_updated(ENTITY_NAME, &id.to_string()),
        Json(result),
    )
        .into_response())
}

/// GET /api/food-orders - 订单列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<FoodOrder>>> {
    if query.filter.as_deref() == Some(TICKET_IS_NULL) {
        tracing::debug!("REST request to get all FoodOrders where ticket is null");
        return Ok(Json(state.food_orders.find_all_where_ticket_is_null().await?));
    }

    tracing::debug!("REST request to get all FoodOrders");
    Ok(Json(state.food_orders.find_all().await?))
}

/// GET /api/food-orders/{id} - 订单详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    tracing::debug!(id, "REST request to get FoodOrder");

    Ok(match state.food_orders.find_one(id).await? {
        Some(order) => (StatusCode::OK, Json(order)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// DELETE /api/food-orders/{id} - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    tracing::debug!(id, "REST request to delete FoodOrder");

    state.food_orders.delete(id).await?;

    Ok((
        StatusCode::OK,
        state.alerts.entity_deleted(ENTITY_NAME, &id.to_string()),
    )
        .into_response())
}

/// GET /api/_search/food-orders?query= - 全文搜索
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<FoodOrder>>> {
    tracing::debug!(query = %params.query, "REST request to search FoodOrders");
    Ok(Json(state.food_orders.search(&params.query).await?))
}

fn persisted_id(order: &FoodOrder) -> AppResult<i64> {
    order
        .id
        .ok_or_else(|| AppError::internal("Saved FoodOrder has no id"))
}
