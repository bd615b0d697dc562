//! Food Order API 模块
//!
//! | 方法 | 路径 | 说明 |
//! |------|------|------|
//! | POST | /api/food-orders | 创建订单 (不得携带 id) |
//! | POST | /api/food-orders/new | 购物车下单，返回小票 |
//! | PUT | /api/food-orders | 更新订单 (无 id 时等同创建) |
//! | GET | /api/food-orders?filter=ticket-is-null | 订单列表 |
//! | GET | /api/food-orders/{id} | 订单详情 |
//! | DELETE | /api/food-orders/{id} | 删除订单 |
//! | GET | /api/_search/food-orders?query= | 全文搜索 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/food-orders", routes())
        .route("/api/_search/food-orders", get(handler::search))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .put(handler::update),
        )
        .route("/new", post(handler::create_from_cart))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
