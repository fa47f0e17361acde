//! Admin order management.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use solestore_core::orders::Order;
use solestore_core::types::{OrderId, OrderStatus};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    /// Restrict to a single status.
    pub status: Option<OrderStatus>,
    /// Search by order id or the shipping recipient's name.
    pub q: Option<String>,
}

/// List orders, newest first.
///
/// `q` and `status` combine: the search runs first, then the status filter
/// narrows the hits.
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Json<Vec<Order>> {
    let mut orders = match query.q.as_deref() {
        Some(q) if !q.trim().is_empty() => state.orders().search(q),
        _ => state.orders().all(),
    };
    if let Some(status) = query.status {
        orders.retain(|o| o.status == status);
    }
    Json(orders)
}

/// Order detail.
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>> {
    let id = OrderId::new(id);
    state
        .orders()
        .by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))
}

#[derive(Debug, Deserialize)]
pub struct SetStatus {
    pub status: OrderStatus,
}

/// Set an order's status.
///
/// Any status can follow any other; cancelled and delivered orders can be
/// reopened. Fulfillment-integrity checks belong to a later payments story.
pub async fn set_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SetStatus>,
) -> Result<Json<Order>> {
    let id = OrderId::new(id);
    let order = state
        .orders()
        .set_status(&id, payload.status)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;
    tracing::info!(%id, status = %payload.status, admin = %admin.username, "Order status updated");
    Ok(Json(order))
}
