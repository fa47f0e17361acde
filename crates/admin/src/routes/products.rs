//! Admin product management.
//!
//! Mutations validate before touching the store and answer 422 with the
//! full list of rule failures, so the product form can surface every
//! problem at once instead of one per round trip.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use solestore_core::catalog::{
    LOW_STOCK_THRESHOLD, Product, ProductDraft, ProductPage, ProductPatch, validate,
};
use solestore_core::types::ProductId;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Paginated product list.
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ProductPage> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    Json(state.catalog().all(page, limit))
}

/// Products at or below the restock threshold, lowest stock first.
pub async fn low_stock(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Json<Vec<Product>> {
    Json(state.catalog().low_stock(LOW_STOCK_THRESHOLD))
}

/// Product detail.
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    state
        .catalog()
        .by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Create a product. The store assigns the id and timestamps.
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>)> {
    let errors = validate(&draft);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let product = state.catalog().create(draft);
    tracing::info!(id = %product.id, admin = %admin.username, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Partially update a product.
///
/// The patch is validated against the merged result, so an update cannot
/// leave a product in a state that creation would have rejected.
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let mut preview = state
        .catalog()
        .by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    patch.clone().apply(&mut preview, Utc::now());

    let errors = validate(&ProductDraft::from(&preview));
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let product = state
        .catalog()
        .update(&id, patch)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    tracing::info!(id = %product.id, admin = %admin.username, "Product updated");
    Ok(Json(product))
}

#[derive(Debug, Deserialize)]
pub struct SetStock {
    pub stock: u32,
}

/// Set the stock count for a product.
pub async fn set_stock(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SetStock>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .update_stock(&id, payload.stock)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    tracing::info!(id = %product.id, stock = payload.stock, admin = %admin.username, "Stock updated");
    Ok(Json(product))
}

/// Delete a product.
pub async fn destroy(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = ProductId::new(id);
    if !state.catalog().delete(&id) {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    tracing::info!(%id, admin = %admin.username, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
