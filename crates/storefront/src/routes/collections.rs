//! Collection route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use solestore_core::catalog::Product;

use crate::error::Result;
use crate::state::AppState;

const COLLECTION_LIMIT: usize = 50;

/// Distinct collection names, sorted.
pub async fn index(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog().collections())
}

/// Products in a collection, matched by case-insensitive substring.
///
/// An unknown collection is an empty list, not a 404: the shelf just renders
/// empty.
pub async fn show(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog().by_collection(&name, COLLECTION_LIMIT)))
}
