//! Handlers backing the home page rails and the filter sidebar metadata.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;
use solestore_core::catalog::Product;
use solestore_core::types::ProductCategory;

use crate::state::AppState;

const FEATURED_LIMIT: usize = 8;
const NEW_ARRIVALS_LIMIT: usize = 8;

/// Distinct categories present in the catalog.
pub async fn categories(State(state): State<AppState>) -> Json<Vec<ProductCategory>> {
    Json(state.catalog().categories())
}

#[derive(Debug, Serialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Catalog price bounds, used to seed the price slider.
pub async fn price_range(State(state): State<AppState>) -> Json<PriceRange> {
    let (min, max) = state.catalog().price_range();
    Json(PriceRange { min, max })
}

/// Featured rail: sale items first, then the best rated.
pub async fn featured(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().featured(FEATURED_LIMIT))
}

/// New arrivals rail, newest first.
pub async fn new_arrivals(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().new_arrivals(NEW_ARRIVALS_LIMIT))
}
