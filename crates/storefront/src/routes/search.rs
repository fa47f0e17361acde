//! Search route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use solestore_core::catalog::ProductPage;

use crate::error::Result;
use crate::routes::products::FilterQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchTerm {
    #[serde(default)]
    pub q: String,
}

/// Search the catalog, then run the hits through the same filter, sort, and
/// pagination pipeline as the product listing.
pub async fn index(
    State(state): State<AppState>,
    Query(term): Query<SearchTerm>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<ProductPage>> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(state.config().default_page_size);
    let filters = query.into_filters()?;

    let result = state.catalog().search_filtered(&term.q, &filters, page, limit);
    tracing::debug!(query = %term.q, total = result.total, "Search served");
    Ok(Json(result))
}
