//! Product route handlers.
//!
//! The listing endpoint drives the storefront filter sidebar: every query
//! parameter maps to one criterion of the core filter pipeline, and all of
//! them AND-combine. A fixed artificial delay simulates the network round
//! trip a real catalog backend would cost; superseded requests are not
//! cancelled, they simply resolve and are overwritten client-side.

use std::time::Duration;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use solestore_core::catalog::{Product, ProductFilters, ProductPage, SortKey};
use solestore_core::types::ProductId;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for product listing and search.
///
/// `colors` and `sizes` are comma-separated lists.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub category: Option<String>,
    pub min_price: Option<rust_decimal::Decimal>,
    pub max_price: Option<rust_decimal::Decimal>,
    pub colors: Option<String>,
    pub sizes: Option<String>,
    pub collection: Option<String>,
    pub in_stock: Option<bool>,
    pub on_sale: Option<bool>,
    pub min_rating: Option<f32>,
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

fn split_list(raw: Option<&String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

impl FilterQuery {
    /// Convert the raw query into typed filter criteria.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` for an unknown category or sort key.
    pub fn into_filters(self) -> Result<ProductFilters> {
        let category = self
            .category
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|e: solestore_core::types::UnknownCategory| {
                AppError::BadRequest(e.to_string())
            })?;
        let sort_by = self
            .sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(ProductFilters {
            category,
            min_price: self.min_price,
            max_price: self.max_price,
            colors: split_list(self.colors.as_ref()),
            sizes: split_list(self.sizes.as_ref()),
            collection: self.collection,
            in_stock: self.in_stock,
            on_sale: self.on_sale,
            min_rating: self.min_rating,
            sort_by,
        })
    }
}

/// Simulate the latency of a real catalog backend.
async fn simulate_latency(state: &AppState) {
    let delay = state.config().catalog_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}

/// Product listing with filters, sorting, and pagination.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<ProductPage>> {
    simulate_latency(&state).await;

    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(state.config().default_page_size);
    let filters = query.into_filters()?;

    let result = state.catalog().filter(&filters, page, limit);
    tracing::debug!(total = result.total, page, "Product listing served");
    Ok(Json(result))
}

/// Product detail.
pub async fn show(
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

/// Related products: same category, best rated first.
pub async fn related(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let id = ProductId::new(id);
    if state.catalog().by_id(&id).is_none() {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    Ok(Json(state.catalog().related(&id, RELATED_LIMIT)))
}

const RELATED_LIMIT: usize = 4;

/// Purchasable options for the product page selectors.
#[derive(Debug, serde::Serialize)]
pub struct ProductOptions {
    pub sizes: Vec<solestore_core::catalog::SizeOption>,
    pub colors: Vec<solestore_core::catalog::ColorOption>,
}

/// Sizes currently purchasable and colorways for a product.
pub async fn options(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductOptions>> {
    let id = ProductId::new(id);
    if state.catalog().by_id(&id).is_none() {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    Ok(Json(ProductOptions {
        sizes: state.catalog().available_sizes(&id),
        colors: state.catalog().available_colors(&id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use solestore_core::types::ProductCategory;

    #[test]
    fn test_filter_query_conversion() {
        let query = FilterQuery {
            category: Some("running".into()),
            min_price: Some(dec!(100)),
            colors: Some("volt, black/white".into()),
            sizes: Some("9,10".into()),
            sort: Some("price_asc".into()),
            ..FilterQuery::default()
        };
        let filters = query.into_filters().expect("valid query");
        assert_eq!(filters.category, Some(ProductCategory::Running));
        assert_eq!(filters.min_price, Some(dec!(100)));
        assert_eq!(filters.colors, vec!["volt", "black/white"]);
        assert_eq!(filters.sizes, vec!["9", "10"]);
        assert_eq!(filters.sort_by, Some(SortKey::PriceAsc));
    }

    #[test]
    fn test_filter_query_rejects_unknown_category() {
        let query = FilterQuery {
            category: Some("sandals".into()),
            ..FilterQuery::default()
        };
        assert!(query.into_filters().is_err());
    }

    #[test]
    fn test_filter_query_rejects_unknown_sort() {
        let query = FilterQuery {
            sort: Some("best".into()),
            ..FilterQuery::default()
        };
        assert!(query.into_filters().is_err());
    }

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list(Some(&" a, b ,,c".to_owned())),
            vec!["a", "b", "c"]
        );
        assert!(split_list(None).is_empty());
    }
}
