//! Dashboard aggregates.

use axum::{Json, extract::State};
use serde::Serialize;
use solestore_core::catalog::CatalogStats;
use solestore_core::orders::OrderStats;

use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub catalog: CatalogStats,
    pub orders: OrderStats,
}

/// Catalog and order aggregates for the dashboard landing page.
pub async fn stats(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Json<DashboardStats> {
    Json(DashboardStats {
        catalog: state.catalog().stats(),
        orders: state.orders().stats(),
    })
}
