//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Health check
//!
//! # Auth
//! POST   /auth/login              - Log in with username/password
//! POST   /auth/logout             - Clear the session
//! GET    /auth/me                 - Current admin identity
//!
//! # Products (authenticated)
//! GET    /products                - Paginated product list
//! GET    /products/low-stock      - Products at or below the stock threshold
//! GET    /products/{id}           - Product detail
//! POST   /products                - Create a product (validated)
//! PATCH  /products/{id}           - Partial update (validated result)
//! PUT    /products/{id}/stock     - Set stock count
//! DELETE /products/{id}           - Delete a product
//!
//! # Orders (authenticated)
//! GET    /orders                  - List, optional ?status= and ?q= search
//! GET    /orders/{id}             - Order detail
//! PUT    /orders/{id}/status      - Set order status (any to any)
//!
//! # Dashboard (authenticated)
//! GET    /dashboard/stats         - Catalog and order aggregates
//! ```

pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/low-stock", get(products::low_stock))
        .route(
            "/{id}",
            get(products::show)
                .patch(products::update)
                .delete(products::destroy),
        )
        .route("/{id}/stock", put(products::set_stock))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", put(orders::set_status))
}

/// Create the complete admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
        .route("/dashboard/stats", get(dashboard::stats))
}
