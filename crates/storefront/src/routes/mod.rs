//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (filter/sort/paginate)
//! GET  /products/{id}          - Product detail
//! GET  /products/{id}/related  - Related products
//! GET  /products/{id}/options  - Purchasable sizes and colorways
//! GET  /search?q=...           - Search with optional filters
//! GET  /collections            - Distinct collections
//! GET  /collections/{name}     - Products in a collection
//! GET  /categories             - Distinct categories
//! GET  /price-range            - Catalog price bounds
//! GET  /featured               - Featured products rail
//! GET  /new-arrivals           - New arrivals rail
//!
//! # Cart (session-backed)
//! GET  /cart                   - Cart contents and totals
//! POST /cart/add               - Add a variant to the cart
//! POST /cart/update            - Set a line's quantity (<= 0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart badge count
//! ```

pub mod cart;
pub mod collections;
pub mod home;
pub mod products;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/related", get(products::related))
        .route("/{id}/options", get(products::options))
}

/// Create the collection routes router.
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(collections::index))
        .route("/{name}", get(collections::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the complete storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/collections", collection_routes())
        .nest("/cart", cart_routes())
        .route("/search", get(search::index))
        .route("/categories", get(home::categories))
        .route("/price-range", get(home::price_range))
        .route("/featured", get(home::featured))
        .route("/new-arrivals", get(home::new_arrivals))
}
