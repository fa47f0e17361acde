//! Session-backed models for the storefront.

use solestore_core::cart::{Cart, CartItem};
use solestore_core::catalog::CatalogStore;
use tower_sessions::Session;

use crate::error::Result;

/// Session keys used by the storefront.
pub mod session_keys {
    /// The serialized cart item list.
    pub const CART_ITEMS: &str = "cart.items";
}

/// Load the cart from the session, recomputing totals against the catalog.
///
/// A missing or corrupt stored blob is logged and treated as an empty cart;
/// shoppers should never be locked out of the store by a bad cookie.
pub async fn load_cart(session: &Session, catalog: &CatalogStore) -> Cart {
    match session.get::<Vec<CartItem>>(session_keys::CART_ITEMS).await {
        Ok(Some(items)) => Cart::from_items(catalog, items),
        Ok(None) => Cart::new(),
        Err(error) => {
            tracing::warn!(%error, "Failed to load cart from session, starting empty");
            Cart::new()
        }
    }
}

/// Persist the cart's item list to the session.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session
        .insert(session_keys::CART_ITEMS, cart.items())
        .await?;
    Ok(())
}
