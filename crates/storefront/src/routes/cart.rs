//! Cart route handlers.
//!
//! The cart lives in the session and is rehydrated against the live catalog
//! on every request, so a price change between visits is reflected in the
//! totals rather than honoring a stale snapshot. Every mutation saves the
//! item list back before responding.

use axum::{
    Json,
    extract::State,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solestore_core::cart::{Cart, CartItem};
use solestore_core::types::{CartItemId, ProductId, VariantId, format_usd};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::models::{load_cart, save_cart};
use crate::state::AppState;

/// A cart line enriched with catalog data for display.
#[derive(Debug, Serialize)]
pub struct CartItemView {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub name: String,
    pub image: Option<String>,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub total: Decimal,
    pub total_display: String,
}

fn render(state: &AppState, cart: &Cart) -> CartView {
    let items = cart
        .items()
        .iter()
        .map(|item| view_item(state, item))
        .collect();
    CartView {
        items,
        item_count: cart.item_count(),
        total: cart.total(),
        total_display: format_usd(cart.total()),
    }
}

fn view_item(state: &AppState, item: &CartItem) -> CartItemView {
    let product = state.catalog().by_id(&item.product_id);
    let name = product
        .as_ref()
        .map_or_else(|| "Unavailable product".to_owned(), |p| p.name.clone());
    let image = product.as_ref().and_then(|p| p.images.first().cloned());
    let unit_price = product.as_ref().map_or(Decimal::ZERO, |p| p.price);
    CartItemView {
        id: item.id.clone(),
        product_id: item.product_id.clone(),
        variant_id: item.variant_id.clone(),
        name,
        image,
        unit_price,
        quantity: item.quantity,
        line_total: unit_price * Decimal::from(item.quantity),
    }
}

/// Current cart contents and totals.
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session, state.catalog()).await;
    Ok(Json(render(&state, &cart)))
}

#[derive(Debug, Deserialize)]
pub struct AddToCart {
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

/// Add a variant to the cart, merging into an existing line for the same
/// (product, variant) pair.
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddToCart>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .by_id(&payload.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", payload.product_id)))?;
    if payload.quantity == 0 {
        return Err(AppError::BadRequest("Quantity must be at least 1".into()));
    }
    if !state
        .catalog()
        .variant_available(&payload.product_id, &payload.size, &payload.color)
    {
        return Err(AppError::BadRequest(format!(
            "Size {} in {} is not available for {}",
            payload.size, payload.color, product.name
        )));
    }

    let variant_id = VariantId::compose(&payload.product_id, &payload.color, &payload.size);
    let mut cart = load_cart(&session, state.catalog()).await;
    cart.add(
        state.catalog(),
        payload.product_id,
        variant_id,
        payload.quantity,
    );
    save_cart(&session, &cart).await?;
    Ok(Json(render(&state, &cart)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantity {
    pub item_id: CartItemId,
    pub quantity: i64,
}

/// Set a line's quantity. Zero or negative removes the line.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateQuantity>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session, state.catalog()).await;
    cart.set_quantity(state.catalog(), &payload.item_id, payload.quantity);
    save_cart(&session, &cart).await?;
    Ok(Json(render(&state, &cart)))
}

#[derive(Debug, Deserialize)]
pub struct RemoveItem {
    pub item_id: CartItemId,
}

/// Remove a line from the cart. Removing an unknown line is a no-op.
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RemoveItem>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session, state.catalog()).await;
    cart.remove(state.catalog(), &payload.item_id);
    save_cart(&session, &cart).await?;
    Ok(Json(render(&state, &cart)))
}

/// Empty the cart.
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session, state.catalog()).await;
    cart.clear();
    save_cart(&session, &cart).await?;
    Ok(Json(render(&state, &cart)))
}

#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
}

/// Total quantity across all lines, for the header badge.
pub async fn count(State(state): State<AppState>, session: Session) -> Result<Json<CartCount>> {
    let cart = load_cart(&session, state.catalog()).await;
    Ok(Json(CartCount {
        count: cart.item_count(),
    }))
}
