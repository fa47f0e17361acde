//! Cart state and its transitions.
//!
//! A cart holds at most one line per (product, variant) pair; adding an
//! existing pair increments its quantity. `total` and `item_count` are
//! recomputed by full reduction over the items after every transition, with
//! unit prices looked up from the catalog at reduction time. Unknown
//! products contribute zero to the total rather than failing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::CatalogStore;
use crate::types::{CartItemId, ProductId, VariantId};

/// One line in the cart: a quantity of a specific product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

/// Cart state: the line items plus derived totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    total: Decimal,
    item_count: u32,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a cart from a stored item list, recomputing totals against
    /// the current catalog.
    #[must_use]
    pub fn from_items(catalog: &CatalogStore, items: Vec<CartItem>) -> Self {
        let mut cart = Self {
            items,
            total: Decimal::ZERO,
            item_count: 0,
        };
        cart.recalculate(catalog);
        cart
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart, yielding the item list for persistence.
    #[must_use]
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Sum of unit price * quantity over all items.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of quantities over all items.
    #[must_use]
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart holds a line for this (product, variant) pair.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId, variant_id: &VariantId) -> bool {
        self.get(product_id, variant_id).is_some()
    }

    /// The line for this (product, variant) pair, if present.
    #[must_use]
    pub fn get(&self, product_id: &ProductId, variant_id: &VariantId) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|item| &item.product_id == product_id && &item.variant_id == variant_id)
    }

    /// Add a quantity of a variant: merge into the existing line for the
    /// (product, variant) pair, or append a new line.
    ///
    /// Returns the id of the affected line.
    pub fn add(
        &mut self,
        catalog: &CatalogStore,
        product_id: ProductId,
        variant_id: VariantId,
        quantity: u32,
    ) -> CartItemId {
        let id = if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id && item.variant_id == variant_id)
        {
            item.quantity = item.quantity.saturating_add(quantity);
            item.id.clone()
        } else {
            let item = CartItem {
                id: CartItemId::new(format!("cart_{}", Uuid::new_v4())),
                product_id,
                variant_id,
                quantity,
                added_at: Utc::now(),
            };
            let id = item.id.clone();
            self.items.push(item);
            id
        };
        self.recalculate(catalog);
        id
    }

    /// Remove a line by its id. Removing an unknown id is a no-op.
    pub fn remove(&mut self, catalog: &CatalogStore, id: &CartItemId) {
        self.items.retain(|item| &item.id != id);
        self.recalculate(catalog);
    }

    /// Set the quantity of a line. A quantity of zero or less removes the
    /// line instead.
    pub fn set_quantity(&mut self, catalog: &CatalogStore, id: &CartItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove(catalog, id);
            return;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let quantity = quantity.min(i64::from(u32::MAX)) as u32;
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = quantity;
        }
        self.recalculate(catalog);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Decimal::ZERO;
        self.item_count = 0;
    }

    /// Recompute `total` and `item_count` by full reduction over the items.
    fn recalculate(&mut self, catalog: &CatalogStore) {
        self.total = self
            .items
            .iter()
            .map(|item| {
                catalog
                    .price_of(&item.product_id)
                    .map_or(Decimal::ZERO, |price| price * Decimal::from(item.quantity))
            })
            .sum();
        self.item_count = self
            .items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalog() -> CatalogStore {
        CatalogStore::seeded()
    }

    fn variant(product: &str) -> (ProductId, VariantId) {
        let product_id = ProductId::new(product);
        let variant_id = VariantId::compose(&product_id, "Black/White", "9");
        (product_id, variant_id)
    }

    #[test]
    fn test_add_new_item() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        cart.add(&catalog, product_id.clone(), variant_id.clone(), 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 2);
        // Product 1 is $159.99.
        assert_eq!(cart.total(), dec!(319.98));
        assert!(cart.contains(&product_id, &variant_id));
    }

    #[test]
    fn test_add_same_variant_merges() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        let first = cart.add(&catalog, product_id.clone(), variant_id.clone(), 1);
        let second = cart.add(&catalog, product_id.clone(), variant_id.clone(), 2);

        assert_eq!(first, second);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(
            cart.get(&product_id, &variant_id).map(|i| i.quantity),
            Some(3)
        );
    }

    #[test]
    fn test_add_saturates_at_u32_max() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        cart.add(&catalog, product_id.clone(), variant_id.clone(), u32::MAX);
        cart.add(&catalog, product_id.clone(), variant_id.clone(), 1);

        assert_eq!(
            cart.get(&product_id, &variant_id).map(|i| i.quantity),
            Some(u32::MAX)
        );
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_item_count_saturates_across_lines() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let product_id = ProductId::new("1");
        let black = VariantId::compose(&product_id, "Black/White", "9");
        let blue = VariantId::compose(&product_id, "University Blue", "9");
        cart.add(&catalog, product_id.clone(), black, u32::MAX);
        cart.add(&catalog, product_id, blue, 1);

        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_different_variants_are_separate_lines() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let product_id = ProductId::new("1");
        let black = VariantId::compose(&product_id, "Black/White", "9");
        let blue = VariantId::compose(&product_id, "University Blue", "9");
        cart.add(&catalog, product_id.clone(), black, 1);
        cart.add(&catalog, product_id, blue, 1);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_item() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        let id = cart.add(&catalog, product_id, variant_id, 1);
        cart.remove(&catalog, &id);

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        let id = cart.add(&catalog, product_id, variant_id, 3);

        cart.set_quantity(&catalog, &id, 0);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        let id = cart.add(&catalog, product_id, variant_id, 3);

        cart.set_quantity(&catalog, &id, -2);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_replaces_in_place() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("6");
        let id = cart.add(&catalog, product_id, variant_id, 1);

        cart.set_quantity(&catalog, &id, 4);
        assert_eq!(cart.item_count(), 4);
        // Product 6 is $109.99.
        assert_eq!(cart.total(), dec!(439.96));
    }

    #[test]
    fn test_totals_reflect_only_remaining_items() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (p1, v1) = variant("1");
        let (p6, v6) = variant("6");
        let first = cart.add(&catalog, p1, v1, 1);
        cart.add(&catalog, p6, v6, 2);

        cart.remove(&catalog, &first);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), dec!(219.98));
    }

    #[test]
    fn test_unknown_product_contributes_zero() {
        let catalog = catalog();
        let ghost = ProductId::new("999");
        let variant_id = VariantId::compose(&ghost, "Black", "9");
        let mut cart = Cart::new();
        cart.add(&catalog, ghost, variant_id, 5);

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        cart.add(&catalog, product_id, variant_id, 2);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_rehydrate_recomputes_totals() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        cart.add(&catalog, product_id, variant_id, 2);
        let items = cart.clone().into_items();

        let restored = Cart::from_items(&catalog, items);
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_rehydrate_after_price_change() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        cart.add(&catalog, product_id.clone(), variant_id, 1);
        let items = cart.into_items();

        // Totals come from the live catalog, not from the stored items.
        catalog.update(
            &product_id,
            crate::catalog::ProductPatch {
                price: Some(dec!(100)),
                ..crate::catalog::ProductPatch::default()
            },
        );
        let restored = Cart::from_items(&catalog, items);
        assert_eq!(restored.total(), dec!(100));
    }

    #[test]
    fn test_item_serde_roundtrip() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let (product_id, variant_id) = variant("1");
        cart.add(&catalog, product_id, variant_id, 2);

        let json = serde_json::to_string(cart.items()).expect("serialize");
        let items: Vec<CartItem> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(items, cart.items());
    }
}
