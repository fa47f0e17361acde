//! Product catalog: types, in-memory store, and read/mutation operations.
//!
//! The store is a process-local mock standing in for a real datastore. All
//! operations are linear scans over a `RwLock<Vec<Product>>`; an empty result
//! set is a valid outcome, never an error. Admin mutations edit the shared
//! vector in place under the single implicit writer of this process.

pub mod filter;
pub mod seed;
mod validate;

pub use filter::{ProductFilters, ProductPage, SortKey};
pub use validate::validate;

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductCategory, ProductId, ReviewId, UserId};

/// A size option on a product (e.g. US shoe size "10").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    /// Canonical value used in filters and variant keys.
    pub value: String,
    /// Label shown to shoppers.
    pub display: String,
    /// Whether this size can currently be purchased.
    pub available: bool,
}

impl SizeOption {
    #[must_use]
    pub fn new(value: impl Into<String>, available: bool) -> Self {
        let value = value.into();
        Self {
            display: value.clone(),
            value,
            available,
        }
    }
}

/// A colorway option on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    /// Hex color code, e.g. `#0033A0`.
    pub hex: String,
    /// Color-specific image URL, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ColorOption {
    #[must_use]
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
            image: None,
        }
    }
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub user_name: String,
    /// 1-5 stars.
    pub rating: u8,
    pub title: String,
    pub comment: String,
    /// Verified purchase.
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    /// Number of people who found this review helpful.
    pub helpful: u32,
}

/// A product record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Current price in USD.
    pub price: Decimal,
    /// Pre-sale price; present only while the product is on sale, and then
    /// strictly greater than `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub images: Vec<String>,
    /// Interactive 3D model URL, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    pub sizes: Vec<SizeOption>,
    pub colors: Vec<ColorOption>,
    pub stock: u32,
    pub category: ProductCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Average rating, 0-5.
    pub rating: f32,
    pub reviews: Vec<Review>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// A product is on sale when it carries a pre-sale price.
    #[must_use]
    pub const fn on_sale(&self) -> bool {
        self.original_price.is_some()
    }
}

/// Fields required to create a product through the admin surface.
///
/// Identity and timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub model_url: Option<String>,
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
    #[serde(default)]
    pub colors: Vec<ColorOption>,
    pub stock: u32,
    pub category: ProductCategory,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Partial update for an existing product. `None` fields are left untouched.
///
/// Option-of-Option fields distinguish "leave as is" from "clear the value".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    #[serde(default, with = "double_option")]
    pub original_price: Option<Option<Decimal>>,
    pub images: Option<Vec<String>>,
    #[serde(default, with = "double_option")]
    pub model_url: Option<Option<String>>,
    pub sizes: Option<Vec<SizeOption>>,
    pub colors: Option<Vec<ColorOption>>,
    pub stock: Option<u32>,
    pub category: Option<ProductCategory>,
    #[serde(default, with = "double_option")]
    pub collection: Option<Option<String>>,
    pub rating: Option<f32>,
}

/// Serde adapter so an absent field deserializes to `None` while an explicit
/// `null` deserializes to `Some(None)`.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            original_price: product.original_price,
            images: product.images.clone(),
            model_url: product.model_url.clone(),
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
            stock: product.stock,
            category: product.category,
            collection: product.collection.clone(),
            rating: product.rating,
            reviews: product.reviews.clone(),
        }
    }
}

impl ProductPatch {
    /// Apply this patch to a product, restamping `updated_at`.
    pub fn apply(self, product: &mut Product, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(images) = self.images {
            product.images = images;
        }
        if let Some(model_url) = self.model_url {
            product.model_url = model_url;
        }
        if let Some(sizes) = self.sizes {
            product.sizes = sizes;
        }
        if let Some(colors) = self.colors {
            product.colors = colors;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(collection) = self.collection {
            product.collection = collection;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        product.updated_at = now;
    }
}

/// Aggregate catalog numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_products: usize,
    /// Sum of price * stock over the catalog.
    pub total_inventory_value: Decimal,
    pub average_price: Decimal,
    pub categories: usize,
    pub collections: usize,
    pub low_stock_count: usize,
    pub on_sale_count: usize,
}

/// Stock threshold below which a product counts as low-stock in [`CatalogStats`].
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// In-memory product catalog.
///
/// Cheap to share behind an `Arc`; reads take a shared lock, admin mutations
/// an exclusive one. A poisoned lock is recovered, not propagated.
#[derive(Debug)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CatalogStore {
    /// Create a store over an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Create a store seeded with the mock dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::products())
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // -------------------------------------------------------------------------
    // Read operations
    // -------------------------------------------------------------------------

    /// Unfiltered catalog page.
    #[must_use]
    pub fn all(&self, page: u32, limit: u32) -> ProductPage {
        filter::paginate(self.read().clone(), page, limit)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn by_id(&self, id: &ProductId) -> Option<Product> {
        self.read().iter().find(|p| &p.id == id).cloned()
    }

    /// Current price of a product, if it exists.
    #[must_use]
    pub fn price_of(&self, id: &ProductId) -> Option<Decimal> {
        self.read().iter().find(|p| &p.id == id).map(|p| p.price)
    }

    /// Filter, sort, and paginate the catalog.
    #[must_use]
    pub fn filter(&self, filters: &ProductFilters, page: u32, limit: u32) -> ProductPage {
        filter::apply(self.read().clone(), filters, page, limit)
    }

    /// Substring search over name, description, collection, and color names.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<Product> {
        let term = query.to_lowercase();
        self.read()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || p.collection
                        .as_ref()
                        .is_some_and(|c| c.to_lowercase().contains(&term))
                    || p.colors
                        .iter()
                        .any(|c| c.name.to_lowercase().contains(&term))
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Search, then apply filters, sort, and pagination to the hits.
    ///
    /// Search candidates are capped at [`SEARCH_CANDIDATE_LIMIT`] before
    /// filtering, so a very broad query cannot blow up the pipeline.
    #[must_use]
    pub fn search_filtered(
        &self,
        query: &str,
        filters: &ProductFilters,
        page: u32,
        limit: u32,
    ) -> ProductPage {
        let hits = self.search(query, SEARCH_CANDIDATE_LIMIT);
        filter::apply(hits, filters, page, limit)
    }

    /// Featured products: on sale or highly rated, sale items first, then by
    /// rating descending.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<Product> {
        let mut picks: Vec<Product> = self
            .read()
            .iter()
            .filter(|p| p.on_sale() || p.rating >= 4.5)
            .cloned()
            .collect();
        picks.sort_by(|a, b| {
            b.on_sale()
                .cmp(&a.on_sale())
                .then(b.rating.total_cmp(&a.rating))
        });
        picks.truncate(limit);
        picks
    }

    /// Most recently created products first.
    #[must_use]
    pub fn new_arrivals(&self, limit: usize) -> Vec<Product> {
        let mut products = self.read().clone();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        products.truncate(limit);
        products
    }

    /// Products whose collection contains the given name (case-insensitive).
    #[must_use]
    pub fn by_collection(&self, collection: &str, limit: usize) -> Vec<Product> {
        let term = collection.to_lowercase();
        self.read()
            .iter()
            .filter(|p| {
                p.collection
                    .as_ref()
                    .is_some_and(|c| c.to_lowercase().contains(&term))
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Products in the same category as the given product, best rated first.
    ///
    /// Returns an empty list when the product does not exist.
    #[must_use]
    pub fn related(&self, id: &ProductId, limit: usize) -> Vec<Product> {
        let Some(current) = self.by_id(id) else {
            return Vec::new();
        };
        let mut related: Vec<Product> = self
            .read()
            .iter()
            .filter(|p| p.id != *id && p.category == current.category)
            .cloned()
            .collect();
        related.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        related.truncate(limit);
        related
    }

    /// Sorted distinct categories present in the catalog.
    #[must_use]
    pub fn categories(&self) -> Vec<ProductCategory> {
        let set: BTreeSet<ProductCategory> = self.read().iter().map(|p| p.category).collect();
        set.into_iter().collect()
    }

    /// Sorted distinct collection names present in the catalog.
    #[must_use]
    pub fn collections(&self) -> Vec<String> {
        let set: BTreeSet<String> = self
            .read()
            .iter()
            .filter_map(|p| p.collection.clone())
            .collect();
        set.into_iter().collect()
    }

    /// Lowest and highest product price; `(0, 0)` for an empty catalog.
    #[must_use]
    pub fn price_range(&self) -> (Decimal, Decimal) {
        let products = self.read();
        let min = products.iter().map(|p| p.price).min();
        let max = products.iter().map(|p| p.price).max();
        match (min, max) {
            (Some(min), Some(max)) => (min, max),
            _ => (Decimal::ZERO, Decimal::ZERO),
        }
    }

    /// Purchasable sizes for a product; empty when the product is unknown.
    #[must_use]
    pub fn available_sizes(&self, id: &ProductId) -> Vec<SizeOption> {
        self.by_id(id)
            .map(|p| p.sizes.into_iter().filter(|s| s.available).collect())
            .unwrap_or_default()
    }

    /// Colorways for a product; empty when the product is unknown.
    #[must_use]
    pub fn available_colors(&self, id: &ProductId) -> Vec<ColorOption> {
        self.by_id(id).map(|p| p.colors).unwrap_or_default()
    }

    /// Whether a specific size + color combination can be purchased.
    #[must_use]
    pub fn variant_available(&self, id: &ProductId, size: &str, color: &str) -> bool {
        let Some(product) = self.by_id(id) else {
            return false;
        };
        let size_ok = product
            .sizes
            .iter()
            .any(|s| s.value == size && s.available);
        let color_ok = product
            .colors
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(color));
        size_ok && color_ok
    }

    /// Products at or below the stock threshold, lowest stock first.
    #[must_use]
    pub fn low_stock(&self, threshold: u32) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .read()
            .iter()
            .filter(|p| p.stock <= threshold)
            .cloned()
            .collect();
        products.sort_by_key(|p| p.stock);
        products
    }

    /// Aggregate numbers for the admin dashboard.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let products = self.read();
        let total_products = products.len();
        let total_inventory_value = products
            .iter()
            .map(|p| p.price * Decimal::from(p.stock))
            .sum();
        let average_price = if total_products == 0 {
            Decimal::ZERO
        } else {
            let sum: Decimal = products.iter().map(|p| p.price).sum();
            (sum / Decimal::from(total_products)).round_dp(2)
        };
        let categories: BTreeSet<ProductCategory> = products.iter().map(|p| p.category).collect();
        let collections: BTreeSet<&String> =
            products.iter().filter_map(|p| p.collection.as_ref()).collect();

        CatalogStats {
            total_products,
            total_inventory_value,
            average_price,
            categories: categories.len(),
            collections: collections.len(),
            low_stock_count: products
                .iter()
                .filter(|p| p.stock <= LOW_STOCK_THRESHOLD)
                .count(),
            on_sale_count: products.iter().filter(|p| p.on_sale()).count(),
        }
    }

    // -------------------------------------------------------------------------
    // Admin mutations
    // -------------------------------------------------------------------------

    /// Insert a new product, assigning its id and timestamps.
    ///
    /// Ids follow the mock dataset's sequential scheme (`len + 1`). Callers
    /// are expected to run [`validate`] on the draft first.
    pub fn create(&self, draft: ProductDraft) -> Product {
        let mut products = self.write();
        let now = Utc::now();
        let product = Product {
            id: ProductId::new((products.len() + 1).to_string()),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            original_price: draft.original_price,
            images: draft.images,
            model_url: draft.model_url,
            sizes: draft.sizes,
            colors: draft.colors,
            stock: draft.stock,
            category: draft.category,
            collection: draft.collection,
            rating: draft.rating,
            reviews: draft.reviews,
            created_at: now,
            updated_at: now,
        };
        products.push(product.clone());
        product
    }

    /// Apply a partial update in place. Returns the updated product, or
    /// `None` when the id is unknown.
    pub fn update(&self, id: &ProductId, patch: ProductPatch) -> Option<Product> {
        let mut products = self.write();
        let product = products.iter_mut().find(|p| &p.id == id)?;
        patch.apply(product, Utc::now());
        Some(product.clone())
    }

    /// Set the stock count for a product.
    pub fn update_stock(&self, id: &ProductId, stock: u32) -> Option<Product> {
        let mut products = self.write();
        let product = products.iter_mut().find(|p| &p.id == id)?;
        product.stock = stock;
        product.updated_at = Utc::now();
        Some(product.clone())
    }

    /// Remove a product. Returns whether anything was deleted.
    pub fn delete(&self, id: &ProductId) -> bool {
        let mut products = self.write();
        let before = products.len();
        products.retain(|p| &p.id != id);
        products.len() != before
    }
}

/// Cap on search hits fed into the filter pipeline.
pub const SEARCH_CANDIDATE_LIMIT: usize = 100;
