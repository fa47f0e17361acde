//! The filter/sort/paginate pipeline for product queries.
//!
//! All predicates are AND-combined. Array-valued criteria (colors, sizes)
//! use ANY-match semantics against the product's own option lists. Sorting
//! is a stable total order by a single key; ties keep input order. There are
//! no error conditions: an empty page is a valid terminal state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;
use crate::types::ProductCategory;

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    RatingDesc,
    Newest,
}

impl std::str::FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "name_asc" => Ok(Self::NameAsc),
            "name_desc" => Ok(Self::NameDesc),
            "rating_desc" => Ok(Self::RatingDesc),
            "newest" => Ok(Self::Newest),
            other => Err(UnknownSortKey(other.to_owned())),
        }
    }
}

/// Error for an unrecognized sort key label.
#[derive(Debug, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

/// Filter criteria for product queries. All present criteria must match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilters {
    pub category: Option<ProductCategory>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Color criteria; a product matches when ANY of its colors matches ANY
    /// entry, by case-insensitive name substring or exact hex code.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Size criteria; a product matches when ANY of its *available* sizes
    /// has a value in this list.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Case-insensitive substring match on the collection name.
    pub collection: Option<String>,
    /// `true` keeps only in-stock products, `false` only out-of-stock ones.
    pub in_stock: Option<bool>,
    /// `true` keeps only sale products, `false` only full-price ones.
    pub on_sale: Option<bool>,
    pub min_rating: Option<f32>,
    pub sort_by: Option<SortKey>,
}

impl ProductFilters {
    /// Whether a product satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category
            && product.category != category
        {
            return false;
        }
        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }
        if !self.colors.is_empty() {
            let matched = product.colors.iter().any(|color| {
                self.colors.iter().any(|wanted| {
                    color
                        .name
                        .to_lowercase()
                        .contains(&wanted.to_lowercase())
                        || color.hex.eq_ignore_ascii_case(wanted)
                })
            });
            if !matched {
                return false;
            }
        }
        if !self.sizes.is_empty() {
            let matched = product
                .sizes
                .iter()
                .any(|size| size.available && self.sizes.contains(&size.value));
            if !matched {
                return false;
            }
        }
        if let Some(collection) = &self.collection {
            let matched = product
                .collection
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(&collection.to_lowercase()));
            if !matched {
                return false;
            }
        }
        if let Some(in_stock) = self.in_stock
            && (product.stock > 0) != in_stock
        {
            return false;
        }
        if let Some(on_sale) = self.on_sale
            && product.on_sale() != on_sale
        {
            return false;
        }
        if let Some(min_rating) = self.min_rating
            && product.rating < min_rating
        {
            return false;
        }
        true
    }
}

/// One page of a filtered product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Total matches across all pages.
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Filter, sort, and paginate a product list.
#[must_use]
pub fn apply(products: Vec<Product>, filters: &ProductFilters, page: u32, limit: u32) -> ProductPage {
    let mut matched: Vec<Product> = products
        .into_iter()
        .filter(|p| filters.matches(p))
        .collect();
    if let Some(key) = filters.sort_by {
        sort(&mut matched, key);
    }
    paginate(matched, page, limit)
}

/// Stable sort by a single key; ties keep input order.
pub fn sort(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::NameAsc => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => products.sort_by(|a, b| b.name.cmp(&a.name)),
        SortKey::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

/// Slice one 1-based page out of a list.
///
/// A zero `page` is treated as the first page; a zero `limit` yields an
/// empty page with the full total.
#[must_use]
pub fn paginate(products: Vec<Product>, page: u32, limit: u32) -> ProductPage {
    let page = page.max(1);
    let total = products.len();
    let start = (page as usize - 1).saturating_mul(limit as usize);
    let slice: Vec<Product> = products
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    ProductPage {
        products: slice,
        total,
        page,
        limit,
        has_next: (page as usize).saturating_mul(limit as usize) < total,
        has_previous: page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use rust_decimal_macros::dec;

    fn seeded() -> Vec<Product> {
        CatalogStore::seeded().all(1, 100).products
    }

    #[test]
    fn test_every_result_satisfies_active_predicates() {
        let filters = ProductFilters {
            category: Some(ProductCategory::Running),
            min_price: Some(dec!(100)),
            in_stock: Some(true),
            min_rating: Some(4.0),
            ..ProductFilters::default()
        };
        let page = apply(seeded(), &filters, 1, 50);
        assert!(!page.products.is_empty());
        for p in &page.products {
            assert!(filters.matches(p));
        }
    }

    #[test]
    fn test_running_min_price_example() {
        // The canonical sidebar query: category=running, min_price=100.
        let filters = ProductFilters {
            category: Some(ProductCategory::Running),
            min_price: Some(dec!(100)),
            sort_by: Some(SortKey::PriceAsc),
            ..ProductFilters::default()
        };
        let page = apply(seeded(), &filters, 1, 50);
        let names: Vec<&str> = page.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Air Zoom Winflo 9",
                "Pegasus 40",
                "React Infinity Run Flyknit",
                "Air Zoom Pegasus 39",
                "Air Max 270 React",
            ]
        );
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_color_filter_matches_name_substring_or_hex() {
        let by_name = ProductFilters {
            colors: vec!["volt".into()],
            ..ProductFilters::default()
        };
        let hits = apply(seeded(), &by_name, 1, 50);
        assert!(!hits.products.is_empty());
        for p in &hits.products {
            assert!(p.colors.iter().any(|c| c.name.to_lowercase().contains("volt")));
        }

        let by_hex = ProductFilters {
            colors: vec!["#0033A0".into()],
            ..ProductFilters::default()
        };
        let hex_hits = apply(seeded(), &by_hex, 1, 50);
        assert!(!hex_hits.products.is_empty());
        for p in &hex_hits.products {
            assert!(p.colors.iter().any(|c| c.hex.eq_ignore_ascii_case("#0033A0")));
        }
    }

    #[test]
    fn test_size_filter_requires_availability() {
        // Product 1 lists size 11 as unavailable; a size-11 filter must not
        // return it unless some other available size matches.
        let filters = ProductFilters {
            sizes: vec!["11".into()],
            ..ProductFilters::default()
        };
        let page = apply(seeded(), &filters, 1, 50);
        for p in &page.products {
            assert!(p.sizes.iter().any(|s| s.value == "11" && s.available));
        }
        assert!(!page.products.iter().any(|p| p.id.as_str() == "1"));
    }

    #[test]
    fn test_on_sale_flag_both_ways() {
        let sale = apply(
            seeded(),
            &ProductFilters {
                on_sale: Some(true),
                ..ProductFilters::default()
            },
            1,
            50,
        );
        assert_eq!(sale.total, 5);
        assert!(sale.products.iter().all(Product::on_sale));

        let full_price = apply(
            seeded(),
            &ProductFilters {
                on_sale: Some(false),
                ..ProductFilters::default()
            },
            1,
            50,
        );
        assert_eq!(full_price.total, 10);
        assert!(!full_price.products.iter().any(Product::on_sale));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let filters = ProductFilters {
            category: Some(ProductCategory::Golf),
            ..ProductFilters::default()
        };
        let page = apply(seeded(), &filters, 1, 50);
        assert_eq!(page.total, 0);
        assert!(page.products.is_empty());
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_sort_price_asc_desc() {
        let mut products = seeded();
        sort(&mut products, SortKey::PriceAsc);
        assert!(products.windows(2).all(|w| w[0].price <= w[1].price));
        sort(&mut products, SortKey::PriceDesc);
        assert!(products.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn test_sort_name_lexicographic() {
        let mut products = seeded();
        sort(&mut products, SortKey::NameAsc);
        assert!(products.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_no_sort_key_keeps_input_order() {
        let page = apply(seeded(), &ProductFilters::default(), 1, 50);
        let ids: Vec<&str> = page.products.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<String> = (1..=15).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_pagination_partitions_without_overlap() {
        let all = seeded();
        let mut seen = Vec::new();
        let mut page_no = 1;
        loop {
            let page = paginate(all.clone(), page_no, 4);
            assert_eq!(page.has_next, (page_no as usize) * 4 < all.len());
            assert_eq!(page.has_previous, page_no > 1);
            if page.products.is_empty() {
                break;
            }
            seen.extend(page.products.iter().map(|p| p.id.clone()));
            if !page.has_next {
                break;
            }
            page_no += 1;
        }
        let expected: Vec<_> = all.iter().map(|p| p.id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_paginate_page_zero_clamps_to_first() {
        let page = paginate(seeded(), 0, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.products.len(), 5);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_paginate_past_the_end() {
        let page = paginate(seeded(), 99, 10);
        assert!(page.products.is_empty());
        assert_eq!(page.total, 15);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("price_asc".parse::<SortKey>().ok(), Some(SortKey::PriceAsc));
        assert_eq!("newest".parse::<SortKey>().ok(), Some(SortKey::Newest));
        assert!("best".parse::<SortKey>().is_err());
    }
}
