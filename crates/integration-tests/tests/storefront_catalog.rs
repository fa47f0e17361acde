//! Storefront catalog, search, and metadata endpoints.

use axum::http::StatusCode;
use solestore_integration_tests::{body_json, expect_json, get, storefront_app};

#[tokio::test]
async fn test_product_listing_defaults() {
    let app = storefront_app();
    let body = expect_json(get(&app, "/products", None).await, StatusCode::OK).await;

    assert_eq!(body["total"], 15);
    assert_eq!(body["page"], 1);
    assert_eq!(body["products"].as_array().map(Vec::len), Some(15));
    assert_eq!(body["has_next"], false);
    assert_eq!(body["has_previous"], false);
}

#[tokio::test]
async fn test_pagination_flags() {
    let app = storefront_app();
    let body = expect_json(
        get(&app, "/products?page=2&limit=6", None).await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(body["total"], 15);
    assert_eq!(body["products"].as_array().map(Vec::len), Some(6));
    assert_eq!(body["has_next"], true);
    assert_eq!(body["has_previous"], true);

    // Past the end: empty page, not an error
    let body = expect_json(
        get(&app, "/products?page=9&limit=6", None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["products"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["has_next"], false);
}

#[tokio::test]
async fn test_filters_combine_with_and() {
    let app = storefront_app();
    let body = expect_json(
        get(
            &app,
            "/products?category=running&on_sale=true&min_price=100",
            None,
        )
        .await,
        StatusCode::OK,
    )
    .await;

    for product in body["products"].as_array().into_iter().flatten() {
        assert_eq!(product["category"], "running");
        assert!(product.get("original_price").is_some());
        let price: f64 = product["price"]
            .as_str()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default();
        assert!(price >= 100.0);
    }
}

#[tokio::test]
async fn test_sort_by_price_ascending() {
    let app = storefront_app();
    let body = expect_json(
        get(&app, "/products?sort=price_asc", None).await,
        StatusCode::OK,
    )
    .await;

    let prices: Vec<f64> = body["products"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|p| p["price"].as_str())
        .filter_map(|p| p.parse().ok())
        .collect();
    assert_eq!(prices.len(), 15);
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let app = storefront_app();
    let response = get(&app, "/products?category=sandals", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_detail_and_missing() {
    let app = storefront_app();

    let body = expect_json(get(&app, "/products/1", None).await, StatusCode::OK).await;
    assert_eq!(body["id"], "1");
    assert_eq!(body["name"], "Air Max 270 React");

    let response = get(&app, "/products/999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_related_products_share_category() {
    let app = storefront_app();
    let detail = expect_json(get(&app, "/products/1", None).await, StatusCode::OK).await;
    let category = detail["category"].clone();

    let related = expect_json(get(&app, "/products/1/related", None).await, StatusCode::OK).await;
    let related = related.as_array().cloned().unwrap_or_default();
    assert!(!related.is_empty());
    for product in &related {
        assert_ne!(product["id"], "1");
        assert_eq!(product["category"], category);
    }
}

#[tokio::test]
async fn test_search_matches_name_and_caps_results() {
    let app = storefront_app();
    let body = expect_json(get(&app, "/search?q=air", None).await, StatusCode::OK).await;
    assert!(body["total"].as_u64().unwrap_or(0) > 0);
    for product in body["products"].as_array().into_iter().flatten() {
        let name = product["name"].as_str().unwrap_or_default().to_lowercase();
        let description = product["description"]
            .as_str()
            .unwrap_or_default()
            .to_lowercase();
        let collection = product["collection"]
            .as_str()
            .unwrap_or_default()
            .to_lowercase();
        assert!(
            name.contains("air") || description.contains("air") || collection.contains("air"),
            "hit should mention the query somewhere"
        );
    }

    // No hits is an empty page, not an error
    let body = expect_json(get(&app, "/search?q=zzzzzz", None).await, StatusCode::OK).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_price_range_and_categories() {
    let app = storefront_app();

    let range = body_json(get(&app, "/price-range", None).await).await;
    assert_eq!(range["min"], "89.99");
    assert_eq!(range["max"], "249.99");

    let categories = body_json(get(&app, "/categories", None).await).await;
    let categories = categories.as_array().cloned().unwrap_or_default();
    assert!(categories.iter().any(|c| c == "running"));
    assert!(categories.iter().any(|c| c == "basketball"));
}

#[tokio::test]
async fn test_featured_leads_with_sale_items() {
    let app = storefront_app();
    let body = body_json(get(&app, "/featured", None).await).await;
    let first = &body.as_array().and_then(|a| a.first().cloned());
    assert!(
        first
            .as_ref()
            .is_some_and(|p| p.get("original_price").is_some()),
        "featured rail should lead with a sale item"
    );
}

#[tokio::test]
async fn test_collections_index_and_lookup() {
    let app = storefront_app();

    let names = body_json(get(&app, "/collections", None).await).await;
    let names = names.as_array().cloned().unwrap_or_default();
    assert!(names.iter().any(|n| n == "Air Max"));

    let hits = body_json(get(&app, "/collections/air%20max", None).await).await;
    assert!(!hits.as_array().cloned().unwrap_or_default().is_empty());

    // Unknown collection renders as an empty shelf
    let hits = body_json(get(&app, "/collections/nonexistent", None).await).await;
    assert!(hits.as_array().cloned().unwrap_or_default().is_empty());
}
