//! End-to-end catalog scenarios over the in-memory backends.

use product_catalog::index::memory::MemoryIndex;
use product_catalog::store::memory::MemoryStore;
use product_catalog::{CatalogError, CatalogService, NewProduct, ProductSearch};

fn service() -> CatalogService<MemoryStore, MemoryIndex> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    CatalogService::new(MemoryStore::new(), MemoryIndex::new())
}

fn product(name: &str, category: &str, price: f64, rating: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("A very nice {name}"),
        price,
        rating,
        category: category.to_string(),
    }
}

fn search(query: &str, category: Option<&str>, min: f64, max: f64) -> ProductSearch {
    ProductSearch {
        query: query.to_string(),
        category: category.map(|c| c.to_string()),
        min_price: min,
        max_price: max,
        page: 1,
        size: 10,
    }
}

async fn seed_catalog(service: &CatalogService<MemoryStore, MemoryIndex>) {
    for new in [
        product("Laptop Pro", "Electronics", 1299.0, 4.6),
        product("Laptop Air", "Electronics", 450.0, 3.8),
        product("Lap Desk", "Furniture", 49.0, 4.2),
        product("Gaming Mouse", "Electronics", 120.0, 4.7),
        product("Office Chair", "Furniture", 320.0, 4.1),
    ] {
        service.create_product(new).await.expect("seed create");
    }
}

// ── Listing ────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_pages_follow_store_order() {
    let service = service();
    seed_catalog(&service).await;

    let first = service.list_products(1, 2).await.unwrap();
    let second = service.list_products(2, 2).await.unwrap();
    let third = service.list_products(3, 2).await.unwrap();

    assert_eq!(
        first.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2],
        "page 1 holds items 0..2 of the store ordering"
    );
    assert_eq!(second.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(third.iter().map(|p| p.id).collect::<Vec<_>>(), vec![5]);
    assert!(first.len() <= 2 && second.len() <= 2 && third.len() <= 2);
}

#[tokio::test]
async fn list_rejects_invalid_pagination() {
    let service = service();
    assert!(matches!(
        service.list_products(0, 10).await,
        Err(CatalogError::InvalidPage { .. })
    ));
    assert!(matches!(
        service.list_products(1, 0).await,
        Err(CatalogError::InvalidPage { .. })
    ));
    assert!(matches!(
        service.search(&ProductSearch { page: 0, ..search("x", None, 0.0, 1.0) }).await,
        Err(CatalogError::InvalidPage { .. })
    ));
}

// ── Create ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn created_product_round_trips_with_assigned_id() {
    let service = service();
    let created = service
        .create_product(product("Desk Lamp", "Lighting", 35.5, 4.4))
        .await
        .unwrap();

    assert_eq!(created.id, 1, "store assigns the first id");
    assert_eq!(created.name, "Desk Lamp");
    assert_eq!(created.description, "A very nice Desk Lamp");
    assert_eq!(created.price, 35.5);
    assert_eq!(created.rating, 4.4);
    assert_eq!(created.category, "Lighting");
}

#[tokio::test]
async fn created_product_is_immediately_searchable() {
    let service = service();
    seed_catalog(&service).await;

    let results = service
        .search(&search("Gaming Mouse", None, 0.0, 10_000.0))
        .await
        .unwrap();
    assert!(
        results.iter().any(|doc| doc.id == "4"),
        "exact-name search finds the created product: {results:?}"
    );
}

// ── Delete ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn deleted_product_disappears_from_list_and_search() {
    let service = service();
    seed_catalog(&service).await;

    service.delete_product(1).await.unwrap();

    let listed = service.list_products(1, 10).await.unwrap();
    assert!(listed.iter().all(|p| p.id != 1));

    let found = service
        .search(&search("Laptop Pro", None, 0.0, 10_000.0))
        .await
        .unwrap();
    assert!(found.iter().all(|doc| doc.id != "1"));
}

#[tokio::test]
async fn deleting_unknown_id_is_a_noop() {
    let service = service();
    assert!(service.delete_product(999).await.is_ok());
}

// ── Search filters ─────────────────────────────────────────────────────

#[tokio::test]
async fn filters_are_exact_and_inclusive() {
    let service = service();
    seed_catalog(&service).await;

    // "Laptop Air" (450, in range) and "Laptop Pro" (1299, out of range)
    // both match the text; only the filters decide.
    let results = service
        .search(&search("laptop", Some("Electronics"), 100.0, 500.0))
        .await
        .unwrap();

    assert!(!results.is_empty());
    for doc in &results {
        assert_eq!(doc.category, "Electronics", "category filter is exact");
        assert!(
            (100.0..=500.0).contains(&doc.price),
            "price {} outside inclusive range",
            doc.price
        );
    }
    assert!(
        results.iter().all(|doc| doc.id != "1"),
        "Laptop Pro at 1299 is excluded by the range filter"
    );
}

#[tokio::test]
async fn price_bounds_are_inclusive() {
    let service = service();
    seed_catalog(&service).await;

    // Laptop Air costs exactly 450.
    let results = service
        .search(&search("laptop", None, 450.0, 450.0))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "2");
}

#[tokio::test]
async fn zero_hits_is_empty_not_error() {
    let service = service();
    seed_catalog(&service).await;
    let results = service
        .search(&search("quantum flux capacitor", None, 0.0, 10.0))
        .await
        .unwrap();
    assert!(results.is_empty());
}

// ── Ranking ────────────────────────────────────────────────────────────

#[tokio::test]
async fn high_rating_ranks_at_or_above_identical_twin() {
    let service = service();
    service
        .create_product(product("Same Widget", "Tools", 20.0, 3.5))
        .await
        .unwrap();
    service
        .create_product(product("Same Widget", "Tools", 20.0, 4.5))
        .await
        .unwrap();

    let results = service
        .search(&search("widget", None, 0.0, 100.0))
        .await
        .unwrap();
    assert_eq!(results.len(), 2, "low rating never excludes");
    assert_eq!(
        results[0].id, "2",
        "the rating > 4.0 twin ranks first: {results:?}"
    );
}

// ── Suggestions ────────────────────────────────────────────────────────

#[tokio::test]
async fn suggest_returns_prefix_matched_names() {
    let service = service();
    seed_catalog(&service).await;

    let suggestions = service.suggest("lap").await.unwrap();
    assert!(suggestions.contains(&"Laptop Pro".to_string()), "{suggestions:?}");
    assert!(suggestions.contains(&"Laptop Air".to_string()));
    assert!(suggestions.contains(&"Lap Desk".to_string()));
    assert!(!suggestions.contains(&"Gaming Mouse".to_string()));
}

#[tokio::test]
async fn suggest_caps_at_five() {
    let service = service();
    for i in 0..9 {
        service
            .create_product(product(&format!("Lantern {i}"), "Outdoor", 25.0, 4.0))
            .await
            .unwrap();
    }
    let suggestions = service.suggest("lan").await.unwrap();
    assert_eq!(suggestions.len(), 5);
}

// ── Highlighting ───────────────────────────────────────────────────────

#[tokio::test]
async fn matched_name_terms_are_wrapped_in_markers() {
    let service = service();
    seed_catalog(&service).await;

    let results = service
        .search(&search("laptop", None, 0.0, 10_000.0))
        .await
        .unwrap();
    let pro = results.iter().find(|doc| doc.id == "1").unwrap();
    assert_eq!(pro.name, "<b>Laptop</b> Pro");
    assert_eq!(
        pro.description, "A very nice Laptop Pro",
        "fields other than name are never highlighted"
    );
}

#[tokio::test]
async fn every_matched_occurrence_is_wrapped() {
    let service = service();
    service
        .create_product(product("Red Red Shoes", "Apparel", 60.0, 4.2))
        .await
        .unwrap();

    let results = service
        .search(&search("red", None, 0.0, 100.0))
        .await
        .unwrap();
    assert_eq!(results[0].name, "<b>Red</b> <b>Red</b> Shoes");
}

#[tokio::test]
async fn unmatched_name_keeps_indexed_value() {
    let service = service();
    seed_catalog(&service).await;

    // "office" matches only Office Chair; its name carries the markers,
    // everything else keeps the indexed value.
    let results = service
        .search(&search("office", None, 0.0, 10_000.0))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "<b>Office</b> Chair");
    assert_eq!(results[0].category, "Furniture");
    assert_eq!(results[0].price, 320.0);
}
