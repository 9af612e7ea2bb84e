//! Product view controller against the mock store API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use serde_json::json;

use tienda_costa_admin::views::{Phase, ProductsView};
use tienda_costa_core::{EntityId, FormRecord, ProductForm};
use tienda_costa_integration_tests::MockStoreApi;

fn lamp_form() -> ProductForm {
    ProductForm {
        name: "Lamp".to_string(),
        price: "19.90".to_string(),
        description: "Desk lamp".to_string(),
        image: "https://img.example/lamp.png".to_string(),
        category: "home".to_string(),
    }
}

fn seeded_product(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "price": 12.5,
        "description": "Seeded",
        "image": "https://img.example/p.png",
        "category": "misc"
    })
}

fn products_view(mock: &MockStoreApi) -> ProductsView {
    mock.app_state().products().clone()
}

#[tokio::test]
async fn test_load_products() {
    let mock = MockStoreApi::start().await;
    mock.seed_products(vec![seeded_product(1, "Mug"), seeded_product(2, "Cup")])
        .await;
    let view = products_view(&mock);

    assert!(view.load_products().await);
    assert_eq!(view.phase().await, Phase::Loaded);

    let names: Vec<String> = view.products().await.into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Mug", "Cup"]);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_snapshot() {
    let mock = MockStoreApi::start().await;
    mock.seed_products(vec![seeded_product(1, "Mug")]).await;
    let view = products_view(&mock);
    assert!(view.load_products().await);

    mock.seed_products(Vec::new()).await;
    mock.fail_reads(true);
    assert!(!view.load_products().await);

    assert_eq!(view.products().await.len(), 1);
}

#[tokio::test]
async fn test_create_posts_form_then_refetches_and_clears() {
    let mock = MockStoreApi::start().await;
    let view = products_view(&mock);

    assert!(view.create_product(lamp_form()).await);

    let requests = mock.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/products");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "name": "Lamp",
            "price": "19.90",
            "description": "Desk lamp",
            "image": "https://img.example/lamp.png",
            "category": "home"
        }))
    );
    assert_eq!(requests[1].path, "/api/products");
    assert_eq!(requests[1].method, "GET");

    let products = view.products().await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Lamp");
    assert!(view.form().await.is_blank());
}

#[tokio::test]
async fn test_create_failure_keeps_form() {
    let mock = MockStoreApi::start().await;
    mock.fail_writes(true);
    let view = products_view(&mock);

    assert!(!view.create_product(lamp_form()).await);
    assert_eq!(view.form().await, lamp_form());
    assert_eq!(mock.requests().await.len(), 1);
}

#[tokio::test]
async fn test_incomplete_form_is_not_submitted() {
    let mock = MockStoreApi::start().await;
    let view = products_view(&mock);

    let partial = ProductForm {
        price: String::new(),
        ..lamp_form()
    };
    assert!(!view.create_product(partial).await);
    assert!(mock.requests().await.is_empty());
}

#[tokio::test]
async fn test_delete_uses_id_in_path() {
    let mock = MockStoreApi::start().await;
    mock.seed_products(vec![seeded_product(42, "Mug"), seeded_product(43, "Cup")])
        .await;
    let view = products_view(&mock);
    assert!(view.load_products().await);
    mock.clear_requests().await;

    assert!(view.delete_product(&EntityId::Number(42)).await);

    let requests = mock.requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/products/42");
    assert_eq!(requests[0].body, None);

    let ids: Vec<EntityId> = view.products().await.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![EntityId::Number(43)]);
}

#[tokio::test]
async fn test_delete_failure_leaves_product_listed() {
    let mock = MockStoreApi::start().await;
    mock.seed_products(vec![seeded_product(42, "Mug")]).await;
    let view = products_view(&mock);
    assert!(view.load_products().await);

    mock.fail_writes(true);
    assert!(!view.delete_product(&EntityId::Number(42)).await);

    let ids: Vec<EntityId> = view.products().await.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![EntityId::Number(42)]);
}

#[tokio::test]
async fn test_delete_unknown_product_fails() {
    let mock = MockStoreApi::start().await;
    mock.seed_products(vec![seeded_product(1, "Mug")]).await;
    let view = products_view(&mock);
    assert!(view.load_products().await);

    assert!(!view.delete_product(&EntityId::Number(999)).await);
    assert_eq!(view.products().await.len(), 1);
}

#[tokio::test]
async fn test_loose_records_do_not_fail_the_load() {
    let mock = MockStoreApi::start().await;
    mock.seed_products(vec![
        seeded_product(1, "Mug"),
        json!({"id": 2, "name": "Cup", "price": "", "description": null}),
        json!({"_id": "65a1", "name": null, "price": null, "category": 7}),
    ])
    .await;
    let view = products_view(&mock);

    assert!(view.load_products().await);

    let products = view.products().await;
    assert_eq!(products.len(), 3);
    assert!(products[1].price.is_zero());
    assert_eq!(products[1].description, "");
    assert_eq!(products[2].id, EntityId::Text("65a1".to_string()));
    assert_eq!(products[2].category, "7");
}
