//! End-to-end HTTP tests
//!
//! Serves the real router on an ephemeral port backed by the in-memory
//! store and drives it over the wire with reqwest. Each test gets its
//! own server so state never leaks between tests.

use std::sync::Arc;

use bankd::account::MemoryAccountStore;
use bankd::gateway::{build_router, state::AppState};
use serde_json::{Value, json};

async fn spawn_server() -> String {
    let store = Arc::new(MemoryAccountStore::new());
    let state = Arc::new(AppState::new(store));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_create_then_list_returns_the_account() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/account", base))
        .json(&json!({"firstName": "Ann", "lastName": "Lee"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["firstName"], "Ann");
    assert_eq!(created["lastName"], "Lee");
    assert_eq!(created["balance"], 0);
    assert!(created["id"].as_i64().unwrap() > 0);

    let resp = client.get(format!("{}/account", base)).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let accounts: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["firstName"], "Ann");
    assert_eq!(accounts[0]["lastName"], "Lee");
    assert_eq!(accounts[0]["balance"], 0);
    assert_eq!(accounts[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_list_empty_store_is_empty_array() {
    let base = spawn_server().await;

    let resp = reqwest::get(format!("{}/account", base)).await.unwrap();
    assert_eq!(resp.status(), 200);
    let accounts: Vec<Value> = resp.json().await.unwrap();
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn test_get_nonexistent_id_is_404() {
    let base = spawn_server().await;

    let resp = reqwest::get(format!("{}/account/999999", base)).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "account 999999 not found");
}

#[tokio::test]
async fn test_zero_id_is_rejected_on_get_and_delete() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/account/0", base)).send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(!body["error"].as_str().unwrap().is_empty());

    let resp = client
        .delete(format!("{}/account/0", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let base = spawn_server().await;

    let resp = reqwest::get(format!("{}/account/abc", base)).await.unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{}/account", base))
        .json(&json!({"firstName": "Del", "lastName": "Me"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    // Deleting the same id twice must succeed both times
    for _ in 0..2 {
        let resp = client
            .delete(format!("{}/account/{}", base, id))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["deleted"], id);
    }

    // Deleting an id that never existed is also fine
    let resp = client
        .delete(format!("{}/account/424242", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_created_ids_are_unique_and_increasing() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let mut last_id = 0;
    for i in 0..5 {
        let created: Value = client
            .post(format!("{}/account", base))
            .json(&json!({"firstName": format!("User{}", i), "lastName": "Test"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let id = created["id"].as_i64().unwrap();
        assert!(id > last_id, "ids must increase: {} after {}", id, last_id);
        last_id = id;
    }
}

#[tokio::test]
async fn test_transfer_echoes_payload_without_touching_balances() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{}/account", base))
        .json(&json!({"firstName": "Ann", "lastName": "Lee"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let payload = json!({"from": 1, "to": 2, "amount": 50});
    let resp = client
        .post(format!("{}/transfer", base))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let echoed: Value = resp.json().await.unwrap();
    assert_eq!(echoed, payload);

    // No balance changed as a side effect
    let account: Value = client
        .get(format!("{}/account/{}", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(account["balance"], 0);
}

#[tokio::test]
async fn test_unparsable_create_body_is_400_and_inserts_nothing() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/account", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(!body["error"].as_str().unwrap().is_empty());

    let accounts: Vec<Value> = reqwest::get(format!("{}/account", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(accounts.is_empty(), "Bad request must not insert a row");
}

#[tokio::test]
async fn test_unparsable_transfer_body_is_400() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/transfer", base))
        .header("content-type", "application/json")
        .body(r#"{"from": "one"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_unsupported_method_on_known_path_is_405() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.put(format!("{}/account", base)).send().await.unwrap();
    assert_eq!(resp.status(), 405);
}

#[tokio::test]
async fn test_unknown_path_is_404_with_json_body() {
    let base = spawn_server().await;

    let resp = reqwest::get(format!("{}/nope", base)).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_is_ok_with_memory_store() {
    let base = spawn_server().await;

    let resp = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp_ms"].as_u64().unwrap() > 0);
}
