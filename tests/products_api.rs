//! End-to-end tests against a real server on an ephemeral port.

use product_api::{
    config::database::{create_connection, create_tables},
    core::ProductStore,
    server,
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let db = create_connection("sqlite::memory:").await.unwrap();
        create_tables(&db).await.unwrap();
        let store = ProductStore::new(db);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            server::run(listener, store, async move {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_product_lifecycle() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    for (name, price) in [("Chair", 45.0), ("Pen", 1.5), ("Desk", 120.0)] {
        let resp = client
            .post(server.url("/products"))
            .json(&json!({"name": name, "description": format!("A {name}"), "price": price}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let list: Vec<Value> = client
        .get(server.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = list.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Pen", "Chair", "Desk"]);

    let chair_id = list[1]["id"].as_i64().unwrap();
    let resp = client
        .put(server.url(&format!("/products/{chair_id}")))
        .json(&json!({"price": 50.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 203);

    let chair: Value = client
        .get(server.url(&format!("/products/{chair_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        chair,
        json!({"id": chair_id, "name": "Chair", "description": "A Chair", "price": 50.0})
    );

    let in_range: Vec<Value> = client
        .get(server.url("/products?min=1.5&max=120"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(in_range.len(), 2);

    let resp = client
        .delete(server.url(&format!("/products/{chair_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .get(server.url(&format!("/products/{chair_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_bulk_update_and_listing_page() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    for price in [3.0, 2.0] {
        client
            .post(server.url("/products"))
            .json(&json!({"name": "old", "description": "same", "price": price}))
            .send()
            .await
            .unwrap();
    }

    let resp = client
        .put(server.url("/products"))
        .json(&json!({"name": "renamed"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 203);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"message": "updated all."}));

    let list: Vec<Value> = client
        .get(server.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.iter().all(|p| p["name"] == "renamed" && p["description"] == "same"));
    assert_eq!(list[0]["price"], 2.0);
    assert_eq!(list[1]["price"], 3.0);

    let page = client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("<h1>Products</h1>"));
    assert_eq!(page.matches("renamed").count(), 2);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_malformed_body_is_structured_error() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/products"))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "invalid_input");

    drop(client);
    server.stop().await;
}
