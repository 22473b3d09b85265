mod common;

use common::{FailingProductStore, TestApp};
use reqwest::Client;
use std::sync::Arc;

#[tokio::test]
async fn root_route_returns_running_message() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, "Catalog server is running");
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "catalog-service");
}

#[tokio::test]
async fn root_route_answers_when_store_is_down() {
    let app = TestApp::spawn_with_store(Arc::new(FailingProductStore)).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, "Catalog server is running");
}

#[tokio::test]
async fn health_check_reports_unhealthy_store() {
    let app = TestApp::spawn_with_store(Arc::new(FailingProductStore)).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 503);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "unhealthy");
}
