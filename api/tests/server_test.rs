mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::test_server;

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server("");

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn metrics_are_exposed() {
    let server = test_server("");

    server.get("/health").await.assert_status_ok();
    let response = server.get("/metrics").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn openapi_document_lists_search_route() {
    let server = test_server("");

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let document = response.json::<Value>();
    assert!(document["paths"]["/api/v1/ingredients/search"]["get"].is_object());
    assert!(document["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn routes_honour_root_path() {
    let server = test_server("/heuksal");

    server
        .get("/heuksal/api/v1/ingredients/search")
        .add_query_param("query", "소고기")
        .await
        .assert_status_ok();
    server.get("/heuksal/health").await.assert_status_ok();
    server
        .get("/api/v1/ingredients/search")
        .add_query_param("query", "소고기")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
