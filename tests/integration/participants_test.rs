//! Participant API integration tests
//!
//! Join, list and heartbeat endpoints

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{texts, TestApp};

#[tokio::test]
async fn test_join_then_list_once() {
    let app = TestApp::new().await;

    assert_eq!(app.join("alice").await, StatusCode::CREATED);

    let (status, body) = app.send(Method::GET, "/participants", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alice"]);
    assert!(body[0]["lastStatus"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_join_duplicate_name_conflicts() {
    let app = TestApp::new().await;

    assert_eq!(app.join("alice").await, StatusCode::CREATED);
    assert_eq!(app.join("alice").await, StatusCode::CONFLICT);

    let (_, body) = app.send(Method::GET, "/participants", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Only the first join announced itself.
    let (_, messages) = app.list_messages(None, "").await;
    assert_eq!(texts(&messages), vec!["entra na sala..."]);
}

#[tokio::test]
async fn test_join_writes_status_notice() {
    let app = TestApp::new().await;
    app.join("alice").await;

    let (_, messages) = app.list_messages(None, "").await;
    let notice = &messages[0];
    assert_eq!(notice["from"], "alice");
    assert_eq!(notice["to"], "Todos");
    assert_eq!(notice["type"], "status");
    assert_eq!(notice["time"].as_str().unwrap().len(), 8);
}

#[tokio::test]
async fn test_join_rejects_markup_only_name() {
    let app = TestApp::new().await;

    assert_eq!(app.join("<b></b>").await, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.join("   ").await, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = app.send(Method::GET, "/participants", None, None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_join_rejects_unknown_keys() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/participants",
            None,
            Some(json!({ "name": "alice", "age": 3 })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);

    let (_, participants) = app.send(Method::GET, "/participants", None, None).await;
    assert_eq!(participants, json!([]));
}

#[tokio::test]
async fn test_join_sanitizes_name() {
    let app = TestApp::new().await;

    assert_eq!(app.join("  <i>alice</i> ").await, StatusCode::CREATED);
    // The stored name is the sanitized one, so the raw form collides.
    assert_eq!(app.join("alice").await, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_join_rejects_missing_or_malformed_body() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(Method::POST, "/participants", None, Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);

    let (status, _) = app
        .send(Method::POST, "/participants", None, Some(json!({ "name": 42 })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/participants")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let (status, _) = app.send_request(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_heartbeat_known_participant() {
    let app = TestApp::new().await;
    app.join("alice").await;

    let before = app.store.participants().find_one("alice").await.unwrap().unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let (status, _) = app.send(Method::POST, "/status", Some("alice"), None).await;
    assert_eq!(status, StatusCode::OK);

    let after = app.store.participants().find_one("alice").await.unwrap().unwrap();
    assert!(after.last_status >= before.last_status);
}

#[tokio::test]
async fn test_heartbeat_unknown_or_missing_user() {
    let app = TestApp::new().await;

    let (status, _) = app.send(Method::POST, "/status", Some("ghost"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::POST, "/status", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_and_unknown_route() {
    let app = TestApp::new().await;

    let request = axum::http::Request::builder()
        .uri("/")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).starts_with("Hello World =>"));

    let (status, _) = app.send(Method::GET, "/nowhere", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = TestApp::new().await;

    let request = axum::http::Request::builder()
        .uri("/participants")
        .header("origin", "http://example.com")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_health_reports_sweeper_counters() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["sweeper"]["ticks"], 0);
}
