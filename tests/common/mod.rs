//! Common test utilities and helpers
//!
//! Builds a router over a fresh in-memory store and drives it with
//! `tower::ServiceExt::oneshot`, so no listener or external database is
//! needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use roomchat::backend::server::AppState;
use roomchat::backend::store::Store;
use roomchat::backend::sweeper::SweepStats;
use roomchat::backend::create_router;
use serde_json::Value;
use tower::ServiceExt;

/// Router plus direct access to its store
pub struct TestApp {
    pub router: Router,
    pub store: Store,
}

impl TestApp {
    pub async fn new() -> Self {
        let store = Store::in_memory().await.expect("Failed to create in-memory store");
        let router = create_router(AppState::new(store.clone(), Arc::new(SweepStats::default())));
        Self { router, store }
    }

    /// Send a request and return the status and parsed JSON body
    ///
    /// Empty or non-JSON bodies come back as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("user", user);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn join(&self, name: &str) -> StatusCode {
        self.send(Method::POST, "/participants", None, Some(serde_json::json!({ "name": name })))
            .await
            .0
    }

    pub async fn post_message(&self, user: &str, to: &str, text: &str, kind: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/messages",
            Some(user),
            Some(serde_json::json!({ "to": to, "text": text, "type": kind })),
        )
        .await
    }

    pub async fn list_messages(&self, user: Option<&str>, query: &str) -> (StatusCode, Value) {
        self.send(Method::GET, &format!("/messages{}", query), user, None).await
    }
}

/// Texts of a JSON message list, in order
pub fn texts(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|m| m["text"].as_str().unwrap_or_default().to_string())
        .collect()
}
