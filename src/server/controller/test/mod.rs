//! HTTP-level tests driving the full router against an in-memory database.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::util::ServiceExt;

use crate::server::{router, state::AppState};

mod billing;
mod lifecycle;
mod not_found;
mod staff;

/// Router wired to a fresh database holding every hotel table.
struct TestApp {
    context: TestContext,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new()
            .with_hotel_tables()
            .build()
            .await
            .unwrap();
        let db = context.db.as_ref().unwrap().clone();
        let router = router::router().with_state(AppState::new(db));

        Self { context, router }
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    /// Sends a request and returns the status with the parsed JSON body.
    ///
    /// An empty response body is returned as `Value::Null`.
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        self.send_request(request).await
    }

    async fn send_raw(&self, method: Method, uri: &str, body: &'static str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

fn guest_body() -> Value {
    json!({
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@example.com",
        "phoneNumber": "5550001111",
        "address": "1 Navy Yard",
        "idProof": "DL-77812"
    })
}
