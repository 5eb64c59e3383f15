//! Shared wiring for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use hexa_ai::adapters::ai::{MockAICounselor, MockMessageConverter};
use hexa_ai::adapters::auth::MockSessionValidator;
use hexa_ai::adapters::http::{build_router, AppPorts};
use hexa_ai::adapters::memory::{
    InMemoryArticleRepository, InMemoryConsultRepository, InMemoryKeywordRepository,
};

pub const TOKEN_U1: &str = "token-u1";
pub const TOKEN_U2: &str = "token-u2";

pub struct TestApp {
    pub router: Router,
    pub counselor: MockAICounselor,
    pub converter: MockMessageConverter,
}

pub fn app() -> TestApp {
    app_with(MockAICounselor::new(), MockMessageConverter::new())
}

pub fn app_with(counselor: MockAICounselor, converter: MockMessageConverter) -> TestApp {
    let validator = MockSessionValidator::new()
        .with_test_user(TOKEN_U1, "u1")
        .and_then(|v| v.with_test_user(TOKEN_U2, "u2"))
        .expect("valid test users");

    let ports = AppPorts {
        consult_repository: Arc::new(InMemoryConsultRepository::new()),
        counselor: Arc::new(counselor.clone()),
        converter: Arc::new(converter.clone()),
        article_repository: Arc::new(InMemoryArticleRepository::new(Arc::new(
            InMemoryKeywordRepository::new(),
        ))),
        session_validator: Arc::new(validator),
        analysis_timeout: Duration::from_secs(5),
    };

    TestApp {
        router: build_router(ports),
        counselor,
        converter,
    }
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
