//! Integration tests for the article ingestion endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, send};

#[tokio::test]
async fn ingests_crawler_payload_and_lists_newest_first() {
    let test = app();

    let (status, body) = send(
        &test.router,
        "POST",
        "/data",
        None,
        Some(json!({
            "articles": [
                {"analysis": {
                    "title": "연애 상담 트렌드",
                    "content": "요즘 커플은...",
                    "keywords": [" 연애 ", "", "MBTI"],
                    "published_at": "2024-05-01T09:00:00Z"
                }},
                {"analysis": {"title": "", "content": "제목 없음"}},
                {"analysis": {
                    "title": "갈등 해결법",
                    "content": "대화가 먼저",
                    "keywords": ["MBTI"],
                    "published_at": "언젠가"
                }}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["count"], 2);
    assert_eq!(body["articles"][0]["keywords"], json!(["연애", "MBTI"]));
    assert!(body["articles"][1]["published_at"].is_null());

    let (status, body) = send(&test.router, "GET", "/data?limit=1", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["articles"][0]["title"], "갈등 해결법");
}

#[tokio::test]
async fn payload_with_nothing_usable_is_bad_request() {
    let test = app();

    let (status, body) = send(
        &test.router,
        "POST",
        "/data",
        None,
        Some(json!({"articles": [{"analysis": {"title": " ", "content": ""}}, {}]})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn listing_an_empty_store_is_ok() {
    let test = app();

    let (status, body) = send(&test.router, "GET", "/data", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}
