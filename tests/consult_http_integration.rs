//! Integration tests for the consult HTTP endpoints.
//!
//! Drive the assembled router over in-memory storage and a mock counselor:
//! start a session, take turns, then fetch the analysis.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, app_with, send, TOKEN_U1, TOKEN_U2};
use hexa_ai::adapters::ai::{MockAICounselor, MockMessageConverter};
use hexa_ai::ports::AIError;

async fn start(router: &axum::Router) -> String {
    let (status, body) = send(
        router,
        "POST",
        "/consult/start",
        Some(TOKEN_U1),
        Some(json!({"mbti": "INTJ", "gender": "MALE"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["session_id"].as_str().unwrap().to_string()
}

async fn post_message(
    router: &axum::Router,
    session_id: &str,
    role: &str,
    content: &str,
) -> (StatusCode, serde_json::Value) {
    send(
        router,
        "POST",
        &format!("/consult/{}/messages", session_id),
        Some(TOKEN_U1),
        Some(json!({"role": role, "content": content})),
    )
    .await
}

async fn complete_three_turns(router: &axum::Router, session_id: &str) {
    for turn in 1..=3 {
        let (status, body) =
            post_message(router, session_id, "user", &format!("고민 {}", turn)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["turn_count"], turn);

        let (status, _) = post_message(router, session_id, "assistant", "그랬군요.").await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn full_consult_yields_four_section_analysis() {
    let test = app();
    let session_id = start(&test.router).await;
    complete_three_turns(&test.router, &session_id).await;

    let (status, body) = send(
        &test.router,
        "GET",
        &format!("/consult/{}/analysis", session_id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    for section in ["situation", "traits", "solutions", "cautions"] {
        assert!(
            !body[section].as_str().unwrap_or_default().is_empty(),
            "{} is empty",
            section
        );
    }
    assert_eq!(test.counselor.call_count(), 1);
}

#[tokio::test]
async fn third_user_turn_marks_session_completed() {
    let test = app();
    let session_id = start(&test.router).await;

    for _ in 0..2 {
        let (_, body) = post_message(&test.router, &session_id, "user", "음").await;
        assert_eq!(body["completed"], false);
    }
    let (_, body) = post_message(&test.router, &session_id, "user", "마지막").await;

    assert_eq!(body["completed"], true);
    assert_eq!(body["session_id"], session_id.as_str());
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let test = app();

    let (status, body) = send(
        &test.router,
        "GET",
        &format!("/consult/{}/analysis", uuid::Uuid::new_v4()),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn malformed_session_id_is_not_found() {
    let test = app();

    let (status, _) = send(&test.router, "GET", "/consult/abc/analysis", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analysis_before_three_turns_is_incomplete() {
    let test = app();
    let session_id = start(&test.router).await;

    let (status, body) = send(
        &test.router,
        "GET",
        &format!("/consult/{}/analysis", session_id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert_eq!(body["code"], "INCOMPLETE_SESSION");
    assert_eq!(test.counselor.call_count(), 0);
}

#[tokio::test]
async fn fourth_user_turn_is_conflict_but_assistant_reply_is_kept() {
    let test = app();
    let session_id = start(&test.router).await;
    complete_three_turns(&test.router, &session_id).await;

    let (status, body) = post_message(&test.router, &session_id, "user", "하나 더").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONVERSATION_COMPLETE");

    let (status, body) = post_message(&test.router, &session_id, "assistant", "정리할게요").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["turn_count"], 3);
}

#[tokio::test]
async fn start_requires_authentication() {
    let test = app();

    let (status, _) = send(
        &test.router,
        "POST",
        "/consult/start",
        None,
        Some(json!({"mbti": "INTJ", "gender": "MALE"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_profile_is_bad_request() {
    let test = app();

    for body in [
        json!({"mbti": "ABCD", "gender": "MALE"}),
        json!({"mbti": "INTJ", "gender": "OTHER"}),
    ] {
        let (status, response) =
            send(&test.router, "POST", "/consult/start", Some(TOKEN_U1), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["code"], "VALIDATION_FAILED");
    }
}

#[tokio::test]
async fn other_users_cannot_post_messages() {
    let test = app();
    let session_id = start(&test.router).await;

    let (status, _) = send(
        &test.router,
        "POST",
        &format!("/consult/{}/messages", session_id),
        Some(TOKEN_U2),
        Some(json!({"role": "user", "content": "끼어들기"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_role_and_empty_content_are_bad_request() {
    let test = app();
    let session_id = start(&test.router).await;

    let (status, _) = post_message(&test.router, &session_id, "system", "hi").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_message(&test.router, &session_id, "user", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn counselor_failure_is_bad_gateway() {
    let test = app_with(
        MockAICounselor::new().with_error(AIError::unavailable("quota exceeded")),
        MockMessageConverter::new(),
    );
    let session_id = start(&test.router).await;
    complete_three_turns(&test.router, &session_id).await;

    let (status, body) = send(
        &test.router,
        "GET",
        &format!("/consult/{}/analysis", session_id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "AI_PROVIDER_ERROR");
}

#[tokio::test(start_paused = true)]
async fn slow_counselor_times_out() {
    let test = app_with(
        MockAICounselor::new().with_delay(Duration::from_secs(30)),
        MockMessageConverter::new(),
    );
    let session_id = start(&test.router).await;
    complete_three_turns(&test.router, &session_id).await;

    let (status, body) = send(
        &test.router,
        "GET",
        &format!("/consult/{}/analysis", session_id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["code"], "AI_TIMEOUT");
}

#[tokio::test]
async fn health_reports_ok() {
    let test = app();

    let (status, body) = send(&test.router, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
