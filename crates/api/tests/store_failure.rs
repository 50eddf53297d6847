//! Requests served while the store backend is failing.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get, post_json, RecordingNotifier, STORE_FAILURE_DETAIL};
use serde_json::json;

async fn assert_generic_500(response: axum::response::Response) {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = body_bytes(response).await;
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(!text.contains(STORE_FAILURE_DETAIL), "leaked: {text}");

    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["message"], "An internal error occurred");
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn list_endpoints_return_generic_500() {
    for uri in [
        "/api/volumes",
        "/api/volumes/current",
        "/api/reflections",
        "/api/session-requests",
        "/api/subscribers",
    ] {
        let app = common::build_test_app(common::failing_store());
        assert_generic_500(get(app, uri).await).await;
    }
}

#[tokio::test]
async fn journal_prompt_returns_generic_500() {
    let app = common::build_test_app(common::failing_store());
    let response = get(
        app,
        "/api/volumes/6f1c2a9e-3b7d-4c1e-9a51-0d2f4b8e7c10/journal-prompt",
    )
    .await;

    assert_generic_500(response).await;
}

#[tokio::test]
async fn valid_submissions_return_generic_500_without_notifying() {
    let submissions = [
        (
            "/api/reflections",
            json!({"seeker_name": "Ada", "reflection_content": "A long enough reflection."}),
        ),
        (
            "/api/session-requests",
            json!({
                "name": "Grace",
                "email": "grace@example.com",
                "inner_landscape": "Foggy mornings, clearer afternoons.",
                "session_intent": "Learning to rest",
            }),
        ),
        ("/api/subscribe", json!({"email": "reader@example.com"})),
    ];

    let notifier = Arc::new(RecordingNotifier::default());
    for (uri, body) in submissions {
        let app = common::build_app_with_notifier(common::failing_store(), notifier.clone());
        assert_generic_500(post_json(app, uri, body).await).await;
    }

    assert!(notifier.kinds.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_the_store() {
    let app = common::build_test_app(common::failing_store());
    let response = post_json(app, "/api/subscribe", json!({"email": "nope"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_degraded() {
    let app = common::build_test_app(common::failing_store());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}
