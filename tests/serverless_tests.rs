mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::util::ServiceExt;

use common::{Stub, body_json, config_for, post_json, upstream_reply};
use cybernet_chat::config::Config;
use cybernet_chat::serverless;
use cybernet_chat::state::AppState;

#[tokio::test]
async fn test_post_relays_upstream_text() {
    let upstream = Stub::upstream(StatusCode::OK, upstream_reply("Yo, choombatta.")).await;
    let app = serverless::app(AppState::shared(config_for(&upstream)));

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message": "hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(body_json(response).await, json!({ "response": "Yo, choombatta." }));
}

#[tokio::test]
async fn test_missing_credential() {
    let upstream = Stub::upstream(StatusCode::OK, upstream_reply("unused")).await;
    let config = Config::default().with_upstream_base_url(upstream.base_url.clone());
    let app = serverless::app(AppState::shared(config));

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message": "hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "API key not configured" }));
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_upstream_rate_limit() {
    let upstream = Stub::upstream(StatusCode::TOO_MANY_REQUESTS, r#"{"error":"slow down"}"#).await;
    let app = serverless::app(AppState::shared(config_for(&upstream)));

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message": "hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "Failed to get AI response" }));
}

#[tokio::test]
async fn test_options_and_other_methods() {
    let app = serverless::app(AppState::shared(Config::default()));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/chat")
                .body(Body::from("{\"message\": 42}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
}
