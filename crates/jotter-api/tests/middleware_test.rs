//! CORS, request id and body limit behaviour of the full middleware stack.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use jotter_api::{app, AppState, ServerConfig};
use jotter_core::mock::MockNoteRepository;

fn full_app(config: &ServerConfig) -> (Router, MockNoteRepository) {
    let repo = MockNoteRepository::new();
    (app(AppState::new(Arc::new(repo.clone())), config), repo)
}

#[tokio::test]
async fn test_preflight_mirrors_origin_with_credentials() {
    let (app, repo) = full_app(&ServerConfig::default());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/notes")
                .header(header::ORIGIN, "https://notes.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://notes.example.com"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "300");

    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "{} missing from {}", method, methods);
    }

    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    for name in ["accept", "authorization", "content-type", "x-csrf-token"] {
        assert!(allowed.contains(name), "{} missing from {}", name, allowed);
    }

    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn test_simple_request_exposes_link_header() {
    let (app, _) = full_app(&ServerConfig::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/notes")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(
        headers[header::ACCESS_CONTROL_EXPOSE_HEADERS]
            .to_str()
            .unwrap()
            .to_ascii_lowercase(),
        "link"
    );
}

#[tokio::test]
async fn test_responses_carry_uuid_request_id() {
    let (app, _) = full_app(&ServerConfig::default());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let id = response.headers()["x-request-id"].to_str().unwrap();
    let parsed = uuid::Uuid::parse_str(id).expect("request id should be a UUID");
    assert_eq!(parsed.get_version_num(), 7);

    // A caller-supplied id is kept.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "caller-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "caller-123");
}

fn post_notes(body: String, content_length: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/notes")
        .header(header::CONTENT_TYPE, "application/json");
    if content_length {
        builder = builder.header(header::CONTENT_LENGTH, body.len());
    }
    builder.body(Body::from(body)).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_oversized_body_is_invalid_payload() {
    let config = ServerConfig {
        body_limit_bytes: 64,
        ..ServerConfig::default()
    };
    let (app, repo) = full_app(&config);
    let body = format!(r#"{{"title":"A","content":"{}"}}"#, "x".repeat(1024));

    for content_length in [true, false] {
        let response = app
            .clone()
            .oneshot(post_notes(body.clone(), content_length))
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "content_length={}",
            content_length
        );
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "error": "Invalid request payload" })
        );
    }
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn test_configured_limit_above_framework_default_is_honored() {
    let config = ServerConfig {
        body_limit_bytes: 4 * 1024 * 1024,
        ..ServerConfig::default()
    };
    let (app, repo) = full_app(&config);
    let body = format!(
        r#"{{"title":"A","content":"{}"}}"#,
        "x".repeat(3 * 1024 * 1024)
    );

    let response = app.oneshot(post_notes(body, true)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(repo.notes()[0].content.len(), 3 * 1024 * 1024);
}
