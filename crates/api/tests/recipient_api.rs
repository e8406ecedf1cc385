//! Integration tests for `POST /api/recipient`.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, post_json, send, FakeStore, UntouchableStore};
use tower::ServiceExt;

#[tokio::test]
async fn valid_registration_returns_201_and_records_one_row() {
    let store = Arc::new(FakeStore::seeded());
    let app = common::build_test_app(store.clone());

    let response = post_json(app, "/api/recipient", r#"{"theme_id":"T1","email":"a@b.com"}"#).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, serde_json::json!({"message": "success"}));

    let recorded = store.recorded_recipients();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].theme_id, "T1");
    assert_eq!(recorded[0].email, "a@b.com");
}

#[tokio::test]
async fn duplicate_registrations_are_both_accepted() {
    let store = Arc::new(FakeStore::seeded());
    let body = r#"{"theme_id":"T1","email":"a@b.com"}"#;

    for _ in 0..2 {
        let app = common::build_test_app(store.clone());
        let response = post_json(app, "/api/recipient", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    assert_eq!(store.recorded_recipients().len(), 2);
}

#[tokio::test]
async fn empty_theme_id_is_rejected_without_mutation() {
    let store = Arc::new(FakeStore::seeded());
    let app = common::build_test_app(store.clone());

    let response = post_json(app, "/api/recipient", r#"{"theme_id":"","email":"a@b.com"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "theme_id is required");
    assert!(store.recorded_recipients().is_empty());
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn missing_email_is_rejected() {
    let app = common::build_test_app(Arc::new(UntouchableStore));
    let response = post_json(app, "/api/recipient", r#"{"theme_id":"T1"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "email is required");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = common::build_test_app(Arc::new(UntouchableStore));
    let response = post_json(app, "/api/recipient", r#"{"theme_id": "T1", "#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn mistyped_field_is_rejected() {
    let app = common::build_test_app(Arc::new(UntouchableStore));
    let response = post_json(app, "/api/recipient", r#"{"theme_id":42,"email":"a@b.com"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let app = common::build_test_app(Arc::new(UntouchableStore));
    let response = get(app, "/api/recipient").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["code"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn put_is_method_not_allowed() {
    let app = common::build_test_app(Arc::new(UntouchableStore));
    let response = send(
        app,
        Method::PUT,
        "/api/recipient",
        Body::from(r#"{"theme_id":"T1","email":"a@b.com"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn options_without_preflight_headers_is_method_not_allowed() {
    let app = common::build_test_app(Arc::new(UntouchableStore));
    let response = send(app, Method::OPTIONS, "/api/recipient", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["code"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn cross_origin_options_without_preflight_keeps_allow_origin() {
    let app = common::build_test_app(Arc::new(UntouchableStore));
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/recipient")
        .header("Origin", "https://kiosk.example.org")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://kiosk.example.org"
    );
}

#[tokio::test]
async fn trailing_bytes_after_json_object_are_ignored() {
    let store = Arc::new(FakeStore::seeded());
    let app = common::build_test_app(store.clone());

    let response = post_json(
        app,
        "/api/recipient",
        r#"{"theme_id":"T1","email":"a@b.com"} x"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(store.recorded_recipients().len(), 1);
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let app = common::build_test_app(Arc::new(UntouchableStore));
    let response = post_json(app, "/api/recipient", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn store_failure_returns_generic_500() {
    let app = common::build_test_app(Arc::new(FakeStore::failing("duplicate key on secret_table")));
    let response = post_json(app, "/api/recipient", r#"{"theme_id":"T1","email":"a@b.com"}"#).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
