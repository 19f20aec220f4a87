//! Full application router: path normalization, API root and health check.

mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use travel_api::routes::app_router;
use travel_api::state::AppState;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    send_to(common::create_test_state(), request).await
}

async fn send_to(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let app = app_router(state);
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

#[tokio::test]
async fn test_api_root_lists_travels() {
    let request = Request::get("/").body(Body::empty()).unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "travels": format!("{}/travels/", common::BASE_URL) })
    );
}

#[tokio::test]
async fn test_collection_with_trailing_slash() {
    let request = Request::get("/travels/").body(Body::empty()).unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_with_trailing_slash() {
    let request = Request::post("/travels/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "destination": "Split", "details": "Diocletian's Palace" }).to_string(),
        ))
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["destination"], "Split");
}

#[tokio::test]
async fn test_detail_with_trailing_slash_not_found() {
    let request = Request::get("/travels/1/").body(Body::empty()).unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_detail_with_trailing_slash() {
    let state = common::create_test_state();

    let create = Request::post("/travels/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "destination": "Ghent", "details": "Gravensteen" }).to_string(),
        ))
        .unwrap();
    let (status, created) = send_to(state.clone(), create).await;
    assert_eq!(status, StatusCode::CREATED);

    let request = Request::get("/travels/1/").body(Body::empty()).unwrap();

    let (status, body) = send_to(state, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
    assert_eq!(body["destination"], "Ghent");
}

#[tokio::test]
async fn test_health_endpoint() {
    let request = Request::get("/health").body(Body::empty()).unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["status"], "ok");
    assert!(body.get("version").is_some());
}

#[tokio::test]
async fn test_unsupported_method() {
    let request = Request::post("/travels/1").body(Body::empty()).unwrap();

    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
