use super::common::*;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::analysis::router::analyze_handler;

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/listings/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request")
}

#[tokio::test]
async fn analyze_route_returns_score_radar_and_text() {
    let body = json!({
        "personality": "tiger",
        "motivation": "cash",
        "ownerType": "normal",
        "condition": "perfect",
        "price": "urgent",
        "contract": "exclusive",
        "agentNotes": "ignored"
    });

    let response = router()
        .oneshot(post_json(body.to_string()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 90);
    assert_eq!(payload["radarData"], json!([60, 100, 90, 100, 100, 100]));

    let analysis = payload["analysis"].as_object().expect("analysis object");
    for key in ["psychology", "emotionTip", "teamStrategy"] {
        let text = analysis
            .get(key)
            .and_then(Value::as_str)
            .expect("text block present");
        assert!(!text.is_empty(), "{key} is empty");
    }
}

#[tokio::test]
async fn analyze_route_accepts_multi_select_arrays() {
    let body = json!({ "personality": ["tiger", "koala"] });

    let response = router()
        .oneshot(post_json(body.to_string()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 10);
    assert_eq!(payload["radarData"], json!([75, 0, 0, 0, 0, 0]));
}

#[tokio::test]
async fn analyze_route_rejects_other_methods() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/listings/analyze")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn analyze_route_reports_malformed_json() {
    let response = router()
        .oneshot(post_json("{\"personality\": "))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.starts_with("invalid selections payload"));
}

#[tokio::test]
async fn analyze_route_accepts_json_sent_as_plain_text() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/listings/analyze")
                .header(header::CONTENT_TYPE, "text/plain;charset=UTF-8")
                .body(Body::from(r#"{"personality":"tiger","price":"urgent"}"#))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 30);
    assert_eq!(payload["radarData"], json!([60, 0, 0, 0, 100, 0]));
}

#[tokio::test]
async fn analyze_route_accepts_a_body_without_content_type() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/listings/analyze")
                .body(Body::from("{}"))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn analyze_route_rejects_an_empty_body() {
    let response = router()
        .oneshot(post_json(Body::empty()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn handler_tolerates_an_empty_object() {
    let response = analyze_handler(State(Arc::new(analyzer())), Bytes::from_static(b"{}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 0);
    assert_eq!(payload["radarData"], json!([0, 0, 0, 0, 0, 0]));
}
