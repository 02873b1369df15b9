// tests/integration/middleware.rs

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use ledgerflow_site::logging::REQUEST_ID_HEADER;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::common::app_helper::{setup_app, setup_app_with_sender};
use crate::common::mock_sender::PanickingSender;
use crate::common::request::{get_request, json_request, read_json};

#[tokio::test]
async fn test_security_headers_on_pages() {
    let (app, _) = setup_app();
    let res = app.oneshot(get_request("/")).await.unwrap();

    let headers = res.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    let csp = headers["content-security-policy"].to_str().unwrap();
    assert!(csp.contains("script-src 'self'"));
    assert!(!csp.contains("unsafe-inline"));
}

#[tokio::test]
async fn test_request_id_header() {
    let (app, _) = setup_app();
    let res = app.oneshot(get_request("/health")).await.unwrap();

    let request_id = res.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn test_cors_preflight_for_allowed_origin() {
    let (app, _) = setup_app();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/account/cancel")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let (app, _) = setup_app();
    let huge = format!(r#"{{"userId":"{}"}}"#, "x".repeat(2 * 1024 * 1024));
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/account/cancel")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, huge.len())
        .body(Body::from(huge))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_panic_response_keeps_common_headers() {
    let app = setup_app_with_sender(Arc::new(PanickingSender));
    let payload = json!({
        "businessName": "Acme Bakery",
        "contactName": "Sam Rivera",
        "email": "sam@acme.test",
        "primaryChallenge": "Receipts everywhere",
        "secondaryChallenge": "Quarterly taxes",
        "preferredContact": "email"
    });

    let res = app
        .oneshot(json_request("POST", "/api/contact", &payload))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let headers = res.headers();
    assert!(uuid::Uuid::parse_str(headers[REQUEST_ID_HEADER].to_str().unwrap()).is_ok());
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("content-security-policy"));

    let json = read_json(res).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error_type"], "internal_server_error");
    assert_eq!(json["message"], "An internal server error occurred");
}

#[tokio::test]
async fn test_cancellation_panic_reports_cancel_failure() {
    let app = setup_app_with_sender(Arc::new(PanickingSender));

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/account/cancel",
            &json!({ "userId": "u1" }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.headers().contains_key(REQUEST_ID_HEADER));
    let json = read_json(res).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to cancel account");
}
