// tests/integration/account.rs

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use ledgerflow_site::infrastructure::email::{EmailConfig, MockEmailSender};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::common::app_helper::{setup_app, setup_app_with_sender, TEST_OPERATOR_EMAIL};
use crate::common::mock_sender::FailingSender;
use crate::common::request::{json_request, raw_json_request, read_json};

const CANCEL_URI: &str = "/api/account/cancel";

#[tokio::test]
async fn test_cancel_account_success() {
    let (app, sender) = setup_app();

    let res = app
        .oneshot(json_request("POST", CANCEL_URI, &json!({ "userId": "u1" })))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Account cancellation completed successfully");
    let cancelled_at = body["cancelledAt"].as_str().unwrap();
    assert!(cancelled_at.parse::<DateTime<Utc>>().is_ok());

    // 確認メールは1通だけ送られる
    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Account Cancellation Confirmation");
    assert!(sent[0].text_body.contains("User ID: u1"));
}

#[tokio::test]
async fn test_cancel_account_requires_user_id() {
    let cases = [
        json!({}),
        json!({ "userId": null }),
        json!({ "userId": "" }),
        json!({ "userId": "   " }),
        json!({ "reason": "too expensive", "confirmationEmail": "me@example.com" }),
    ];

    for payload in cases {
        let (app, sender) = setup_app();
        let res = app
            .oneshot(json_request("POST", CANCEL_URI, &payload))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
        let body = read_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User ID is required");
        assert!(body.get("cancelledAt").is_none());
        assert!(sender.sent().is_empty());
    }
}

#[tokio::test]
async fn test_confirmation_sent_to_requested_address() {
    let (app, sender) = setup_app();

    let res = app
        .oneshot(json_request(
            "POST",
            CANCEL_URI,
            &json!({
                "userId": "u2",
                "reason": "Closing the business",
                "confirmationEmail": "owner@example.com"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let sent = sender.sent();
    assert_eq!(sent[0].to_email, "owner@example.com");
    assert!(sent[0].html_body.contains("Sent to: owner@example.com"));
}

#[tokio::test]
async fn test_blank_confirmation_falls_back_to_operator() {
    let (app, sender) = setup_app();

    let res = app
        .oneshot(json_request(
            "POST",
            CANCEL_URI,
            &json!({ "userId": "u3", "confirmationEmail": "  " }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(sender.sent()[0].to_email, TEST_OPERATOR_EMAIL);
}

#[tokio::test]
async fn test_send_failure_does_not_change_response() {
    let sender = Arc::new(FailingSender::default());
    let app = setup_app_with_sender(sender.clone());

    let res = app
        .oneshot(json_request("POST", CANCEL_URI, &json!({ "userId": "u1" })))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["success"], true);
    assert!(body["cancelledAt"].is_string());
    assert_eq!(sender.attempts(), 1);
}

#[tokio::test]
async fn test_invalid_confirmation_address_is_swallowed() {
    let sender = MockEmailSender::new(EmailConfig {
        simulated_latency: Duration::ZERO,
        ..Default::default()
    })
    .unwrap();
    let app = setup_app_with_sender(Arc::new(sender));

    let res = app
        .oneshot(json_request(
            "POST",
            CANCEL_URI,
            &json!({ "userId": "u1", "confirmationEmail": "not-an-address" }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await["success"], true);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, sender) = setup_app();

    let res = app
        .oneshot(raw_json_request("POST", CANCEL_URI, r#"{"userId": "u1""#))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error_type"], "bad_request");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
    assert!(sender.sent().is_empty());
}
