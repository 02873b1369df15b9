// tests/integration/contact.rs

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::common::app_helper::{setup_app, setup_app_with_sender, TEST_OPERATOR_EMAIL};
use crate::common::mock_sender::FailingSender;
use crate::common::request::{json_request, read_json};

fn lead_payload() -> Value {
    json!({
        "businessName": "Acme Bakery",
        "contactName": "Sam Rivera",
        "email": "sam@acme.test",
        "phone": "(555) 987-6543",
        "businessType": "LLC",
        "serviceInterest": "Tax Preparation",
        "primaryChallenge": "Always behind on monthly reconciliation",
        "secondaryChallenge": "Tax preparation is always stressful",
        "preferredContact": "email"
    })
}

#[tokio::test]
async fn test_submit_lead_notifies_operator() {
    let (app, sender) = setup_app();

    let res = app
        .oneshot(json_request("POST", "/api/contact", &lead_payload()))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["success"], true);
    assert!(body["data"]["acknowledgement"]
        .as_str()
        .unwrap()
        .contains("within 24 hours"));
    let reference_id = body["data"]["referenceId"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(reference_id).is_ok());

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_email, TEST_OPERATOR_EMAIL);
    assert_eq!(sent[0].subject, "New Consultation Lead: Acme Bakery");
    assert!(sent[0].text_body.contains(reference_id));
}

#[tokio::test]
async fn test_lead_validation_errors_by_field() {
    let (app, sender) = setup_app();
    let mut payload = lead_payload();
    payload["email"] = json!("not-an-email");
    payload["primaryChallenge"] = json!("   ");

    let res = app
        .oneshot(json_request("POST", "/api/contact", &payload))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error_type"], "validation_errors");
    assert!(body["validation_errors"]["email"].is_array());
    assert!(body["validation_errors"]["primary_challenge"].is_array());
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_lead_missing_required_field_is_bad_request() {
    let (app, _) = setup_app();
    let mut payload = lead_payload();
    payload.as_object_mut().unwrap().remove("businessName");

    let res = app
        .oneshot(json_request("POST", "/api/contact", &payload))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lead_survives_notification_failure() {
    let sender = Arc::new(FailingSender::default());
    let app = setup_app_with_sender(sender.clone());

    let res = app
        .oneshot(json_request("POST", "/api/contact", &lead_payload()))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(sender.attempts(), 1);
}

#[tokio::test]
async fn test_schedule_consultation() {
    let (app, sender) = setup_app();
    let date = Utc::now().date_naive() + Duration::days(7);

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/contact/consultation",
            &json!({ "preferredDate": date, "timeSlot": "2:00 PM - 3:00 PM" }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["timezone"], "EST");
    assert_eq!(body["data"]["timeSlot"], "2:00 PM - 3:00 PM");
    assert_eq!(
        body["data"]["acknowledgement"],
        "Consultation request submitted! We'll confirm your appointment within 2 hours."
    );
    assert_eq!(sender.sent().len(), 1);
}

#[tokio::test]
async fn test_consultation_rejects_past_date_and_unknown_slot() {
    let (app, _) = setup_app();
    let date = Utc::now().date_naive() - Duration::days(1);

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/contact/consultation",
            &json!({ "preferredDate": date, "timeSlot": "12:00 PM - 1:00 PM" }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert!(body["validation_errors"]["preferred_date"].is_array());
    assert!(body["validation_errors"]["time_slot"].is_array());
}
