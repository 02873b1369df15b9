// tests/integration/pricing.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::app_helper::setup_app;
use crate::common::request::{get_request, json_request, read_json};

#[tokio::test]
async fn test_catalog_lists_all_options() {
    let (app, _) = setup_app();

    let res = app
        .oneshot(get_request("/api/pricing/catalog"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    let data = &body["data"];

    assert_eq!(data["baseTiers"].as_array().unwrap().len(), 3);
    assert_eq!(data["addOns"].as_array().unwrap().len(), 5);
    assert_eq!(data["businessSizes"].as_array().unwrap().len(), 4);
    assert_eq!(data["baseTiers"][1]["id"], "standard");
    assert_eq!(data["baseTiers"][1]["price"], 499);
    assert_eq!(data["addOns"][0]["perEmployee"], true);
}

#[tokio::test]
async fn test_estimate_defaults_to_standard_small() {
    let (app, _) = setup_app();

    let res = app
        .oneshot(json_request("POST", "/api/pricing/estimate", &json!({})))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 499);
    assert_eq!(body["data"]["sizeMultiplier"], 1.0);
}

#[tokio::test]
async fn test_estimate_with_payroll_per_employee() {
    let (app, _) = setup_app();

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/pricing/estimate",
            &json!({
                "baseTier": "standard",
                "businessSize": "small",
                "addOns": ["payroll"],
                "employeeCount": 3
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["total"], 634);
    assert_eq!(body["data"]["addOns"][0]["quantity"], 3);
    assert_eq!(body["data"]["addOns"][0]["amount"], 135.0);
}

#[tokio::test]
async fn test_estimate_rounds_after_multiplier() {
    let (app, _) = setup_app();

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/pricing/estimate",
            &json!({
                "baseTier": "basic",
                "businessSize": "startup",
                "addOns": ["audit", "tax-quarterly"]
            }),
        ))
        .await
        .unwrap();

    let body = read_json(res).await;
    // 299 × 0.7 = 209.3 → 209 + 150 + 300
    assert_eq!(body["data"]["total"], 659);
}

#[tokio::test]
async fn test_unknown_ids_are_rejected() {
    let payloads = [
        json!({ "baseTier": "platinum" }),
        json!({ "addOns": ["bookkeeping-magic"] }),
        json!({ "businessSize": "huge" }),
    ];

    for payload in payloads {
        let (app, _) = setup_app();
        let res = app
            .oneshot(json_request("POST", "/api/pricing/estimate", &payload))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(read_json(res).await["error_type"], "bad_request");
    }
}

#[tokio::test]
async fn test_zero_employees_fails_validation() {
    let (app, _) = setup_app();

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/pricing/estimate",
            &json!({ "addOns": ["payroll"], "employeeCount": 0 }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["error_type"], "validation_errors");
    assert!(body["validation_errors"]["employee_count"].is_array());
}
