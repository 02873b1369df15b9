// tests/integration/assessment.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::app_helper::setup_app;
use crate::common::request::{get_request, json_request, read_json};

#[tokio::test]
async fn test_questions_are_ordered() {
    let (app, _) = setup_app();

    let res = app
        .oneshot(get_request("/api/assessment/questions"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    let questions = body["data"]["questions"].as_array().unwrap();

    assert_eq!(body["data"]["total"], 5);
    let ids: Vec<&str> = questions.iter().map(|q| q["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        ["frequency", "accuracy", "time-spent", "tax-stress", "cash-flow"]
    );
}

#[tokio::test]
async fn test_score_medium_band() {
    let (app, _) = setup_app();

    // 重み [2, 2, 3, 2, 2] = 11
    let res = app
        .oneshot(json_request(
            "POST",
            "/api/assessment/score",
            &json!({
                "answers": {
                    "frequency": "weekly",
                    "accuracy": "somewhat-confident",
                    "time-spent": "4-8",
                    "tax-stress": "somewhat-stressful",
                    "cash-flow": "good"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["score"], 11);
    assert_eq!(body["data"]["maxScore"], 20);
    assert_eq!(body["data"]["band"], "medium");
    assert_eq!(body["data"]["recommendation"]["level"], "Medium Priority");
}

#[tokio::test]
async fn test_incomplete_answers_are_rejected() {
    let (app, _) = setup_app();

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/assessment/score",
            &json!({ "answers": { "frequency": "weekly" } }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert_eq!(body["success"], false);
    assert!(body["validation_errors"]["answers"].as_array().unwrap().len() >= 4);
}

#[tokio::test]
async fn test_unknown_option_is_rejected() {
    let (app, _) = setup_app();

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/assessment/score",
            &json!({
                "answers": {
                    "frequency": "hourly",
                    "accuracy": "somewhat-confident",
                    "time-spent": "4-8",
                    "tax-stress": "somewhat-stressful",
                    "cash-flow": "good"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
