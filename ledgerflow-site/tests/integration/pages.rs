// tests/integration/pages.rs

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use crate::common::app_helper::setup_app;
use crate::common::request::{get_request, read_json, read_text};

async fn fetch_page(uri: &str) -> String {
    let (app, _) = setup_app();
    let res = app.oneshot(get_request(uri)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK, "uri: {}", uri);
    let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    read_text(res).await
}

#[tokio::test]
async fn test_landing_page_sections() {
    let html = fetch_page("/").await;

    assert!(html.contains("Tired of Tax Time"));
    assert!(html.contains("Let's Connect"));
    assert!(html.contains("Our Services"));
    assert!(html.contains("Bookkeeping Problem Assessment"));
    assert!(html.contains(r#"data-endpoint="/api/contact""#));
}

#[tokio::test]
async fn test_services_page_sections() {
    let html = fetch_page("/services").await;

    assert!(html.contains("Professional Bookkeeping Services"));
    assert!(html.contains("Additional Services"));
    assert!(html.contains("Estimate Your Monthly Investment"));
    assert!(html.contains("$499"));
}

#[tokio::test]
async fn test_contact_page_sections() {
    let html = fetch_page("/contact").await;

    assert!(html.contains("Get Your Free Consultation"));
    assert!(html.contains("Contact Information"));
    assert!(html.contains("Schedule Consultation"));
    assert!(html.contains("Tell Us About Your Business"));
}

#[tokio::test]
async fn test_cancel_page_prefills_user_id() {
    let html = fetch_page("/account/cancel?userId=user-123").await;

    assert!(html.contains("Cancel Account"));
    assert!(html.contains(r#"name="userId" type="text" required value="user-123""#));
    assert!(html.contains(r#"data-endpoint="/api/account/cancel""#));
}

#[tokio::test]
async fn test_assets_are_served() {
    for (uri, content_type) in [
        ("/assets/site.js", "text/javascript"),
        ("/assets/site.css", "text/css"),
    ] {
        let (app, _) = setup_app();
        let res = app.oneshot(get_request(uri)).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with(content_type));
        assert!(!read_text(res).await.is_empty());
    }
}

#[tokio::test]
async fn test_unknown_routes() {
    let (app, _) = setup_app();
    let res = app.oneshot(get_request("/nowhere")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(read_text(res).await.contains("Page Not Found"));

    let (app, _) = setup_app();
    let res = app.oneshot(get_request("/api/nowhere")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = read_json(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = setup_app();
    let res = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["environment"], "test");
}
