mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_anyone_can_send_a_message() {
    let app = TestApp::new();

    let (status, message) = app
        .send(
            "POST",
            "/api/contact",
            None,
            Some(json!({
                "full_name": "Jane Doe",
                "email": "Jane@Example.com",
                "message": "Hello, I'd like to post a job."
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{message}");
    assert_eq!(message["full_name"], "Jane Doe");
    assert_eq!(message["email"], "jane@example.com");
}

#[tokio::test]
async fn test_invalid_message_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            "POST",
            "/api/contact",
            None,
            Some(json!({
                "full_name": "Jane Doe",
                "email": "not-an-email",
                "message": "<script>alert(1)</script>"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let (status, _) = app
        .send(
            "POST",
            "/api/contact",
            None,
            Some(json!({ "full_name": "Jane Doe" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_moderators_read_messages() {
    let app = TestApp::new();
    let (employer, _) = app.employer_with_company().await;
    let moderator = app.moderator().await;

    for i in 0..3 {
        let (status, _) = app
            .send(
                "POST",
                "/api/contact",
                None,
                Some(json!({
                    "full_name": format!("Sender {i}"),
                    "email": format!("sender{i}@example.com"),
                    "message": "Please call me back"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = app.send("GET", "/api/contact", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .send("GET", "/api/contact", Some(&employer.token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "You don't have permissions to view a contact message"
    );

    let (status, list) = app
        .send("GET", "/api/contact?limit=2", Some(&moderator.token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["meta"]["total"], 3);
    assert_eq!(list["meta"]["has_more"], true);
    assert_eq!(list["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_catalog_is_public() {
    let app = TestApp::new();

    let (status, catalog) = app.send("GET", "/api/catalog", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(catalog["job_types"][0]["value"], "full time");
    assert_eq!(catalog["job_types"][0]["label"], "FULL TIME");
    assert_eq!(catalog["application_statuses"].as_array().unwrap().len(), 6);
    assert_eq!(catalog["user_types"][1]["value"], "Job Seeker");
    assert!(!catalog["trending_keywords"].as_array().unwrap().is_empty());
}
