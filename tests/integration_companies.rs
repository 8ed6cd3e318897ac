mod common;

use axum::http::StatusCode;
use common::{TestApp, company_body};
use hireboard_models::companies::COMPANY_EXISTS_MESSAGE;
use serde_json::json;

#[tokio::test]
async fn test_employer_registers_company() {
    let app = TestApp::new();
    let employer = app.employer().await;

    let (status, company) = app
        .send(
            "POST",
            "/api/companies",
            Some(&employer.token),
            Some(company_body("Acme")),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{company}");
    assert_eq!(company["name"], "Acme");
    assert_eq!(company["creator_id"], json!(employer.id()));
    assert_eq!(company["is_created"], true);
    assert_eq!(company["is_deleted"], false);

    // Registering a company completes the employer's profile.
    let (status, me) = app
        .send("GET", "/api/auth/me", Some(&employer.token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["is_profile_completed"], true);
}

#[tokio::test]
async fn test_second_company_conflicts_and_first_is_unchanged() {
    let app = TestApp::new();
    let (employer, company) = app.employer_with_company().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/companies",
            Some(&employer.token),
            Some(company_body("Globex")),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], COMPANY_EXISTS_MESSAGE);

    let (status, mine) = app
        .send("GET", "/api/companies/me", Some(&employer.token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine["id"], json!(company.id));
    assert_eq!(mine["name"], "Acme");
}

#[tokio::test]
async fn test_non_employers_cannot_register_company() {
    let app = TestApp::new();
    let seeker = app.job_seeker().await;
    let moderator = app.moderator().await;

    for user in [&seeker, &moderator] {
        let (status, body) = app
            .send(
                "POST",
                "/api/companies",
                Some(&user.token),
                Some(company_body("Nope")),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "You don't have permissions to create a company");
    }
}

#[tokio::test]
async fn test_invalid_company_is_unprocessable() {
    let app = TestApp::new();
    let employer = app.employer().await;

    let mut body = company_body("Acme");
    body["founded_year"] = json!(1200);

    let (status, _) = app
        .send("POST", "/api/companies", Some(&employer.token), Some(body))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_my_company_requires_completed_profile() {
    let app = TestApp::new();
    let employer = app.employer().await;

    let (status, _) = app
        .send("GET", "/api/companies/me", Some(&employer.token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_company_lists_its_jobs() {
    let app = TestApp::new();
    let (employer, company) = app.employer_with_company().await;
    let seeker = app.job_seeker().await;
    app.post_job(&employer).await;
    app.post_job(&employer).await;

    let (status, jobs) = app
        .send(
            "GET",
            &format!("/api/companies/{}/jobs", company.id),
            Some(&seeker.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(jobs["meta"]["total"], 2);
    assert_eq!(jobs["data"][0]["company_id"], json!(company.id));

    let (status, detail) = app
        .send(
            "GET",
            &format!("/api/companies/{}", company.id),
            Some(&seeker.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["active_jobs"], 2);
}

#[tokio::test]
async fn test_only_creator_or_moderator_updates() {
    let app = TestApp::new();
    let (owner, company) = app.employer_with_company().await;
    let (other, _) = app.employer_with_company().await;
    let moderator = app.moderator().await;
    let uri = format!("/api/companies/{}", company.id);

    let (status, _) = app
        .send("PUT", &uri, Some(&other.token), Some(json!({ "name": "Taken" })))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, updated) = app
        .send("PUT", &uri, Some(&owner.token), Some(json!({ "location": "Accra" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["location"], "Accra");
    assert_eq!(updated["name"], "Acme");

    let (status, updated) = app
        .send(
            "PUT",
            &uri,
            Some(&moderator.token),
            Some(json!({ "name": "Acme Ltd" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Acme Ltd");
}

#[tokio::test]
async fn test_moderator_delete_hides_company_and_jobs() {
    let app = TestApp::new();
    let (owner, company) = app.employer_with_company().await;
    let moderator = app.moderator().await;
    app.post_job(&owner).await;
    let uri = format!("/api/companies/{}", company.id);

    let (status, deleted) = app.send("DELETE", &uri, Some(&moderator.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["is_deleted"], true);
    assert_eq!(deleted["is_created"], false);

    let (status, _) = app.send("GET", &uri, Some(&owner.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = app.send("GET", "/api/companies", Some(&owner.token), None).await;
    assert_eq!(list["meta"]["total"], 0);

    let (_, jobs) = app.send("GET", "/api/jobs", Some(&owner.token), None).await;
    assert_eq!(jobs["meta"]["total"], 0);

    let (status, _) = app.send("DELETE", &uri, Some(&moderator.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, audited) = app
        .send(
            "GET",
            &format!("{uri}?include_deleted=true"),
            Some(&moderator.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(audited["is_deleted"], true);
}

#[tokio::test]
async fn test_list_filters_by_name() {
    let app = TestApp::new();
    let first = app.employer().await;
    let second = app.employer().await;
    for (user, name) in [(&first, "Acme Security"), (&second, "Globex")] {
        let (status, _) = app
            .send("POST", "/api/companies", Some(&user.token), Some(company_body(name)))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, list) = app
        .send("GET", "/api/companies?name=acme", Some(&first.token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["meta"]["total"], 1);
    assert_eq!(list["data"][0]["name"], "Acme Security");
}
