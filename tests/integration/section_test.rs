//! Integration tests for section CRUD and owner scoping.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn test_section_lifecycle() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);

    let created = app
        .request(
            "POST",
            "/api/sections",
            Some(json!({ "name": "Research", "icon": "book" })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let id = created.data()["id"].as_str().unwrap().to_string();
    assert_eq!(created.data()["name"], "Research");

    let renamed = app
        .request(
            "PUT",
            &format!("/api/sections/{}", id),
            Some(json!({ "name": "Archive" })),
            Some(&token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.data()["name"], "Archive");

    let listed = app
        .request("GET", "/api/sections", None, Some(&token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.data().as_array().unwrap().len(), 1);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/sections/{}", id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/sections/{}", id), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_section_requires_auth() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/sections", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sections_are_owner_scoped() {
    let app = TestApp::new().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let section_id = app.seed_section(alice, "Private").await;

    let response = app
        .request(
            "GET",
            &format!("/api/sections/{}", section_id),
            None,
            Some(&app.token_for(bob)),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_section_rejects_empty_name() {
    let app = TestApp::new().await;
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/sections",
            Some(json!({ "name": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
