//! Integration tests for folder operations.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn test_create_folder_under_parent() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;
    let parent_id = app.seed_folder(owner, section_id, "Parent", None).await;

    let response = app
        .request(
            "POST",
            &format!("/api/sections/{}/folders", section_id),
            Some(json!({ "name": "Child", "parentId": parent_id })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["name"], "Child");
    assert_eq!(
        response.data()["parentId"],
        json!(parent_id)
    );
}

#[tokio::test]
async fn test_create_folder_with_unknown_parent_is_404() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;

    let response = app
        .request(
            "POST",
            &format!("/api/sections/{}/folders", section_id),
            Some(json!({ "name": "Orphan", "parentId": Uuid::new_v4() })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_soft_delete_marks_contained_files() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;
    let folder_id = app.seed_folder(owner, section_id, "Doomed", None).await;
    app.seed_file(owner, section_id, "inside.txt", Some(folder_id))
        .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/sections/{}/folders/{}", section_id, folder_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let trash = app
        .request("GET", "/api/files/trash", None, Some(&token))
        .await;
    let names: Vec<&str> = trash.data()
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"inside.txt"));
}

#[tokio::test]
async fn test_hard_delete_removes_folder_and_files() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;
    let folder_id = app.seed_folder(owner, section_id, "Gone", None).await;
    app.seed_file(owner, section_id, "gone.txt", Some(folder_id))
        .await;

    let response = app
        .request(
            "DELETE",
            &format!(
                "/api/sections/{}/folders/{}?permanent=true",
                section_id, folder_id
            ),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let lookup = app
        .request(
            "GET",
            &format!("/api/sections/{}/folders/{}", section_id, folder_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_folders_filters_by_parent() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;
    let parent_id = app.seed_folder(owner, section_id, "Top", None).await;
    app.seed_folder(owner, section_id, "Inner", Some(parent_id))
        .await;

    let roots = app
        .request(
            "GET",
            &format!("/api/sections/{}/folders", section_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(roots.data().as_array().unwrap().len(), 1);
    assert_eq!(roots.data()[0]["name"], "Top");

    let children = app
        .request(
            "GET",
            &format!(
                "/api/sections/{}/folders?parentId={}",
                section_id, parent_id
            ),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(children.data().as_array().unwrap().len(), 1);
    assert_eq!(children.data()[0]["name"], "Inner");
}
