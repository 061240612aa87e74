//! Integration tests for the materialized section hierarchy endpoint.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn test_hierarchy_nests_folders_and_files() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);

    let section_id = app.seed_section(owner, "Library").await;
    let folder_a = app.seed_folder(owner, section_id, "A", None).await;
    let folder_b = app.seed_folder(owner, section_id, "B", Some(folder_a)).await;
    app.seed_file(owner, section_id, "f1.txt", Some(folder_a)).await;
    app.seed_file(owner, section_id, "f2.txt", Some(folder_b)).await;
    app.seed_file(owner, section_id, "root.txt", None).await;

    let response = app
        .request(
            "GET",
            &format!("/api/section-hierarchy?sectionId={}", section_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // This body is consumed unwrapped: { section, counts } at top level.
    let data = &response.body;
    assert!(data.get("success").is_none());
    assert!(data.get("data").is_none());
    assert_eq!(data["counts"]["totalFolders"], 2);
    assert_eq!(data["counts"]["totalFiles"], 3);

    let roots = data["section"]["folders"].as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["name"], "A");
    assert_eq!(
        roots[0]["path"],
        serde_json::json!([section_id, folder_a])
    );

    let nested = roots[0]["folders"].as_array().unwrap();
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0]["name"], "B");
    assert_eq!(
        nested[0]["path"],
        serde_json::json!([section_id, folder_a, folder_b])
    );
    assert_eq!(nested[0]["files"][0]["name"], "f2.txt");

    let root_files = data["section"]["files"].as_array().unwrap();
    assert_eq!(root_files.len(), 1);
    assert_eq!(root_files[0]["name"], "root.txt");
    assert_eq!(root_files[0]["path"], serde_json::json!([section_id]));
}

#[tokio::test]
async fn test_hierarchy_requires_section_id() {
    let app = TestApp::new().await;
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .request("GET", "/api/section-hierarchy", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_hierarchy_unknown_section_is_404() {
    let app = TestApp::new().await;
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .request(
            "GET",
            &format!("/api/section-hierarchy?sectionId={}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hierarchy_sorts_sibling_folders_by_name() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);

    let section_id = app.seed_section(owner, "Sorted").await;
    app.seed_folder(owner, section_id, "Zeta", None).await;
    app.seed_folder(owner, section_id, "Alpha", None).await;
    app.seed_folder(owner, section_id, "mid", None).await;

    let response = app
        .request(
            "GET",
            &format!("/api/section-hierarchy?sectionId={}", section_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<&str> = response.body["section"]["folders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "mid", "Zeta"]);
}
