//! Integration tests for file operations: favorite, trash, restore, move.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn test_favorite_and_starred_listing() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;
    let file_id = app.seed_file(owner, section_id, "star.txt", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/sections/{}/files/{}/favorite", section_id, file_id),
            Some(json!({ "favorite": true })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["favorite"], true);

    let starred = app
        .request("GET", "/api/files/starred", None, Some(&token))
        .await;
    assert_eq!(starred.data().as_array().unwrap().len(), 1);
    assert_eq!(starred.data()[0]["name"], "star.txt");
}

#[tokio::test]
async fn test_trash_and_restore_round_trip() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;
    let file_id = app.seed_file(owner, section_id, "temp.txt", None).await;

    let trashed = app
        .request(
            "POST",
            &format!("/api/sections/{}/files/{}/trash", section_id, file_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(trashed.status, StatusCode::OK);

    let listing = app
        .request(
            "GET",
            &format!("/api/sections/{}/files", section_id),
            None,
            Some(&token),
        )
        .await;
    assert!(listing.data().as_array().unwrap().is_empty());

    let restored = app
        .request(
            "POST",
            &format!("/api/sections/{}/files/{}/restore", section_id, file_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(restored.status, StatusCode::OK);
    assert_eq!(restored.data()["deleted"], false);
}

#[tokio::test]
async fn test_update_moves_file_between_folders() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;
    let folder_id = app.seed_folder(owner, section_id, "Dest", None).await;
    let file_id = app.seed_file(owner, section_id, "move.txt", None).await;

    let moved = app
        .request(
            "PUT",
            &format!("/api/sections/{}/files/{}", section_id, file_id),
            Some(json!({ "name": "move.txt", "folderId": folder_id })),
            Some(&token),
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.data()["folderId"], json!(folder_id));

    // Explicit null moves the file back to the section root.
    let rooted = app
        .request(
            "PUT",
            &format!("/api/sections/{}/files/{}", section_id, file_id),
            Some(json!({ "name": "move.txt", "folderId": null })),
            Some(&token),
        )
        .await;
    assert_eq!(rooted.status, StatusCode::OK);
    assert_eq!(rooted.data()["folderId"], json!(null));

    // Omitting folderId renames in place.
    let renamed = app
        .request(
            "PUT",
            &format!("/api/sections/{}/files/{}", section_id, file_id),
            Some(json!({ "name": "renamed.txt" })),
            Some(&token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.data()["name"], "renamed.txt");
    assert_eq!(renamed.data()["folderId"], json!(null));
}

#[tokio::test]
async fn test_move_to_unknown_folder_is_404() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;
    let file_id = app.seed_file(owner, section_id, "lost.txt", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/sections/{}/files/{}", section_id, file_id),
            Some(json!({ "name": "lost.txt", "folderId": Uuid::new_v4() })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recent_files_ordering_and_limit() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);
    let section_id = app.seed_section(owner, "Docs").await;
    for i in 0..3 {
        app.seed_file(owner, section_id, &format!("f{}.txt", i), None)
            .await;
    }

    let response = app
        .request("GET", "/api/files/recent?limit=2", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data().as_array().unwrap().len(), 2);
}
