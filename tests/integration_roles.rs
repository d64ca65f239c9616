mod common;

use axum::http::StatusCode;
use common::{create, send, setup_test_app};
use serde_json::json;

// ============ Lifecycle Tests ============

#[tokio::test]
async fn test_role_scenario() {
    let app = setup_test_app();

    let role = create(&app, "/api/roles", json!({ "name": "admin" })).await;
    assert_eq!(role["id"], 1);
    assert_eq!(role["status"], true);

    let (status, body) = send(&app, "POST", "/api/roles", Some(json!({ "name": "admin" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Role with name 'admin' already exists");

    let (status, _) = send(&app, "PUT", "/api/roles/1", Some(json!({ "status": false }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/api/roles/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Role with ID 1 not found");

    let (status, body) = send(&app, "GET", "/api/roles?status=false", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_create_then_find_returns_same_record() {
    let app = setup_test_app();
    let created = create(
        &app,
        "/api/roles",
        json!({ "name": "teacher", "description": "Teacher with limited access" }),
    )
    .await;

    let (status, found) = send(&app, "GET", "/api/roles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());
}

#[tokio::test]
async fn test_duplicate_name_ignores_case() {
    let app = setup_test_app();
    create(&app, "/api/roles", json!({ "name": "Admin" })).await;

    let (status, _) = send(&app, "POST", "/api/roles", Some(json!({ "name": "ADMIN" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_soft_deleted_name_can_be_reused() {
    let app = setup_test_app();
    create(&app, "/api/roles", json!({ "name": "parent" })).await;

    let (status, body) = send(&app, "DELETE", "/api/roles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Role with ID 1 has been removed");

    let (status, _) = send(&app, "DELETE", "/api/roles/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let reused = create(&app, "/api/roles", json!({ "name": "Parent" })).await;
    assert_eq!(reused["id"], 2);

    let (_, all) = send(&app, "GET", "/api/roles", None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
    let (_, active) = send(&app, "GET", "/api/roles?status=true", None).await;
    assert_eq!(active.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_to_own_name_is_not_a_conflict() {
    let app = setup_test_app();
    create(&app, "/api/roles", json!({ "name": "student" })).await;

    let (status, body) =
        send(&app, "PUT", "/api/roles/1", Some(json!({ "name": "student" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "student");
}

#[tokio::test]
async fn test_update_into_taken_name_conflicts() {
    let app = setup_test_app();
    create(&app, "/api/roles", json!({ "name": "admin" })).await;
    create(&app, "/api/roles", json!({ "name": "teacher" })).await;

    let (status, _) = send(&app, "PUT", "/api/roles/2", Some(json!({ "name": "admin" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, "PUT", "/api/roles/9", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============ Request Validation Tests ============

#[tokio::test]
async fn test_missing_name_is_bad_request() {
    let app = setup_test_app();
    let (status, body) = send(&app, "POST", "/api/roles", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_malformed_path_and_query_use_error_body() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/api/roles/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("abc"));

    let (status, body) = send(&app, "GET", "/api/student-subjects/academic-period", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "GET", "/api/roles?status=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("boolean string is expected")
    );
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
