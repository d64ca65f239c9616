mod common;

use axum::http::StatusCode;
use common::{create, send, setup_test_app};
use serde_json::json;

// ============ Grade Tests ============

#[tokio::test]
async fn test_grade_level_is_unique_ignoring_case() {
    let app = setup_test_app();
    let grade = create(&app, "/api/grades", json!({ "level": "1° Primaria" })).await;
    assert_eq!(grade["level"], "1° Primaria");

    let (status, body) =
        send(&app, "POST", "/api/grades", Some(json!({ "level": "1° PRIMARIA" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Grade with level '1° PRIMARIA' already exists");
}

#[tokio::test]
async fn test_grade_update_and_delete() {
    let app = setup_test_app();
    create(&app, "/api/grades", json!({ "level": "Preescolar" })).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/grades/1",
        Some(json!({ "description": "Nivel inicial" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Nivel inicial");
    assert_eq!(body["level"], "Preescolar");

    let (status, body) = send(&app, "DELETE", "/api/grades/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Grade with ID 1 has been removed");

    let (status, _) = send(&app, "GET", "/api/grades/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============ Subject Tests ============

#[tokio::test]
async fn test_subject_roundtrip_keeps_hours() {
    let app = setup_test_app();
    let subject = create(
        &app,
        "/api/subjects",
        json!({
            "subjectName": "Matemáticas",
            "description": "Matemática básica y avanzada",
            "hoursPerWeek": 5
        }),
    )
    .await;

    let (status, found) = send(&app, "GET", "/api/subjects/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, subject);
    assert_eq!(found["hoursPerWeek"], 5);
}

#[tokio::test]
async fn test_subject_name_reusable_after_delete() {
    let app = setup_test_app();
    create(&app, "/api/subjects", json!({ "subjectName": "Inglés" })).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/subjects",
        Some(json!({ "subjectName": "inglés" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Subject with name 'inglés' already exists");

    send(&app, "DELETE", "/api/subjects/1", None).await;
    let reused = create(&app, "/api/subjects", json!({ "subjectName": "inglés" })).await;
    assert_eq!(reused["id"], 2);

    let (_, inactive) = send(&app, "GET", "/api/subjects?status=false", None).await;
    assert_eq!(inactive.as_array().unwrap().len(), 1);
    assert_eq!(inactive[0]["id"], 1);
}
