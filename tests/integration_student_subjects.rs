mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use common::{create, create_grade, create_role, create_subject, send, setup_test_app, student_body};
use serde_json::{Value, json};

/// App with one student (id 1) and two subjects (ids 1 and 2).
async fn setup_with_student() -> axum::Router {
    let app = setup_test_app();
    let role_id = create_role(&app, "student").await;
    let grade = create_grade(&app, "6° Primaria").await;
    create_subject(&app, "Matemáticas").await;
    create_subject(&app, "Lengua y Literatura").await;
    create(
        &app,
        "/api/students",
        student_body("juan@student.edu", "EST-2024-001", role_id, grade),
    )
    .await;
    app
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_defaulted_and_explicit_period_collide() {
    let app = setup_with_student().await;
    let year = Utc::now().year();

    let first = create(&app, "/api/student-subjects", json!({ "studentId": 1, "subjectId": 1 })).await;
    assert_eq!(first["academicYear"], year);
    assert_eq!(first["semester"], 1);
    assert!(first["enrollmentDate"].is_string());
    assert!(first["finalGrade"].is_null());

    let (status, body) = send(
        &app,
        "POST",
        "/api/student-subjects",
        Some(json!({ "studentId": 1, "subjectId": 1, "academicYear": year, "semester": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "Student 1 is already enrolled in subject 1 for this academic period"
    );

    create(
        &app,
        "/api/student-subjects",
        json!({ "studentId": 1, "subjectId": 1, "academicYear": year, "semester": 2 }),
    )
    .await;
}

#[tokio::test]
async fn test_unknown_student_is_invalid_reference() {
    let app = setup_with_student().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/student-subjects",
        Some(json!({ "studentId": 2, "subjectId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Student with ID 2 does not exist");
}

#[tokio::test]
async fn test_semester_outside_range_is_bad_request() {
    let app = setup_with_student().await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/student-subjects",
        Some(json!({ "studentId": 1, "subjectId": 1, "semester": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_complete_subject() {
    let app = setup_with_student().await;
    let enrollment = create(&app, "/api/student-subjects", json!({ "studentId": 1, "subjectId": 2 })).await;
    let uri = format!("/api/student-subjects/{}/complete", enrollment["id"]);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "finalGrade": 105 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Final grade must be between 0 and 100");

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/student-subjects/99/complete",
        Some(json!({ "finalGrade": 85 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "finalGrade": 85 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["finalGrade"], 85.0);
    assert!(body["completionDate"].is_string());
}

#[tokio::test]
async fn test_patch_and_lookups() {
    let app = setup_with_student().await;
    let math = create(
        &app,
        "/api/student-subjects",
        json!({ "studentId": 1, "subjectId": 1, "academicYear": 2024, "semester": 1 }),
    )
    .await;
    let spanish = create(
        &app,
        "/api/student-subjects",
        json!({ "studentId": 1, "subjectId": 2, "academicYear": 2024, "semester": 2 }),
    )
    .await;

    let (status, list) = send(&app, "GET", "/api/student-subjects/student/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list), vec![1, 2]);

    let (_, list) = send(&app, "GET", "/api/student-subjects/subject/2", None).await;
    assert_eq!(ids(&list), vec![2]);

    let (_, list) = send(
        &app,
        "GET",
        "/api/student-subjects/academic-period?year=2024&semester=1",
        None,
    )
    .await;
    assert_eq!(ids(&list), vec![1]);

    let uri = format!("/api/student-subjects/{}", spanish["id"]);
    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "semester": 1, "subjectId": 1 }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, patched) = send(&app, "PATCH", &uri, Some(json!({ "finalGrade": 92.5 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["finalGrade"], 92.5);
    assert_eq!(patched["semester"], 2);

    let (status, body) = send(&app, "DELETE", &format!("/api/student-subjects/{}", math["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student-Subject enrollment with ID 1 has been removed");

    let (status, body) = send(&app, "GET", "/api/student-subjects/subject/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No active enrollments found for subject 1");
}
