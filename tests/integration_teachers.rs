mod common;

use axum::http::StatusCode;
use common::{create, create_grade, create_role, create_subject, send, setup_test_app, teacher_body};
use serde_json::json;

#[tokio::test]
async fn test_license_number_is_unique() {
    let app = setup_test_app();
    let role_id = create_role(&app, "teacher").await;
    create(&app, "/api/teachers", teacher_body("maria@school.edu", "TEACH-2020-001", role_id)).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/teachers",
        Some(teacher_body("carlos@school.edu", "teach-2020-001", role_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "Teacher with license number teach-2020-001 already exists"
    );
}

#[tokio::test]
async fn test_unknown_subject_or_grade_is_invalid_reference() {
    let app = setup_test_app();
    let role_id = create_role(&app, "teacher").await;
    let mut body = teacher_body("maria@school.edu", "TEACH-2020-001", role_id);
    body["subjectIds"] = json!([7]);

    let (status, response) = send(&app, "POST", "/api/teachers", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Subject with ID 7 does not exist");

    let mut body = teacher_body("maria@school.edu", "TEACH-2020-001", role_id);
    body["gradeIds"] = json!([3]);
    let (status, response) = send(&app, "POST", "/api/teachers", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Grade with ID 3 does not exist");
}

#[tokio::test]
async fn test_teacher_lookups() {
    let app = setup_test_app();
    let role_id = create_role(&app, "teacher").await;
    let math = create_subject(&app, "Matemáticas").await;
    let grade = create_grade(&app, "1° Secundaria").await;

    let mut body = teacher_body("maria@school.edu", "TEACH-2020-001", role_id);
    body["subjectIds"] = json!([math]);
    body["gradeIds"] = json!([grade]);
    let maria = create(&app, "/api/teachers", body).await;

    let mut body = teacher_body("carlos@school.edu", "TEACH-2021-002", role_id);
    body["department"] = json!("Departamento de Humanidades");
    create(&app, "/api/teachers", body).await;

    let (status, found) = send(
        &app,
        "GET",
        "/api/teachers/by-department?department=Departamento%20de%20Matem%C3%A1ticas",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, json!([maria.clone()]));

    let (_, found) = send(&app, "GET", &format!("/api/teachers/by-subject/{math}"), None).await;
    assert_eq!(found, json!([maria.clone()]));

    let (_, found) = send(&app, "GET", &format!("/api/teachers/by-grade/{grade}"), None).await;
    assert_eq!(found, json!([maria]));

    let (_, found) = send(&app, "GET", "/api/teachers/by-grade/99", None).await;
    assert_eq!(found, json!([]));
}

#[tokio::test]
async fn test_teacher_update_and_delete() {
    let app = setup_test_app();
    let role_id = create_role(&app, "teacher").await;
    let teacher =
        create(&app, "/api/teachers", teacher_body("maria@school.edu", "TEACH-2020-001", role_id)).await;
    assert!(teacher.get("password").is_none());
    let uri = format!("/api/teachers/{}", teacher["id"]);

    let (status, updated) = send(&app, "PUT", &uri, Some(json!({ "yearsOfExperience": 16 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["yearsOfExperience"], 16);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("Teacher with ID {} has been removed", teacher["id"]));

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
