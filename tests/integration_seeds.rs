mod common;

use axum::http::StatusCode;
use common::{send, setup_test_app};

#[tokio::test]
async fn test_seed_then_clear() {
    let app = setup_test_app();

    let (status, body) = send(&app, "POST", "/api/seeds", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Database seeded successfully with sample data");
    assert!(body["timestamp"].is_string());

    let (_, roles) = send(&app, "GET", "/api/roles?status=true", None).await;
    assert_eq!(roles.as_array().unwrap().len(), 4);

    let (status, student) = send(&app, "GET", "/api/students/by-enrollment/EST-2024-002", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["name"], "María López");

    let (_, completed) = send(
        &app,
        "GET",
        "/api/student-subjects/academic-period?year=2024&semester=1",
        None,
    )
    .await;
    assert_eq!(completed.as_array().unwrap().len(), 4);

    let (status, body) = send(&app, "DELETE", "/api/seeds", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "All seed data cleared successfully");

    let (_, active) = send(&app, "GET", "/api/teachers?status=true", None).await;
    assert_eq!(active.as_array().unwrap().len(), 0);
    let (_, all) = send(&app, "GET", "/api/teachers", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}
