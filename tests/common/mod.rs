use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use reportcard::router::init_router;
use reportcard::state::AppState;
use reportcard_core::password::MIN_COST;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Router over an empty in-memory state.
pub fn setup_test_app() -> Router {
    init_router(AppState::in_memory(MIN_COST))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "Response is not JSON. Status: {}, Body: {:?}",
                status,
                String::from_utf8_lossy(&bytes)
            )
        })
    };
    (status, body)
}

#[allow(dead_code)]
pub async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let (status, body) = send(app, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri} failed: {body}");
    body
}

#[allow(dead_code)]
pub async fn create_role(app: &Router, name: &str) -> i64 {
    create(app, "/api/roles", json!({ "name": name })).await["id"]
        .as_i64()
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_grade(app: &Router, level: &str) -> i64 {
    create(app, "/api/grades", json!({ "level": level })).await["id"]
        .as_i64()
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_subject(app: &Router, name: &str) -> i64 {
    create(app, "/api/subjects", json!({ "subjectName": name })).await["id"]
        .as_i64()
        .unwrap()
}

#[allow(dead_code)]
pub fn student_body(email: &str, enrollment_number: &str, role_id: i64, grade_id: i64) -> Value {
    json!({
        "name": "Juan Pérez",
        "email": email,
        "password": "student123",
        "roleId": role_id,
        "enrollmentNumber": enrollment_number,
        "dateOfBirth": "2010-05-15",
        "guardianName": "Pedro Pérez",
        "guardianPhone": "+1234567101",
        "guardianEmail": "pedro.perez@parent.com",
        "address": "Calle 123, Ciudad",
        "gradeId": grade_id
    })
}

#[allow(dead_code)]
pub fn teacher_body(email: &str, license_number: &str, role_id: i64) -> Value {
    json!({
        "name": "Dr. María González",
        "email": email,
        "password": "teacher123",
        "roleId": role_id,
        "degree": "Doctorado en Matemáticas",
        "department": "Departamento de Matemáticas",
        "yearsOfExperience": 15,
        "licenseNumber": license_number,
        "phoneNumber": "+1234567001"
    })
}
