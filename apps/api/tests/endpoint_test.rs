use axum::http::{header, Method, Request, StatusCode};
use axum::body::Body;
use serde_json::json;
use tower::ServiceExt;

use clinic_api::{create_app, create_router, ClinicState};
use shared_utils::test_utils::{empty_request, json_request, read_bytes, read_json};

#[tokio::test]
async fn test_root_reports_running() {
    let app = create_router(ClinicState::seeded());

    let response = app.oneshot(empty_request(Method::GET, "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_bytes(response).await, b"Clinic API is running!");
}

#[tokio::test]
async fn test_new_urgent_patient_jumps_the_queue() {
    let app = create_router(ClinicState::seeded());

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/patients", json!({ "name": "Ann" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json(response).await;
    assert_eq!(created["status"], "Waiting");
    assert_eq!(created["priority"], "Normal");
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/patients/{}", id),
            json!({ "priority": "Urgent" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = read_json(response).await;
    assert_eq!(updated["priority"], "Urgent");
    assert_eq!(updated["status"], "Waiting");

    let response = app.oneshot(empty_request(Method::GET, "/api/queue")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let queue = read_json(response).await;
    let queue = queue.as_array().unwrap();

    let ann = queue.iter().position(|p| p["id"] == id.as_str()).unwrap();
    let first_normal = queue.iter().position(|p| p["priority"] == "Normal").unwrap();
    assert!(ann < first_normal);

    let last_urgent = queue.iter().rposition(|p| p["priority"] == "Urgent").unwrap();
    assert!(last_urgent < first_normal);
}

#[tokio::test]
async fn test_deleted_doctor_is_gone() {
    let app = create_router(ClinicState::seeded());

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/doctors/d2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request(Method::GET, "/api/doctors/d2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await, json!({ "error": "Doctor not found." }));
}

#[tokio::test]
async fn test_deleting_missing_ids_leaves_tables_alone() {
    let state = ClinicState::seeded();
    let app = create_router(state.clone());

    for uri in ["/api/doctors/zz", "/api/patients/zz", "/api/appointments/zz"] {
        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    assert_eq!(state.doctors.table().len().await, 4);
    assert_eq!(state.patients.table().len().await, 3);
    assert_eq!(state.appointments.table().len().await, 0);
}

#[tokio::test]
async fn test_deleting_doctor_keeps_its_appointments() {
    let state = ClinicState::seeded();
    let app = create_router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/appointments",
            json!({ "patientName": "Jane Smith", "doctorId": "d1", "time": "14:00", "date": "2024-08-01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/doctors/d1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request(Method::GET, "/api/appointments"))
        .await
        .unwrap();
    let appointments = read_json(response).await;
    assert_eq!(appointments[0]["doctorId"], "d1");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_app(ClinicState::seeded());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/doctors")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
