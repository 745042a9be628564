use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{CreateDoctorRequest, UpdateDoctorRequest};
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn list_doctors(
    State(service): State<DoctorService>,
) -> Result<Json<Value>, AppError> {
    let doctors = service.list_doctors().await;

    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(service): State<DoctorService>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = service.get_doctor(&doctor_id).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(service): State<DoctorService>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor = service.create_doctor(request).await?;

    Ok((StatusCode::CREATED, Json(json!(doctor))))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(service): State<DoctorService>,
    Path(doctor_id): Path<String>,
    Json(request): Json<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = service.update_doctor(&doctor_id, request).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(service): State<DoctorService>,
    Path(doctor_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete_doctor(&doctor_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
