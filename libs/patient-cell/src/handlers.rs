use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{CreatePatientRequest, UpdatePatientRequest};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn get_queue(
    State(service): State<PatientService>,
) -> Result<Json<Value>, AppError> {
    let patients = service.queue().await;

    Ok(Json(json!(patients)))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(service): State<PatientService>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let patient = service.create_patient(request).await?;

    Ok((StatusCode::CREATED, Json(json!(patient))))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    let patient = service.update_patient(&patient_id, request).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete_patient(&patient_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
