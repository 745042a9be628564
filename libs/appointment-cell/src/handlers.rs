// libs/appointment-cell/src/handlers.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{BookAppointmentRequest, UpdateAppointmentRequest};
use crate::services::booking::AppointmentBookingService;

#[axum::debug_handler]
pub async fn list_appointments(
    State(service): State<AppointmentBookingService>,
) -> Result<Json<Value>, AppError> {
    let appointments = service.list_appointments().await;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(service): State<AppointmentBookingService>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let appointment = service.book_appointment(request).await?;

    Ok((StatusCode::CREATED, Json(json!(appointment))))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(service): State<AppointmentBookingService>,
    Path(appointment_id): Path<String>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.update_appointment(&appointment_id, request).await?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(service): State<AppointmentBookingService>,
    Path(appointment_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.cancel_appointment(&appointment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
