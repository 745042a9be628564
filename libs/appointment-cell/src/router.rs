// libs/appointment-cell/src/router.rs
use axum::{
    Router,
    routing::{get, post, put, delete},
};

use crate::handlers;
use crate::services::AppointmentBookingService;

pub fn appointment_routes(service: AppointmentBookingService) -> Router {
    Router::new()
        .route("/appointments", get(handlers::list_appointments))
        .route("/appointments", post(handlers::book_appointment))
        .route("/appointments/{appointment_id}", put(handlers::update_appointment))
        .route("/appointments/{appointment_id}", delete(handlers::cancel_appointment))
        .with_state(service)
}
