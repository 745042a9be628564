use axum::{routing::{delete, get, post, put}, Router};

use crate::handlers::*;
use crate::services::PatientService;

/// Routes are relative to the API prefix: `/queue`, `/patients`, `/patients/{id}`.
pub fn patient_routes(service: PatientService) -> Router {
    Router::new()
        .route("/queue", get(get_queue))
        .route("/patients", post(create_patient))
        .route("/patients/{id}", put(update_patient))
        .route("/patients/{id}", delete(delete_patient))
        .with_state(service)
}
