use axum::{
    Router,
    routing::{get, post, put, delete},
};

use crate::handlers;
use crate::services::DoctorService;

pub fn doctor_routes(service: DoctorService) -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors))
        .route("/doctors", post(handlers::create_doctor))
        .route("/doctors/{doctor_id}", get(handlers::get_doctor))
        .route("/doctors/{doctor_id}", put(handlers::update_doctor))
        .route("/doctors/{doctor_id}", delete(handlers::delete_doctor))
        .with_state(service)
}
