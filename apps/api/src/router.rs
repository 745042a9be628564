use axum::{
    Router,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

use appointment_cell::router::appointment_routes;
use appointment_cell::services::AppointmentBookingService;
use doctor_cell::router::doctor_routes;
use doctor_cell::services::DoctorService;
use patient_cell::router::patient_routes;
use patient_cell::services::PatientService;

/// The three resource tables, each owned by its cell's service.
#[derive(Debug, Clone)]
pub struct ClinicState {
    pub patients: PatientService,
    pub doctors: DoctorService,
    pub appointments: AppointmentBookingService,
}

impl ClinicState {
    /// Tables as they look at process start.
    pub fn seeded() -> Self {
        Self {
            patients: PatientService::seeded(),
            doctors: DoctorService::seeded(),
            appointments: AppointmentBookingService::seeded(),
        }
    }
}

pub fn create_router(state: ClinicState) -> Router {
    let api = Router::new()
        .merge(patient_routes(state.patients))
        .merge(doctor_routes(state.doctors))
        .merge(appointment_routes(state.appointments));

    Router::new()
        .route("/", get(|| async { "Clinic API is running!" }))
        .nest("/api", api)
}

/// Router with the HTTP trace and CORS layers the server runs with.
pub fn create_app(state: ClinicState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new()
                    .level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new()
                    .level(Level::INFO)),
        )
        .layer(cors)
}
