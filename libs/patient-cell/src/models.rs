use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_database::{Record, TableError};
use shared_models::error::AppError;

pub const STATUS_WAITING: &str = "Waiting";
pub const STATUS_WITH_DOCTOR: &str = "With Doctor";
pub const PRIORITY_NORMAL: &str = "Normal";
pub const PRIORITY_URGENT: &str = "Urgent";

/// `status` and `priority` hold whatever truthy value an update supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub status: Value,
    pub priority: Value,
}

impl Patient {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            status: STATUS_WAITING.into(),
            priority: PRIORITY_NORMAL.into(),
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.priority == PRIORITY_URGENT
    }
}

impl Record for Patient {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: Option<String>,
}

/// Both fields are optional and only applied when truthy, so an empty
/// string or `false` leaves the stored value in place. Any truthy value is
/// stored as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub status: Option<Value>,
    pub priority: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatientError {
    #[error("Patient not found.")]
    NotFound,

    #[error("Patient name is required.")]
    NameRequired,

    #[error(transparent)]
    Storage(#[from] TableError),
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound => AppError::NotFound(err.to_string()),
            PatientError::NameRequired => AppError::ValidationError(err.to_string()),
            PatientError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}

pub fn seed_patients() -> Vec<Patient> {
    let seed = |id: &str, name: &str, status: &str, priority: &str| Patient {
        id: id.to_string(),
        name: name.to_string(),
        status: status.into(),
        priority: priority.into(),
    };

    vec![
        seed("1", "John Doe", STATUS_WAITING, PRIORITY_NORMAL),
        seed("2", "Jane Smith", STATUS_WITH_DOCTOR, PRIORITY_NORMAL),
        seed("3", "Bob Johnson", STATUS_WAITING, PRIORITY_URGENT),
    ]
}
