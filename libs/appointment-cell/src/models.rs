// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use shared_database::{Record, TableError};
use shared_models::error::AppError;

pub const STATUS_BOOKED: &str = "Booked";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    /// Not checked against the doctor table.
    pub doctor_id: String,
    pub time: String,
    pub date: String,
    /// `None` after a status update whose body had no `status` key; the key
    /// is then left out of the serialized record. An explicit `null` is kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

impl Record for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub patient_name: Option<String>,
    pub doctor_id: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
}

/// `status` replaces the stored value as-is, including when it is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Value>,
}

/// Maps a key that is present to `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found.")]
    NotFound,

    #[error("All fields are required to book an appointment.")]
    MissingFields,

    #[error(transparent)]
    Storage(#[from] TableError),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound => AppError::NotFound(err.to_string()),
            AppointmentError::MissingFields => AppError::ValidationError(err.to_string()),
            AppointmentError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}
