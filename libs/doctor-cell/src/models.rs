use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use shared_database::{Record, TableError};
use shared_models::error::AppError;

pub const STATUS_AVAILABLE: &str = "Available";

/// Descriptive fields are JSON values because a merge update stores
/// whatever the client sends for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: Value,
    pub specialization: Value,
    pub status: Value,
    pub gender: Value,
    pub location: Value,
    /// Fields a merge update introduced that the service has no name for.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Doctor {
    /// Overlays every supplied field onto this record. `id` is never
    /// overwritten; unrecognized keys are kept in `extra`.
    pub fn merge(&mut self, fields: Map<String, Value>) {
        for (key, value) in fields {
            let known = match key.as_str() {
                "id" => continue,
                "name" => Some(&mut self.name),
                "specialization" => Some(&mut self.specialization),
                "status" => Some(&mut self.status),
                "gender" => Some(&mut self.gender),
                "location" => Some(&mut self.location),
                _ => None,
            };

            match known {
                Some(slot) => *slot = value,
                None => {
                    self.extra.insert(key, value);
                }
            }
        }
    }
}

impl Record for Doctor {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
}

/// Partial doctor body. Only the keys present are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found.")]
    NotFound,

    #[error("All fields are required for a new doctor.")]
    MissingFields,

    #[error(transparent)]
    Storage(#[from] TableError),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound => AppError::NotFound(err.to_string()),
            DoctorError::MissingFields => AppError::ValidationError(err.to_string()),
            DoctorError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}

pub fn seed_doctors() -> Vec<Doctor> {
    let seed = |id: &str, name: &str, specialization: &str, status: &str, gender: &str, location: &str| Doctor {
        id: id.to_string(),
        name: name.into(),
        specialization: specialization.into(),
        status: status.into(),
        gender: gender.into(),
        location: location.into(),
        extra: Map::new(),
    };

    vec![
        seed("d1", "Dr. Smith", "General Practice", "Available", "Male", "Clinic A"),
        seed("d2", "Dr. Johnson", "Pediatrics", "Busy", "Female", "Clinic B"),
        seed("d3", "Dr. Lee", "Cardiology", "Off Duty", "Female", "Clinic A"),
        seed("d4", "Dr. Patel", "Dermatology", "Available", "Male", "Clinic B"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merge_changes_only_supplied_fields() {
        let mut doctor = seed_doctors().remove(0);
        doctor.merge(fields(json!({ "status": "Busy", "location": "Clinic C" })));

        assert_eq!(doctor.status, "Busy");
        assert_eq!(doctor.location, "Clinic C");
        assert_eq!(doctor.name, "Dr. Smith");
        assert_eq!(doctor.specialization, "General Practice");
        assert!(doctor.extra.is_empty());
    }

    #[test]
    fn test_merge_keeps_unknown_fields_and_id() {
        let mut doctor = seed_doctors().remove(1);
        doctor.merge(fields(json!({ "id": "x9", "phone": "555-0100" })));

        assert_eq!(doctor.id, "d2");
        assert_eq!(doctor.extra.get("phone"), Some(&json!("555-0100")));

        let serialized = serde_json::to_value(&doctor).unwrap();
        assert_eq!(serialized["phone"], "555-0100");
        assert_eq!(serialized["name"], "Dr. Johnson");
    }

    #[test]
    fn test_merge_overwrites_known_field_with_any_value() {
        let mut doctor = seed_doctors().remove(2);
        doctor.merge(fields(json!({ "name": 12, "status": null })));

        assert_eq!(doctor.name, json!(12));
        assert_eq!(doctor.status, Value::Null);
        assert!(doctor.extra.is_empty());

        let serialized = serde_json::to_value(&doctor).unwrap();
        assert_eq!(serialized["name"], 12);
        assert!(serialized.get("status").is_some_and(Value::is_null));
    }
}
