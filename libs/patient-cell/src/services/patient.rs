use tracing::debug;

use shared_database::Table;
use shared_utils::{fields, new_id};

use crate::models::{seed_patients, CreatePatientRequest, Patient, PatientError, UpdatePatientRequest};

#[derive(Debug, Clone)]
pub struct PatientService {
    patients: Table<Patient>,
}

impl PatientService {
    pub fn new(patients: Table<Patient>) -> Self {
        Self { patients }
    }

    /// Service over a fresh table holding the startup patients.
    pub fn seeded() -> Self {
        Self::new(Table::with_rows("patients", seed_patients()))
    }

    pub fn table(&self) -> &Table<Patient> {
        &self.patients
    }

    /// All patients, urgent ones first.
    pub async fn queue(&self) -> Vec<Patient> {
        debug!("Building patient queue");
        urgent_first(self.patients.all().await)
    }

    pub async fn create_patient(&self, request: CreatePatientRequest) -> Result<Patient, PatientError> {
        if !fields::is_present(&request.name) {
            return Err(PatientError::NameRequired);
        }
        let name = request.name.unwrap_or_default();

        debug!("Adding patient to queue: {}", name);
        let patient = self.patients.insert(Patient::new(new_id(), name)).await?;
        debug!("Patient created with ID: {}", patient.id);

        Ok(patient)
    }

    pub async fn update_patient(
        &self,
        patient_id: &str,
        request: UpdatePatientRequest,
    ) -> Result<Patient, PatientError> {
        debug!("Updating patient: {}", patient_id);

        let status = fields::truthy(request.status);
        let priority = fields::truthy(request.priority);

        self.patients
            .update(patient_id, |patient| {
                if let Some(status) = status {
                    patient.status = status;
                }
                if let Some(priority) = priority {
                    patient.priority = priority;
                }
                Ok::<_, PatientError>(())
            })
            .await?
            .ok_or(PatientError::NotFound)
    }

    pub async fn delete_patient(&self, patient_id: &str) -> Result<(), PatientError> {
        debug!("Removing patient: {}", patient_id);

        self.patients
            .remove(patient_id)
            .await
            .map(|_| ())
            .ok_or(PatientError::NotFound)
    }
}

/// Stable partition: urgent patients keep their relative order, as do the rest.
pub fn urgent_first(mut patients: Vec<Patient>) -> Vec<Patient> {
    patients.sort_by_key(|patient| !patient.is_urgent());
    patients
}
