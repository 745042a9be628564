use tracing::debug;

use shared_database::Table;
use shared_utils::{fields, new_id};

use crate::models::{
    seed_doctors, CreateDoctorRequest, Doctor, DoctorError, UpdateDoctorRequest, STATUS_AVAILABLE,
};

#[derive(Debug, Clone)]
pub struct DoctorService {
    doctors: Table<Doctor>,
}

impl DoctorService {
    pub fn new(doctors: Table<Doctor>) -> Self {
        Self { doctors }
    }

    pub fn seeded() -> Self {
        Self::new(Table::with_rows("doctors", seed_doctors()))
    }

    pub fn table(&self) -> &Table<Doctor> {
        &self.doctors
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        debug!("Listing doctors");
        self.doctors.all().await
    }

    pub async fn get_doctor(&self, doctor_id: &str) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor: {}", doctor_id);
        self.doctors.find(doctor_id).await.ok_or(DoctorError::NotFound)
    }

    /// Create a new doctor profile
    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        let complete = fields::all_present(&[
            &request.name,
            &request.specialization,
            &request.gender,
            &request.location,
        ]);
        if !complete {
            return Err(DoctorError::MissingFields);
        }

        let name = request.name.unwrap_or_default();
        debug!("Creating doctor profile for: {}", name);

        let doctor = Doctor {
            id: new_id(),
            name: name.into(),
            specialization: request.specialization.unwrap_or_default().into(),
            status: STATUS_AVAILABLE.into(),
            gender: request.gender.unwrap_or_default().into(),
            location: request.location.unwrap_or_default().into(),
            extra: Default::default(),
        };

        let doctor = self.doctors.insert(doctor).await?;
        debug!("Doctor profile created with ID: {}", doctor.id);

        Ok(doctor)
    }

    /// Merge the supplied fields into an existing profile
    pub async fn update_doctor(
        &self,
        doctor_id: &str,
        request: UpdateDoctorRequest,
    ) -> Result<Doctor, DoctorError> {
        debug!("Updating doctor {} with fields {:?}", doctor_id, request.fields.keys().collect::<Vec<_>>());

        self.doctors
            .update(doctor_id, |doctor| {
                doctor.merge(request.fields);
                Ok::<_, DoctorError>(())
            })
            .await?
            .ok_or(DoctorError::NotFound)
    }

    pub async fn delete_doctor(&self, doctor_id: &str) -> Result<(), DoctorError> {
        debug!("Removing doctor: {}", doctor_id);

        self.doctors
            .remove(doctor_id)
            .await
            .map(|_| ())
            .ok_or(DoctorError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn full_request() -> CreateDoctorRequest {
        CreateDoctorRequest {
            name: Some("Dr. Okafor".into()),
            specialization: Some("Neurology".into()),
            gender: Some("Female".into()),
            location: Some("Clinic C".into()),
        }
    }

    #[tokio::test]
    async fn test_create_doctor_sets_available() {
        let service = DoctorService::seeded();
        let doctor = service.create_doctor(full_request()).await.unwrap();

        assert_eq!(doctor.status, "Available");
        assert!(!["d1", "d2", "d3", "d4"].contains(&doctor.id.as_str()));
        assert_eq!(service.table().len().await, 5);
    }

    #[tokio::test]
    async fn test_create_doctor_requires_every_field() {
        let service = DoctorService::seeded();

        let cases = [
            CreateDoctorRequest { name: None, ..full_request() },
            CreateDoctorRequest { specialization: Some(String::new()), ..full_request() },
            CreateDoctorRequest { gender: None, ..full_request() },
            CreateDoctorRequest { location: None, ..full_request() },
        ];

        for request in cases {
            assert_matches!(service.create_doctor(request).await, Err(DoctorError::MissingFields));
        }
        assert_eq!(service.table().len().await, 4);
    }

    #[tokio::test]
    async fn test_merge_stores_null_and_non_text_values() {
        let service = DoctorService::seeded();

        let request = UpdateDoctorRequest {
            fields: json!({ "status": null, "gender": 7 }).as_object().cloned().unwrap(),
        };
        let updated = service.update_doctor("d1", request).await.unwrap();

        assert_eq!(updated.status, serde_json::Value::Null);
        assert_eq!(updated.gender, json!(7));
        assert_eq!(updated.name, "Dr. Smith");
        assert_eq!(service.get_doctor("d1").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_missing_doctor() {
        let service = DoctorService::seeded();

        assert_matches!(service.get_doctor("d9").await, Err(DoctorError::NotFound));
        assert_matches!(
            service.update_doctor("d9", UpdateDoctorRequest::default()).await,
            Err(DoctorError::NotFound)
        );
        assert_matches!(service.delete_doctor("d9").await, Err(DoctorError::NotFound));
        assert_eq!(service.table().len().await, 4);
    }
}
