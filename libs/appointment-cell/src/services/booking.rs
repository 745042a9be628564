// libs/appointment-cell/src/services/booking.rs
use tracing::{debug, info};

use shared_database::Table;
use shared_utils::{fields, new_id};

use crate::models::{
    Appointment, AppointmentError, BookAppointmentRequest, UpdateAppointmentRequest, STATUS_BOOKED,
};

#[derive(Debug, Clone)]
pub struct AppointmentBookingService {
    appointments: Table<Appointment>,
}

impl AppointmentBookingService {
    pub fn new(appointments: Table<Appointment>) -> Self {
        Self { appointments }
    }

    /// The appointment book starts empty.
    pub fn seeded() -> Self {
        Self::new(Table::new("appointments"))
    }

    pub fn table(&self) -> &Table<Appointment> {
        &self.appointments
    }

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        debug!("Listing appointments");
        self.appointments.all().await
    }

    pub async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let complete = fields::all_present(&[
            &request.patient_name,
            &request.doctor_id,
            &request.time,
            &request.date,
        ]);
        if !complete {
            return Err(AppointmentError::MissingFields);
        }

        let appointment = Appointment {
            id: new_id(),
            patient_name: request.patient_name.unwrap_or_default(),
            doctor_id: request.doctor_id.unwrap_or_default(),
            time: request.time.unwrap_or_default(),
            date: request.date.unwrap_or_default(),
            status: Some(STATUS_BOOKED.into()),
        };

        let appointment = self.appointments.insert(appointment).await?;
        info!(
            "Appointment {} booked for {} with doctor {} on {} at {}",
            appointment.id, appointment.patient_name, appointment.doctor_id, appointment.date, appointment.time
        );

        Ok(appointment)
    }

    pub async fn update_appointment(
        &self,
        appointment_id: &str,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Updating appointment {} status to {:?}", appointment_id, request.status);

        self.appointments
            .update(appointment_id, |appointment| {
                appointment.status = request.status;
                Ok::<_, AppointmentError>(())
            })
            .await?
            .ok_or(AppointmentError::NotFound)
    }

    pub async fn cancel_appointment(&self, appointment_id: &str) -> Result<(), AppointmentError> {
        debug!("Cancelling appointment: {}", appointment_id);

        self.appointments
            .remove(appointment_id)
            .await
            .map(|_| ())
            .ok_or(AppointmentError::NotFound)
    }
}
