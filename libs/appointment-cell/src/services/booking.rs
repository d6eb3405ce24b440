use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::{ClinicStore, Collection};

use crate::models::{
    Appointment, AppointmentError, AppointmentFilters, AvailabilitySlot, CreateAppointmentRequest,
    NewAppointment,
};
use crate::services::conflict::{find_conflict, find_covering_slot, Resource};

/// Checks a candidate against the current schedule without touching it.
///
/// Rules run in order and the first failure wins: the doctor must have a slot
/// covering the interval, then the doctor must be free, then the room must be free.
pub fn validate_booking<'a, S, A>(
    candidate: &NewAppointment,
    slots: S,
    existing: A,
) -> Result<(), AppointmentError>
where
    S: IntoIterator<Item = &'a AvailabilitySlot>,
    A: IntoIterator<Item = &'a Appointment> + Clone,
{
    let NewAppointment {
        doctor_id,
        room_id,
        date,
        start_time,
        end_time,
        ..
    } = *candidate;

    if find_covering_slot(slots, doctor_id, date, start_time, end_time).is_none() {
        return Err(AppointmentError::DoctorNotAvailable);
    }

    if let Some(clash) = find_conflict(
        existing.clone(),
        Resource::Doctor(doctor_id),
        date,
        start_time,
        end_time,
    ) {
        debug!("Doctor {} already committed to appointment {}", doctor_id, clash.id);
        return Err(AppointmentError::DoctorDoubleBooked);
    }

    if let Some(clash) = find_conflict(
        existing,
        Resource::Room(room_id),
        date,
        start_time,
        end_time,
    ) {
        debug!("Room {} already committed to appointment {}", room_id, clash.id);
        return Err(AppointmentError::RoomDoubleBooked);
    }

    Ok(())
}

/// Validates the candidate and, only if every rule passes, stores it under a fresh id.
///
/// Callers hold the store's write lock across this call so that no other booking
/// can slip in between validation and admission.
pub fn validate_and_admit(
    candidate: NewAppointment,
    slots: &Collection<AvailabilitySlot>,
    appointments: &mut Collection<Appointment>,
) -> Result<Appointment, AppointmentError> {
    validate_booking(&candidate, slots.iter(), appointments.iter())?;
    Ok(appointments.insert_with(|id| candidate.into_appointment(id)))
}

pub struct AppointmentBookingService {
    store: Arc<ClinicStore>,
}

impl AppointmentBookingService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub async fn list_appointments(&self, filters: &AppointmentFilters) -> Vec<Appointment> {
        let data = self.store.read().await;
        data.appointments
            .iter()
            .filter(|apt| filters.date.map_or(true, |date| apt.date == date))
            .cloned()
            .collect()
    }

    /// Book an appointment after availability and double-booking checks.
    pub async fn book_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let candidate = NewAppointment::try_from(request)?;

        debug!(
            "Booking doctor {} in room {} on {} {}-{}",
            candidate.doctor_id,
            candidate.room_id,
            candidate.date,
            candidate.start_time,
            candidate.end_time
        );

        let mut guard = self.store.write().await;
        let data = &mut *guard;

        match validate_and_admit(candidate, &data.availability, &mut data.appointments) {
            Ok(appointment) => {
                info!("Appointment booked with ID: {}", appointment.id);
                Ok(appointment)
            }
            Err(e) => {
                warn!("Booking rejected: {} ({})", e, e.code());
                Err(e)
            }
        }
    }

    pub async fn delete_appointment(&self, appointment_id: u64) -> bool {
        let removed = self
            .store
            .write()
            .await
            .appointments
            .remove(appointment_id)
            .is_some();
        debug!("Delete appointment {}: removed={}", appointment_id, removed);
        removed
    }
}
