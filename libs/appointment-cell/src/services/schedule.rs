use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use shared_database::{ClinicStore, Collection};
use shared_models::UNKNOWN_REFERENCE;

use crate::models::{Appointment, DailySchedule, Doctor, EnrichedAppointment, Room};

/// Appointments on `today`, joined with their doctor and room, earliest first.
///
/// Missing doctors or rooms degrade to placeholder values. Appointments that start
/// at the same time keep their original relative order.
pub fn today_schedule<'a, I>(
    today: NaiveDate,
    appointments: I,
    doctors: &Collection<Doctor>,
    rooms: &Collection<Room>,
) -> Vec<EnrichedAppointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut enriched: Vec<EnrichedAppointment> = appointments
        .into_iter()
        .filter(|apt| apt.date == today)
        .map(|apt| enrich(apt, doctors, rooms))
        .collect();

    enriched.sort_by_key(|e| e.appointment.start_time);
    enriched
}

fn enrich(
    appointment: &Appointment,
    doctors: &Collection<Doctor>,
    rooms: &Collection<Room>,
) -> EnrichedAppointment {
    let (doctor_name, doctor_specialization) = match doctors.get(appointment.doctor_id) {
        Some(doctor) => (doctor.name.clone(), doctor.specialization.clone()),
        None => (UNKNOWN_REFERENCE.to_string(), String::new()),
    };

    let room_number = rooms
        .get(appointment.room_id)
        .map(|room| room.number.clone())
        .unwrap_or_else(|| UNKNOWN_REFERENCE.to_string());

    EnrichedAppointment {
        appointment: appointment.clone(),
        doctor_name,
        doctor_specialization,
        room_number,
    }
}

pub struct ScheduleService {
    store: Arc<ClinicStore>,
}

impl ScheduleService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub async fn daily_schedule(&self, date: NaiveDate) -> DailySchedule {
        let data = self.store.read().await;
        let appointments =
            today_schedule(date, data.appointments.iter(), &data.doctors, &data.rooms);

        debug!("Schedule for {}: {} appointments", date, appointments.len());

        DailySchedule { date, appointments }
    }
}
