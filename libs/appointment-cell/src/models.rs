// libs/appointment-cell/src/models.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;
use shared_models::time::hh_mm;
use shared_utils::query;

pub use shared_models::{Appointment, AvailabilitySlot, Doctor, EnrichedAppointment, Room};

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Body of `POST /appointments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_name: Option<String>,
    pub patient_phone: Option<String>,
    pub doctor_id: Option<u64>,
    pub room_id: Option<u64>,
    pub date: Option<NaiveDate>,
    #[serde(default, with = "hh_mm::option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hh_mm::option")]
    pub end_time: Option<NaiveTime>,
    pub notes: Option<String>,
}

/// Query string of `GET /appointments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentFilters {
    #[serde(default, deserialize_with = "query::empty_as_none")]
    pub date: Option<NaiveDate>,
}

/// Body of `GET /dashboard/today`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub appointments: Vec<EnrichedAppointment>,
}

// ==============================================================================
// BOOKING CANDIDATE
// ==============================================================================

/// A booking request with every mandatory field present, not yet validated
/// against the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub patient_name: String,
    pub patient_phone: String,
    pub doctor_id: u64,
    pub room_id: u64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: String,
}

impl NewAppointment {
    pub fn into_appointment(self, id: u64) -> Appointment {
        Appointment {
            id,
            patient_name: self.patient_name,
            patient_phone: self.patient_phone,
            doctor_id: self.doctor_id,
            room_id: self.room_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            notes: self.notes,
        }
    }
}

impl TryFrom<CreateAppointmentRequest> for NewAppointment {
    type Error = AppointmentError;

    fn try_from(request: CreateAppointmentRequest) -> Result<Self, Self::Error> {
        fn require<T>(value: Option<T>, field: &'static str) -> Result<T, AppointmentError> {
            value.ok_or(AppointmentError::MissingField(field))
        }

        Ok(Self {
            patient_name: require(request.patient_name, "patient_name")?,
            doctor_id: require(request.doctor_id, "doctor_id")?,
            room_id: require(request.room_id, "room_id")?,
            date: require(request.date, "date")?,
            start_time: require(request.start_time, "start_time")?,
            end_time: require(request.end_time, "end_time")?,
            patient_phone: request.patient_phone.unwrap_or_default(),
            notes: request.notes.unwrap_or_default(),
        })
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Doctor not available at this time")]
    DoctorNotAvailable,

    #[error("Doctor already has an appointment at this time")]
    DoctorDoubleBooked,

    #[error("Room already booked at this time")]
    RoomDoubleBooked,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl AppointmentError {
    /// Machine-readable reason for booking rejections.
    pub fn code(&self) -> &'static str {
        match self {
            AppointmentError::DoctorNotAvailable => "DOCTOR_NOT_AVAILABLE",
            AppointmentError::DoctorDoubleBooked => "DOCTOR_DOUBLE_BOOKED",
            AppointmentError::RoomDoubleBooked => "ROOM_DOUBLE_BOOKED",
            AppointmentError::MissingField(_) => "MISSING_REQUIRED_FIELD",
        }
    }
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::MissingField(field) => AppError::MissingField(field),
            rejection => AppError::Rejected {
                code: rejection.code(),
                reason: rejection.to_string(),
            },
        }
    }
}
