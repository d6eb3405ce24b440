use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::time::hh_mm;

/// Placeholder used when an appointment points at a doctor or room that no longer exists.
pub const UNKNOWN_REFERENCE: &str = "Unknown";

/// Anything stored in an id-keyed collection.
pub trait Record {
    fn id(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub specialization: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u64,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub capacity: i32,
}

/// A window during which a doctor can be booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: u64,
    pub doctor_id: u64,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
}

impl AvailabilitySlot {
    /// True when `[start, end)` lies entirely inside this slot for the given doctor and date.
    pub fn covers(
        &self,
        doctor_id: u64,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> bool {
        self.doctor_id == doctor_id
            && self.date == date
            && self.start_time <= start
            && self.end_time >= end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub patient_name: String,
    #[serde(default)]
    pub patient_phone: String,
    pub doctor_id: u64,
    pub room_id: u64,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub notes: String,
}

/// Appointment joined with the doctor and room it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedAppointment {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub doctor_name: String,
    pub doctor_specialization: String,
    pub room_number: String,
}

impl Record for Doctor {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Room {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for AvailabilitySlot {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Appointment {
    fn id(&self) -> u64 {
        self.id
    }
}
