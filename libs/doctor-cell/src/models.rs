use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use shared_models::time::hh_mm;
use shared_utils::query;

pub use shared_models::{AvailabilitySlot, Doctor};

/// Body of `POST /doctors`. Required fields are optional here so that their absence
/// is reported by name instead of as a generic decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub doctor_id: Option<u64>,
    pub date: Option<NaiveDate>,
    #[serde(default, with = "hh_mm::option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hh_mm::option")]
    pub end_time: Option<NaiveTime>,
}

/// Query string of `GET /availability`. A blank or non-numeric `doctor_id` is no
/// filter at all; a blank `date` likewise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityFilters {
    #[serde(default, deserialize_with = "query::unparsable_as_none")]
    pub doctor_id: Option<u64>,
    #[serde(default, deserialize_with = "query::empty_as_none")]
    pub date: Option<NaiveDate>,
}

impl AvailabilityFilters {
    pub fn matches(&self, slot: &AvailabilitySlot) -> bool {
        // doctor_id=0 means "no filter"
        let doctor_ok = match self.doctor_id {
            Some(id) if id != 0 => slot.doctor_id == id,
            _ => true,
        };
        let date_ok = self.date.map_or(true, |date| slot.date == date);
        doctor_ok && date_ok
    }
}
