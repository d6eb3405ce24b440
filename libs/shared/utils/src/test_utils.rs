use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;
use tower::ServiceExt;

use shared_database::ClinicStore;
use shared_models::{Appointment, AvailabilitySlot, Doctor, Room};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid test time")
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid test request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid test request")
}

/// Runs one request through `app` and decodes the JSON body (`Null` when empty).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (status, json)
}

/// Seeds a store directly, bypassing the HTTP layer.
pub struct TestClinic {
    pub store: Arc<ClinicStore>,
}

impl Default for TestClinic {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClinic {
    pub fn new() -> Self {
        Self {
            store: Arc::new(ClinicStore::new()),
        }
    }

    pub async fn doctor(&self, name: &str, specialization: &str) -> Doctor {
        let mut data = self.store.write().await;
        data.doctors.insert_with(|id| Doctor {
            id,
            name: name.to_string(),
            specialization: specialization.to_string(),
            phone: String::new(),
        })
    }

    pub async fn room(&self, number: &str, room_type: &str) -> Room {
        let mut data = self.store.write().await;
        data.rooms.insert_with(|id| Room {
            id,
            number: number.to_string(),
            room_type: room_type.to_string(),
            capacity: 1,
        })
    }

    pub async fn slot(
        &self,
        doctor_id: u64,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AvailabilitySlot {
        let mut data = self.store.write().await;
        data.availability.insert_with(|id| AvailabilitySlot {
            id,
            doctor_id,
            date,
            start_time,
            end_time,
        })
    }

    /// Inserts an appointment without running booking validation.
    pub async fn appointment(
        &self,
        patient_name: &str,
        doctor_id: u64,
        room_id: u64,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Appointment {
        let mut data = self.store.write().await;
        data.appointments.insert_with(|id| Appointment {
            id,
            patient_name: patient_name.to_string(),
            patient_phone: String::new(),
            doctor_id,
            room_id,
            date,
            start_time,
            end_time,
            notes: String::new(),
        })
    }
}
