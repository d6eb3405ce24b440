// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Local;
use serde_json::{json, Value};

use shared_database::ClinicStore;
use shared_models::error::AppError;
use shared_utils::extractor::{JsonBody, PathParam, QueryParams};

use crate::models::{Appointment, AppointmentFilters, CreateAppointmentRequest, DailySchedule};
use crate::services::{AppointmentBookingService, ScheduleService};

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_appointments(
    State(store): State<Arc<ClinicStore>>,
    QueryParams(filters): QueryParams<AppointmentFilters>,
) -> Json<Vec<Appointment>> {
    let booking_service = AppointmentBookingService::new(&store);
    Json(booking_service.list_appointments(&filters).await)
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(store): State<Arc<ClinicStore>>,
    JsonBody(request): JsonBody<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let booking_service = AppointmentBookingService::new(&store);

    let appointment = booking_service.book_appointment(request).await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(store): State<Arc<ClinicStore>>,
    PathParam(appointment_id): PathParam<u64>,
) -> Json<Value> {
    let booking_service = AppointmentBookingService::new(&store);
    booking_service.delete_appointment(appointment_id).await;

    Json(json!({ "message": "Appointment deleted" }))
}

// ==============================================================================
// DASHBOARD HANDLERS
// ==============================================================================

/// Today's appointments in the server's local calendar.
#[axum::debug_handler]
pub async fn get_today_schedule(State(store): State<Arc<ClinicStore>>) -> Json<DailySchedule> {
    let schedule_service = ScheduleService::new(&store);
    let today = Local::now().date_naive();

    Json(schedule_service.daily_schedule(today).await)
}
