use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::ClinicStore;
use shared_models::error::AppError;
use shared_utils::extractor::{JsonBody, PathParam, QueryParams};

use crate::models::{
    AvailabilityFilters, AvailabilitySlot, CreateAvailabilityRequest, CreateDoctorRequest, Doctor,
};
use crate::services::{AvailabilityService, DoctorService};

// ==============================================================================
// DOCTOR HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_doctors(State(store): State<Arc<ClinicStore>>) -> Json<Vec<Doctor>> {
    let doctor_service = DoctorService::new(&store);
    Json(doctor_service.list_doctors().await)
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(store): State<Arc<ClinicStore>>,
    JsonBody(request): JsonBody<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Doctor>), AppError> {
    let doctor_service = DoctorService::new(&store);

    let doctor = doctor_service.create_doctor(request).await?;

    Ok((StatusCode::CREATED, Json(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(store): State<Arc<ClinicStore>>,
    PathParam(doctor_id): PathParam<u64>,
) -> Json<Value> {
    let doctor_service = DoctorService::new(&store);
    doctor_service.delete_doctor(doctor_id).await;

    Json(json!({ "message": "Doctor deleted" }))
}

// ==============================================================================
// AVAILABILITY HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_availability(
    State(store): State<Arc<ClinicStore>>,
    QueryParams(filters): QueryParams<AvailabilityFilters>,
) -> Json<Vec<AvailabilitySlot>> {
    let availability_service = AvailabilityService::new(&store);
    Json(availability_service.list_availability(&filters).await)
}

#[axum::debug_handler]
pub async fn create_availability(
    State(store): State<Arc<ClinicStore>>,
    JsonBody(request): JsonBody<CreateAvailabilityRequest>,
) -> Result<(StatusCode, Json<AvailabilitySlot>), AppError> {
    let availability_service = AvailabilityService::new(&store);

    let slot = availability_service.create_availability(request).await?;

    Ok((StatusCode::CREATED, Json(slot)))
}

#[axum::debug_handler]
pub async fn delete_availability(
    State(store): State<Arc<ClinicStore>>,
    PathParam(slot_id): PathParam<u64>,
) -> Json<Value> {
    let availability_service = AvailabilityService::new(&store);
    availability_service.delete_availability(slot_id).await;

    Json(json!({ "message": "Availability deleted" }))
}
