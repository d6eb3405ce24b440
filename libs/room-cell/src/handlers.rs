use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::ClinicStore;
use shared_models::error::AppError;
use shared_utils::extractor::{JsonBody, PathParam};

use crate::models::{CreateRoomRequest, Room};
use crate::services::RoomService;

#[axum::debug_handler]
pub async fn list_rooms(State(store): State<Arc<ClinicStore>>) -> Json<Vec<Room>> {
    let room_service = RoomService::new(&store);
    Json(room_service.list_rooms().await)
}

#[axum::debug_handler]
pub async fn create_room(
    State(store): State<Arc<ClinicStore>>,
    JsonBody(request): JsonBody<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    let room_service = RoomService::new(&store);

    let room = room_service.create_room(request).await?;

    Ok((StatusCode::CREATED, Json(room)))
}

#[axum::debug_handler]
pub async fn delete_room(
    State(store): State<Arc<ClinicStore>>,
    PathParam(room_id): PathParam<u64>,
) -> Json<Value> {
    let room_service = RoomService::new(&store);
    room_service.delete_room(room_id).await;

    Json(json!({ "message": "Room deleted" }))
}
