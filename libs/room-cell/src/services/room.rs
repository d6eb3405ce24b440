use std::sync::Arc;

use tracing::{debug, info};

use shared_database::ClinicStore;
use shared_models::error::AppError;
use shared_utils::validation::require;

use crate::models::{CreateRoomRequest, Room, DEFAULT_ROOM_CAPACITY};

pub struct RoomService {
    store: Arc<ClinicStore>,
}

impl RoomService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub async fn list_rooms(&self) -> Vec<Room> {
        self.store.read().await.rooms.to_vec()
    }

    pub async fn create_room(&self, request: CreateRoomRequest) -> Result<Room, AppError> {
        let number = require(request.number, "number")?;
        let room_type = require(request.room_type, "type")?;
        let capacity = request.capacity.unwrap_or(DEFAULT_ROOM_CAPACITY);

        debug!("Creating room {} ({})", number, room_type);

        let mut data = self.store.write().await;
        let room = data.rooms.insert_with(|id| Room {
            id,
            number,
            room_type,
            capacity,
        });

        info!("Room created with ID: {}", room.id);
        Ok(room)
    }

    /// Appointments booked into the room keep their `room_id`.
    pub async fn delete_room(&self, room_id: u64) -> bool {
        let removed = self.store.write().await.rooms.remove(room_id).is_some();
        debug!("Delete room {}: removed={}", room_id, removed);
        removed
    }
}
