use serde::{Deserialize, Serialize};

pub use shared_models::Room;

pub const DEFAULT_ROOM_CAPACITY: i32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub capacity: Option<i32>,
}
