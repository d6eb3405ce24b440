use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use shared_database::ClinicStore;

use crate::handlers;

pub fn room_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_rooms).post(handlers::create_room))
        .route("/{room_id}", delete(handlers::delete_room))
        .with_state(store)
}
