use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use shared_database::ClinicStore;

use crate::handlers;

pub fn doctor_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route("/{doctor_id}", delete(handlers::delete_doctor))
        .with_state(store)
}

pub fn availability_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_availability).post(handlers::create_availability))
        .route("/{slot_id}", delete(handlers::delete_availability))
        .with_state(store)
}
