// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use shared_database::ClinicStore;

use crate::handlers;

pub fn appointment_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::book_appointment))
        .route("/{appointment_id}", delete(handlers::delete_appointment))
        .with_state(store)
}

pub fn dashboard_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/today", get(handlers::get_today_schedule))
        .with_state(store)
}
