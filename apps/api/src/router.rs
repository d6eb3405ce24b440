use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::{appointment_routes, dashboard_routes};
use doctor_cell::{availability_routes, doctor_routes};
use room_cell::room_routes;
use shared_database::ClinicStore;

pub fn create_router(store: Arc<ClinicStore>) -> Router {
    let api = Router::new()
        .nest("/doctors", doctor_routes(store.clone()))
        .nest("/rooms", room_routes(store.clone()))
        .nest("/availability", availability_routes(store.clone()))
        .nest("/appointments", appointment_routes(store.clone()))
        .nest("/dashboard", dashboard_routes(store));

    Router::new()
        .route("/", get(|| async { "Clinic scheduling API is running!" }))
        .nest("/api", api)
}
