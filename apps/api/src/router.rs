use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use provider_cell::{appointment_routes, ProviderDirectory};

pub fn create_router(directory: Arc<ProviderDirectory>) -> Router {
    Router::new()
        .route("/", get(|| async { "Appointments API is running!" }))
        .merge(appointment_routes(directory))
}
