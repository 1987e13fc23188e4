use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::services::ProviderDirectory;

pub fn appointment_routes(directory: Arc<ProviderDirectory>) -> Router {
    Router::new()
        .route(
            "/appointments",
            get(handlers::search_appointments).post(handlers::book_appointment),
        )
        .with_state(directory)
}
