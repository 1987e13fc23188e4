use std::sync::Arc;

use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_models::error::AppError;

use crate::models::{BookingOutcome, BookingRequest, ProviderError};
use crate::services::{BookingService, ProviderDirectory, ProviderMatchingService};

const INVALID_REQUEST: &str = "Invalid request";

#[derive(Debug, Deserialize)]
pub struct AppointmentSearchQuery {
    pub specialty: Option<String>,
    #[serde(rename = "minScore", alias = "min_score")]
    pub min_score: Option<String>,
    pub date: Option<String>,
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidParam(_) => AppError::BadRequest(INVALID_REQUEST.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn search_appointments(
    State(directory): State<Arc<ProviderDirectory>>,
    query: Result<Query<AppointmentSearchQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        debug!("Rejected search query: {}", rejection);
        AppError::BadRequest(INVALID_REQUEST.to_string())
    })?;

    let matching_service = ProviderMatchingService::new(directory);

    let names = matching_service
        .search(
            query.specialty.as_deref(),
            query.min_score.as_deref(),
            query.date.as_deref(),
        )
        .await
        .inspect_err(|_| error!("Invalid param | request args: {:?}", query))?;

    Ok(Json(names))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(directory): State<Arc<ProviderDirectory>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected booking payload: {}", rejection);
        AppError::BadRequest(INVALID_REQUEST.to_string())
    })?;

    let booking_service = BookingService::new(directory);
    let raw_date = request.date.to_string();

    match booking_service.book(&request.name, Some(&raw_date)).await? {
        BookingOutcome::Booked { name, date } => Ok(Json(json!({
            "name": name,
            "date": date.to_rfc3339(),
        }))),
        BookingOutcome::ProviderNotFound => Err(AppError::InvalidAppointment(
            "Provider does not exist".to_string(),
        )),
        BookingOutcome::ProviderNotAvailable => Err(AppError::InvalidAppointment(
            "Provider is not available in the specified date".to_string(),
        )),
    }
}
