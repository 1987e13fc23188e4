use std::sync::Arc;

use tracing::info;

use crate::models::{BookingOutcome, ProviderError};
use crate::services::directory::ProviderDirectory;
use crate::services::validation::parse_date;

/// Validation-only booking. Nothing is recorded, so repeated bookings of the
/// same slot all succeed.
pub struct BookingService {
    directory: Arc<ProviderDirectory>,
}

impl BookingService {
    pub fn new(directory: Arc<ProviderDirectory>) -> Self {
        Self { directory }
    }

    pub async fn book(
        &self,
        name: &str,
        raw_date: Option<&str>,
    ) -> Result<BookingOutcome, ProviderError> {
        let date = parse_date(raw_date)?;

        let Some(provider) = self.directory.find_by_name(name).await else {
            info!("Invalid appointment: Provider does not exist | name: {}", name);
            return Ok(BookingOutcome::ProviderNotFound);
        };

        if !provider.is_available_at(date) {
            info!(
                "Invalid appointment: Provider is not available in the specified date | provider: {} | date: {}",
                name, date
            );
            return Ok(BookingOutcome::ProviderNotAvailable);
        }

        info!("Appointment scheduled successfully | provider: {} | date: {}", name, date);
        Ok(BookingOutcome::Booked {
            name: provider.name,
            date,
        })
    }
}
