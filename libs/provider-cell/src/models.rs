use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub specialties: Vec<String>,
    pub score: f64,
    #[serde(rename = "availableDates", default)]
    pub available_dates: Vec<AvailabilityWindow>,
}

impl Provider {
    /// Case-insensitive membership test against the provider's specialties.
    pub fn has_specialty(&self, specialty: &str) -> bool {
        let wanted = specialty.to_lowercase();
        self.specialties
            .iter()
            .any(|spec| spec.to_lowercase() == wanted)
    }

    pub fn is_available_at(&self, date: DateTime<Utc>) -> bool {
        self.available_dates.iter().any(|window| window.contains(date))
    }

    pub fn matches(&self, query: &ProviderQuery) -> bool {
        self.has_specialty(&query.specialty)
            && self.score >= query.min_score
            && self.is_available_at(query.date)
    }
}

/// Closed availability range. `from <= to` is expected but never checked;
/// an inverted window simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub from: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub to: DateTime<Utc>,
}

impl AvailabilityWindow {
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.from <= date && date <= self.to
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderQuery {
    pub specialty: String,
    pub min_score: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub date: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked { name: String, date: DateTime<Utc> },
    ProviderNotFound,
    ProviderNotAvailable,
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Booked { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Invalid parameter: {0}")]
    InvalidParam(&'static str),
}
