use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::ProviderError;

pub fn parse_specialty(raw: Option<&str>) -> Result<String, ProviderError> {
    match raw {
        Some(specialty) if !specialty.is_empty() => Ok(specialty.to_string()),
        _ => {
            debug!("Invalid request. no specialty");
            Err(ProviderError::InvalidParam("specialty"))
        }
    }
}

pub fn parse_min_score(raw: Option<&str>) -> Result<f64, ProviderError> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .ok_or_else(|| {
            debug!("Invalid min score {:?}", raw);
            ProviderError::InvalidParam("minScore")
        })
}

/// Integer milliseconds since the Unix epoch, as an absolute UTC instant.
pub fn parse_date(raw: Option<&str>) -> Result<DateTime<Utc>, ProviderError> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or_else(|| {
            debug!("Invalid date {:?}", raw);
            ProviderError::InvalidParam("date")
        })
}
