#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use provider_cell::{AvailabilityWindow, DirectoryError, Provider, ProviderDirectory, ProviderSource};

pub fn ms(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

pub fn provider(name: &str, specialties: &[&str], score: f64, windows: &[(i64, i64)]) -> Provider {
    Provider {
        name: name.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        score,
        available_dates: windows
            .iter()
            .map(|&(from, to)| AvailabilityWindow { from: ms(from), to: ms(to) })
            .collect(),
    }
}

pub fn dr_a() -> Provider {
    provider("Dr. A", &["cardiology"], 4.5, &[(1000, 5000)])
}

/// Mixed directory used across search and booking tests.
pub fn sample_providers() -> Vec<Provider> {
    vec![
        dr_a(),
        provider("Dr. B", &["Cardiology", "Pediatrics"], 4.9, &[(0, 2000), (2500, 10_000)]),
        provider("Dr. C", &["dermatology"], 5.0, &[(0, 10_000)]),
        provider("Dr. D", &["CARDIOLOGY"], 4.5, &[(3000, 3000)]),
        provider("Dr. E", &["cardiology"], 3.9, &[(0, 10_000)]),
        provider("Dr. F", &["cardiology"], 4.7, &[]),
    ]
}

pub fn sample_providers_json() -> serde_json::Value {
    json!([
        {
            "name": "Dr. A",
            "specialties": ["cardiology"],
            "score": 4.5,
            "availableDates": [{"from": 1000, "to": 5000}]
        },
        {
            "name": "Dr. B",
            "specialties": ["Cardiology", "Pediatrics"],
            "score": 4.9,
            "availableDates": [{"from": 0, "to": 2000}, {"from": 2500, "to": 10000}]
        }
    ])
}

/// In-memory source that counts how often it is read.
pub struct CountingSource {
    providers: Vec<Provider>,
    delay: Duration,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self::with_delay(providers, Duration::ZERO)
    }

    pub fn with_delay(providers: Vec<Provider>, delay: Duration) -> Self {
        Self {
            providers,
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProviderSource for CountingSource {
    async fn load_providers(&self) -> Result<Vec<Provider>, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.providers.clone())
    }
}

pub fn directory_with(providers: Vec<Provider>) -> Arc<ProviderDirectory> {
    Arc::new(ProviderDirectory::new(Arc::new(CountingSource::new(providers))))
}
