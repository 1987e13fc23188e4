// libs/provider-cell/src/services/matching.rs
use std::sync::Arc;

use tracing::{debug, info};

use crate::models::{Provider, ProviderError};
use crate::services::directory::ProviderDirectory;
use crate::services::validation::{parse_date, parse_min_score, parse_specialty};

pub struct ProviderMatchingService {
    directory: Arc<ProviderDirectory>,
}

impl ProviderMatchingService {
    pub fn new(directory: Arc<ProviderDirectory>) -> Self {
        Self { directory }
    }

    /// Names of providers matching the raw query, best score first.
    ///
    /// Parameters are validated in order (specialty, min score, date) and the
    /// first failure is returned without touching the directory. Providers
    /// with equal scores keep their directory order.
    pub async fn search(
        &self,
        specialty: Option<&str>,
        min_score: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<String>, ProviderError> {
        let specialty = parse_specialty(specialty)?;
        let min_score = parse_min_score(min_score)?;
        let date = parse_date(date)?;

        let mut matches: Vec<Provider> = self
            .directory
            .filter(&specialty, min_score, date)
            .await
            .collect();

        // sort_by is stable, ties stay in directory order
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!("Found {} providers for specialty {} at {}", matches.len(), specialty, date);
        info!(
            specialty = %specialty,
            min_score,
            results = matches.len(),
            "Provider search completed"
        );

        Ok(matches.into_iter().map(|provider| provider.name).collect())
    }
}
