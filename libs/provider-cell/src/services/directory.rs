use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{Provider, ProviderQuery};
use crate::services::source::{DirectoryError, JsonFileSource, ProviderSource};

/// Immutable, process-lifetime set of providers.
///
/// The first successful load is cached and never re-read. Concurrent first
/// callers wait on the same initialisation, so the source is hit once. A
/// failed load leaves the cache empty and the next caller tries again.
pub struct ProviderDirectory {
    source: Arc<dyn ProviderSource>,
    providers: OnceCell<Arc<[Provider]>>,
}

impl ProviderDirectory {
    pub fn new(source: Arc<dyn ProviderSource>) -> Self {
        Self {
            source,
            providers: OnceCell::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(JsonFileSource::new(&config.providers_db_location)))
    }

    pub fn is_loaded(&self) -> bool {
        self.providers.initialized()
    }

    /// Full provider set in directory order. Load failures are logged and
    /// reported as an empty set.
    pub async fn load_all(&self) -> Arc<[Provider]> {
        let loaded = self
            .providers
            .get_or_try_init(|| async {
                let providers = self.source.load_providers().await?;
                info!("Loaded {} providers", providers.len());
                Ok::<_, DirectoryError>(Arc::from(providers))
            })
            .await;

        match loaded {
            Ok(providers) => Arc::clone(providers),
            Err(e) => {
                error!("Error reaching the providers data: {}", e);
                Arc::from(Vec::new())
            }
        }
    }

    /// First provider whose name equals `name` exactly.
    pub async fn find_by_name(&self, name: &str) -> Option<Provider> {
        self.load_all()
            .await
            .iter()
            .find(|provider| provider.name == name)
            .cloned()
    }

    pub async fn filter(
        &self,
        specialty: &str,
        min_score: f64,
        date: DateTime<Utc>,
    ) -> ProviderMatches {
        let query = ProviderQuery {
            specialty: specialty.to_string(),
            min_score,
            date,
        };
        debug!("Filtering providers with {:?}", query);

        ProviderMatches::new(self.load_all().await, query)
    }
}

/// Lazy scan over a directory snapshot yielding providers that match a query,
/// in directory order. [`ProviderMatches::restart`] gives a fresh scan over
/// the same snapshot.
#[derive(Debug, Clone)]
pub struct ProviderMatches {
    providers: Arc<[Provider]>,
    query: ProviderQuery,
    position: usize,
}

impl ProviderMatches {
    fn new(providers: Arc<[Provider]>, query: ProviderQuery) -> Self {
        Self {
            providers,
            query,
            position: 0,
        }
    }

    /// Same scan from the start of the snapshot.
    pub fn restart(&self) -> Self {
        Self::new(Arc::clone(&self.providers), self.query.clone())
    }
}

impl Iterator for ProviderMatches {
    type Item = Provider;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(provider) = self.providers.get(self.position) {
            self.position += 1;
            if provider.matches(&self.query) {
                return Some(provider.clone());
            }
        }
        None
    }
}
