//! Joint lifecycle loading
//!
//! The four lifecycle requests run concurrently and are awaited together:
//! if any of them fails the whole load fails and no partial dataset is
//! produced. Successful loads are cached per source until their TTL runs
//! out.

use crate::api::LifecycleApi;
use crate::cache::DatasetCache;
use crate::config::ClientConfig;
use crate::error::{FailureScreen, FetchError};
use roadmap_model::UpcomingChange;
use roadmap_view::LifecycleDataset;
use std::sync::Arc;
use std::time::Instant;

/// Progress of a deferred load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Requests in flight
    Loading,
    /// Data available
    Ready(T),
    /// Load failed; show this screen instead of the data
    Failed(FailureScreen),
}

impl<T> LoadState<T> {
    /// State for a finished load
    #[must_use]
    pub fn from_result(result: Result<T, FetchError>, dashboard_url: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(FailureScreen::from_error(&err, dashboard_url)),
        }
    }

    /// Whether requests are still in flight
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded value, if any
    #[inline]
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Failure screen, if the load failed
    #[inline]
    #[must_use]
    pub fn failure(&self) -> Option<&FailureScreen> {
        match self {
            Self::Failed(screen) => Some(screen),
            _ => None,
        }
    }

    /// Map the loaded value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Ready(value) => LoadState::Ready(f(value)),
            Self::Failed(screen) => LoadState::Failed(screen),
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// Fetch the four lifecycle responses and build a dataset
///
/// # Errors
/// Returns the first `FetchError` any request produced.
pub async fn fetch_dataset(api: &dyn LifecycleApi) -> Result<LifecycleDataset, FetchError> {
    let (systems, relevant_systems, app_streams, relevant_app_streams) = tokio::try_join!(
        api.systems(),
        api.relevant_systems(),
        api.app_streams(),
        api.relevant_app_streams(),
    )?;

    tracing::info!(
        systems = systems.len(),
        relevant_systems = relevant_systems.len(),
        app_streams = app_streams.len(),
        relevant_app_streams = relevant_app_streams.len(),
        "lifecycle data fetched"
    );
    Ok(LifecycleDataset::from_responses(
        systems,
        relevant_systems,
        app_streams,
        relevant_app_streams,
    ))
}

/// Cached loader over a [`LifecycleApi`]
#[derive(Clone)]
pub struct LifecycleLoader {
    api: Arc<dyn LifecycleApi>,
    source: String,
    dashboard_url: String,
    datasets: DatasetCache<Arc<LifecycleDataset>>,
    upcoming: DatasetCache<Arc<[UpcomingChange]>>,
}

impl LifecycleLoader {
    /// Create loader with caches sized and timed by `config`
    #[must_use]
    pub fn new(api: Arc<dyn LifecycleApi>, config: &ClientConfig) -> Self {
        Self {
            api,
            source: config.base_url.clone(),
            dashboard_url: config.dashboard_url.clone(),
            datasets: DatasetCache::with_ttl(config.cache_capacity, config.cache_ttl()),
            upcoming: DatasetCache::with_ttl(config.cache_capacity, config.cache_ttl()),
        }
    }

    /// With cache key naming the data source
    #[inline]
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Load the lifecycle dataset, from cache when fresh
    ///
    /// # Errors
    /// Returns the `FetchError` of the failed request; nothing is cached.
    pub async fn load(&self) -> Result<Arc<LifecycleDataset>, FetchError> {
        let started = Instant::now();
        let api = Arc::clone(&self.api);
        let result = self
            .datasets
            .try_get_or_load(&self.source, async move {
                fetch_dataset(api.as_ref()).await.map(Arc::new)
            })
            .await
            .map_err(|err| (*err).clone());

        match &result {
            Ok(dataset) => tracing::debug!(
                source = %self.source,
                records = dataset.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "lifecycle dataset ready"
            ),
            Err(err) => tracing::warn!(source = %self.source, error = %err, "lifecycle load failed"),
        }
        result
    }

    /// Load the lifecycle dataset as a [`LoadState`]
    pub async fn load_state(&self) -> LoadState<Arc<LifecycleDataset>> {
        LoadState::from_result(self.load().await, &self.dashboard_url)
    }

    /// Load upcoming changes, from cache when fresh
    ///
    /// # Errors
    /// Returns the `FetchError` of the request.
    pub async fn upcoming(&self) -> Result<Arc<[UpcomingChange]>, FetchError> {
        let api = Arc::clone(&self.api);
        let result = self
            .upcoming
            .try_get_or_load(&self.source, async move {
                let changes = api.upcoming_changes().await?;
                tracing::info!(changes = changes.len(), "upcoming changes fetched");
                Ok::<_, FetchError>(Arc::from(changes))
            })
            .await
            .map_err(|err| (*err).clone());

        if let Err(err) = &result {
            tracing::warn!(source = %self.source, error = %err, "upcoming changes load failed");
        }
        result
    }

    /// Load upcoming changes as a [`LoadState`]
    pub async fn upcoming_state(&self) -> LoadState<Arc<[UpcomingChange]>> {
        LoadState::from_result(self.upcoming().await, &self.dashboard_url)
    }

    /// Drop cached data so the next load refetches
    pub fn refresh(&self) {
        tracing::debug!(source = %self.source, "cache invalidated");
        self.datasets.invalidate_all();
        self.upcoming.invalidate_all();
    }
}

impl std::fmt::Debug for LifecycleLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleLoader")
            .field("source", &self.source)
            .field("cached", &self.datasets.stats().entry_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockLifecycleApi;
    use roadmap_model::{AppStreamLifecycleRecord, SystemLifecycleRecord};

    fn mock_ok() -> MockLifecycleApi {
        let mut api = MockLifecycleApi::new();
        api.expect_systems()
            .times(1)
            .returning(|| Ok(vec![SystemLifecycleRecord::new("RHEL", 9, 4)]));
        api.expect_relevant_systems().times(1).returning(|| Ok(Vec::new()));
        api.expect_app_streams()
            .times(1)
            .returning(|| Ok(vec![AppStreamLifecycleRecord::new("nodejs", "Node.js 22", 9)]));
        api.expect_relevant_app_streams().times(1).returning(|| Ok(Vec::new()));
        api
    }

    #[tokio::test]
    async fn second_load_is_served_from_cache() {
        let loader = LifecycleLoader::new(Arc::new(mock_ok()), &ClientConfig::default());

        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn one_failure_fails_the_load() {
        let mut api = MockLifecycleApi::new();
        api.expect_systems().returning(|| Ok(Vec::new()));
        api.expect_relevant_systems().returning(|| Ok(Vec::new()));
        api.expect_app_streams().returning(|| Err(FetchError::Timeout));
        api.expect_relevant_app_streams().returning(|| Ok(Vec::new()));

        let loader = LifecycleLoader::new(Arc::new(api), &ClientConfig::default());
        let state = loader.load_state().await;
        assert_eq!(state.failure(), Some(&FailureScreen::Timeout));
        assert!(state.ready().is_none());
    }

    #[tokio::test]
    async fn upcoming_not_enabled_is_locked() {
        let mut api = MockLifecycleApi::new();
        api.expect_upcoming_changes()
            .returning(|| Err(FetchError::NotEnabled));

        let config = ClientConfig::default().with_dashboard_url("https://dash.example");
        let loader = LifecycleLoader::new(Arc::new(api), &config);
        let state = loader.upcoming_state().await;
        assert_eq!(
            state.failure(),
            Some(&FailureScreen::Locked {
                dashboard_url: "https://dash.example".to_string()
            })
        );
    }

    #[test]
    fn load_state_defaults_to_loading() {
        let state: LoadState<u8> = LoadState::default();
        assert!(state.is_loading());
        assert_eq!(LoadState::Ready(2).map(|v: u8| v * 2), LoadState::Ready(4));
    }
}
