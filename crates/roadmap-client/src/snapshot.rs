//! In-memory [`LifecycleApi`] backed by a snapshot of backend responses
//!
//! Used for offline runs against a saved JSON file and as the fake backend
//! in tests.

use crate::api::LifecycleApi;
use crate::error::{ConfigError, FetchError};
use async_trait::async_trait;
use roadmap_model::{AppStreamLifecycleRecord, SystemLifecycleRecord, UpcomingChange};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The five backend responses in one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// All RHEL releases
    pub systems: Vec<SystemLifecycleRecord>,
    /// Relevant RHEL releases
    pub relevant_systems: Vec<SystemLifecycleRecord>,
    /// All application streams
    pub app_streams: Vec<AppStreamLifecycleRecord>,
    /// Relevant application streams
    pub relevant_app_streams: Vec<AppStreamLifecycleRecord>,
    /// Upcoming changes
    pub upcoming_changes: Vec<UpcomingChange>,
}

/// API answering from a [`Snapshot`]
#[derive(Debug, Clone, Default)]
pub struct StaticLifecycleApi {
    snapshot: Snapshot,
    failure: Option<FetchError>,
}

impl StaticLifecycleApi {
    /// Serve `snapshot`
    #[inline]
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            failure: None,
        }
    }

    /// Parse a JSON snapshot
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    /// Load a JSON snapshot file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let api = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), "serving lifecycle data from snapshot");
        Ok(api)
    }

    /// Fail every lifecycle request with `error`; upcoming changes still succeed
    #[must_use]
    pub fn failing_with(mut self, error: FetchError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Served snapshot
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn serve<T: Clone>(&self, records: &[T]) -> Result<Vec<T>, FetchError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(records.to_vec()),
        }
    }
}

#[async_trait]
impl LifecycleApi for StaticLifecycleApi {
    async fn systems(&self) -> Result<Vec<SystemLifecycleRecord>, FetchError> {
        self.serve(&self.snapshot.systems)
    }

    async fn relevant_systems(&self) -> Result<Vec<SystemLifecycleRecord>, FetchError> {
        self.serve(&self.snapshot.relevant_systems)
    }

    async fn app_streams(&self) -> Result<Vec<AppStreamLifecycleRecord>, FetchError> {
        self.serve(&self.snapshot.app_streams)
    }

    async fn relevant_app_streams(&self) -> Result<Vec<AppStreamLifecycleRecord>, FetchError> {
        self.serve(&self.snapshot.relevant_app_streams)
    }

    async fn upcoming_changes(&self) -> Result<Vec<UpcomingChange>, FetchError> {
        Ok(self.snapshot.upcoming_changes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn partial_snapshot_fills_defaults() {
        let api = StaticLifecycleApi::from_json(
            r#"{"systems":[{"name":"RHEL","major":9,"minor":4}]}"#,
        )
        .unwrap();
        assert_eq!(api.systems().await.unwrap().len(), 1);
        assert!(api.relevant_app_streams().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_api_fails_lifecycle_calls() {
        let api = StaticLifecycleApi::default().failing_with(FetchError::Timeout);
        assert_eq!(api.app_streams().await, Err(FetchError::Timeout));
        assert!(api.upcoming_changes().await.is_ok());
    }

    #[test]
    fn malformed_snapshot_is_error() {
        assert!(matches!(
            StaticLifecycleApi::from_json("{\"systems\": 3}"),
            Err(ConfigError::Snapshot(_))
        ));
    }
}
