//! Loaded-data cache using moka
//!
//! Holds immutable loaded values (datasets, upcoming-change lists) keyed by
//! data source, with time-based expiration. Concurrent loads of the same key
//! are coalesced into one backend round trip.

use moka::future::Cache;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// TTL cache of loaded values
#[derive(Clone)]
pub struct DatasetCache<V> {
    inner: Cache<String, V>,
}

impl<V> DatasetCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create cache with time-based expiration
    #[inline]
    #[must_use]
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Get value or run `load`; failures are not cached
    ///
    /// # Errors
    /// Returns the loader's error, shared with every caller that waited on
    /// the same load.
    pub async fn try_get_or_load<E, F>(&self, key: &str, load: F) -> Result<V, Arc<E>>
    where
        E: Send + Sync + 'static,
        F: Future<Output = Result<V, E>>,
    {
        if let Some(cached) = self.inner.get(key).await {
            tracing::debug!(key, "cache hit");
            return Ok(cached);
        }
        self.inner.try_get_with(key.to_string(), load).await
    }

    /// Invalidate all entries
    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl<V> fmt::Debug for DatasetCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetCache")
            .field("entries", &self.inner.entry_count())
            .field("ttl", &self.inner.policy().time_to_live())
            .finish()
    }
}
