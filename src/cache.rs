//! Caches backing the caching decorators.
//!
//! The decorators only see the [`Cache`] trait, so any store can be plugged
//! in. Two implementations ship with the crate:
//!
//! - [`BoundedCache`] wraps a `moka` cache. It evicts by capacity and
//!   optionally by age, and computes each key at most once even when many
//!   threads miss on it together.
//! - [`UnboundedCache`] is a plain map behind a `parking_lot::RwLock`.
//!   Concurrent misses on one key may compute more than once, but the first
//!   stored value wins so every caller sees the same value.

use std::time::Duration;

use ahash::AHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

/// Key-value store consulted by the caching decorators.
///
/// `compute` is called on a miss. Its error, or any failure of the store
/// itself, is reported as a [`CacheError`].
pub trait Cache<V>: Send + Sync {
    fn get_or_compute(
        &self,
        key: &str,
        compute: &dyn Fn() -> Result<V>,
    ) -> std::result::Result<V, CacheError>;
}

// ============================================================================
// BoundedCache
// ============================================================================

/// Configuration for [`BoundedCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries kept
    pub max_capacity: u64,
    /// Evict entries this long after they were inserted
    pub time_to_live: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 2048,
            time_to_live: None,
        }
    }
}

/// Size-bounded concurrent cache.
#[derive(Clone)]
pub struct BoundedCache<V> {
    inner: moka::sync::Cache<String, V>,
    config: CacheConfig,
}

impl<V> BoundedCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(max_capacity: u64) -> Self {
        Self::from_config(CacheConfig {
            max_capacity,
            ..CacheConfig::default()
        })
    }

    pub fn from_config(config: CacheConfig) -> Self {
        let mut builder = moka::sync::Cache::builder().max_capacity(config.max_capacity);
        if let Some(ttl) = config.time_to_live {
            builder = builder.time_to_live(ttl);
        }
        Self {
            inner: builder.build(),
            config,
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Approximate number of entries.
    ///
    /// Eviction runs lazily, so recently evicted entries may still count.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl<V> Default for BoundedCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::from_config(CacheConfig::default())
    }
}

impl<V> Cache<V> for BoundedCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn get_or_compute(
        &self,
        key: &str,
        compute: &dyn Fn() -> Result<V>,
    ) -> std::result::Result<V, CacheError> {
        self.inner
            .try_get_with_by_ref(key, compute)
            .map_err(|e| Box::new(e) as CacheError)
    }
}

// ============================================================================
// UnboundedCache
// ============================================================================

/// Grow-only map cache.
///
/// Suited to a known, finite set of inputs. The first value stored for a
/// key is kept for the lifetime of the cache.
pub struct UnboundedCache<V> {
    entries: RwLock<AHashMap<String, V>>,
}

impl<V: Clone> UnboundedCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(AHashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<V: Clone> Default for UnboundedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Cache<V> for UnboundedCache<V>
where
    V: Clone + Send + Sync,
{
    fn get_or_compute(
        &self,
        key: &str,
        compute: &dyn Fn() -> Result<V>,
    ) -> std::result::Result<V, CacheError> {
        if let Some(value) = self.entries.read().get(key) {
            return Ok(value.clone());
        }

        // Computed without holding the lock; a racing writer may get there first
        let value = compute()?;
        let mut entries = self.entries.write();
        Ok(entries.entry(key.to_owned()).or_insert(value).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimilarityError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    fn counting<'a>(calls: &'a AtomicUsize, value: &'a str) -> impl Fn() -> Result<String> + 'a {
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(value.to_string())
        }
    }

    #[test]
    fn test_bounded_hits_after_first_miss() {
        let cache: BoundedCache<String> = BoundedCache::new(16);
        let calls = AtomicUsize::new(0);
        let compute = counting(&calls, "value");

        assert_eq!(cache.get_or_compute("key", &compute).unwrap(), "value");
        assert_eq!(cache.get_or_compute("key", &compute).unwrap(), "value");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unbounded_hits_after_first_miss() {
        let cache: UnboundedCache<String> = UnboundedCache::new();
        let calls = AtomicUsize::new(0);
        let compute = counting(&calls, "value");

        assert_eq!(cache.get_or_compute("key", &compute).unwrap(), "value");
        assert_eq!(cache.get_or_compute("key", &compute).unwrap(), "value");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_loader_error_is_reported_and_not_cached() {
        let failing = || -> Result<String> { Err(SimilarityError::invalid("boom")) };

        let bounded: BoundedCache<String> = BoundedCache::default();
        let err = bounded.get_or_compute("key", &failing).unwrap_err();
        assert!(err.to_string().contains("boom"));

        let unbounded: UnboundedCache<String> = UnboundedCache::new();
        assert!(unbounded.get_or_compute("key", &failing).is_err());
        assert!(unbounded.is_empty());
    }

    #[test]
    fn test_unbounded_first_writer_wins() {
        let cache = Arc::new(UnboundedCache::<String>::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let compute = move || -> Result<String> { Ok(format!("value-{i}")) };
                    cache.get_or_compute("shared", &compute).unwrap()
                })
            })
            .collect();

        let seen: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(seen.iter().all(|v| v == &seen[0]));
    }

    #[test]
    fn test_cache_config_serde() {
        let config: CacheConfig =
            serde_json::from_str(r#"{"max_capacity": 10, "time_to_live": {"secs": 60, "nanos": 0}}"#)
                .unwrap();
        assert_eq!(config.max_capacity, 10);
        assert_eq!(config.time_to_live, Some(Duration::from_secs(60)));

        let cache: BoundedCache<String> = BoundedCache::from_config(config);
        assert_eq!(cache.config(), config);
    }
}
