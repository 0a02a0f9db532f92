//! Keyed build-once caches.
//!
//! [`BuildCache`] memoizes expensive, immutable values (the optimal colour
//! stimuli of an illuminant and their triangulation) under a string key.
//! Reads are lock-free through `ArcSwap`: a hit loads the current map snapshot
//! and clones the `Arc` of the cached value. Builds are serialized by a mutex
//! and re-check the map after acquiring it, so concurrent first requests for a
//! key build it exactly once while hits on other keys are never blocked.
//!
//! A failed build caches nothing; the next request retries.

#![forbid(unsafe_code)]

use crate::core::collections::FastHashMap;
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Map snapshot published by a [`BuildCache`].
pub type CacheMap<V> = FastHashMap<String, Arc<V>>;

/// A thread-safe cache of values built at most once per key.
///
/// # Examples
///
/// ```rust
/// use macadam::core::cache::BuildCache;
///
/// let cache: BuildCache<Vec<u32>> = BuildCache::new();
/// let first = cache
///     .get_or_build::<(), _>("squares", || Ok((0..4).map(|i| i * i).collect()))
///     .unwrap();
/// let second = cache
///     .get_or_build::<(), _>("squares", || unreachable!("already cached"))
///     .unwrap();
///
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.build_count(), 1);
/// ```
pub struct BuildCache<V> {
    entries: ArcSwap<CacheMap<V>>,
    build_lock: Mutex<()>,
    builds: AtomicUsize,
}

impl<V> Default for BuildCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for BuildCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildCache")
            .field("keys", &self.keys())
            .field("builds", &self.build_count())
            .finish()
    }
}

impl<V> BuildCache<V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(CacheMap::default()),
            build_lock: Mutex::new(()),
            builds: AtomicUsize::new(0),
        }
    }

    /// Returns the cached value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        self.entries.load().get(key).cloned()
    }

    /// Returns the cached value for `key`, building it with `build` on a miss.
    ///
    /// `build` runs at most once per key across all threads unless it fails.
    ///
    /// # Errors
    ///
    /// Returns the error of `build`; nothing is cached in that case.
    pub fn get_or_build<E, F>(&self, key: &str, build: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        // A poisoned lock only means another build panicked; the map itself is
        // never left half-updated.
        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let value = Arc::new(build()?);
        let count = self.builds.fetch_add(1, Ordering::Relaxed) + 1;
        self.entries.rcu(|current| {
            let mut next: CacheMap<V> = (**current).clone();
            next.insert(key.to_owned(), Arc::clone(&value));
            next
        });
        debug!(key, builds = count, "cache entry built");
        Ok(value)
    }

    /// Removes every entry. Values still held by callers stay alive.
    pub fn clear(&self) {
        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.entries.store(Arc::new(CacheMap::default()));
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    /// Returns `true` when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }

    /// Number of successful builds since creation.
    #[must_use]
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    /// Cached keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.load().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn builds_once_per_key() {
        let cache: BuildCache<String> = BuildCache::new();
        let a = cache.get_or_build::<(), _>("a", || Ok("alpha".into())).unwrap();
        let b = cache.get_or_build::<(), _>("b", || Ok("beta".into())).unwrap();
        let a_again = cache.get_or_build::<(), _>("a", || Ok("other".into())).unwrap();

        assert_eq!(*a, "alpha");
        assert_eq!(*b, "beta");
        assert!(Arc::ptr_eq(&a, &a_again));
        assert_eq!(cache.build_count(), 2);
        assert_eq!(cache.keys(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn failed_builds_are_not_cached() {
        let cache: BuildCache<u32> = BuildCache::new();
        assert_eq!(cache.get_or_build("k", || Err("boom")), Err("boom"));
        assert!(cache.is_empty());
        assert_eq!(cache.build_count(), 0);
        assert_eq!(cache.get_or_build::<&str, _>("k", || Ok(7)).map(|v| *v), Ok(7));
    }

    #[test]
    fn clear_drops_entries_but_not_held_values() {
        let cache: BuildCache<u32> = BuildCache::new();
        let held = cache.get_or_build::<(), _>("k", || Ok(1)).unwrap();
        cache.clear();
        assert!(cache.get("k").is_none());
        assert_eq!(*held, 1);

        let rebuilt = cache.get_or_build::<(), _>("k", || Ok(2)).unwrap();
        assert_eq!(*rebuilt, 2);
        assert_eq!(cache.build_count(), 2);
    }

    #[test]
    fn concurrent_first_requests_build_once() {
        let cache: Arc<BuildCache<usize>> = Arc::new(BuildCache::new());
        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    *cache
                        .get_or_build::<(), _>("shared", || Ok(i))
                        .unwrap()
                })
            })
            .collect();
        let values: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(values.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(cache.build_count(), 1);
        assert_eq!(cache.len(), 1);
    }
}
