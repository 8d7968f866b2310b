//! Memoizing function-call cache.
//!
//! [`MemoCache`] stores one computed value per key and tracks hit/miss
//! counts. [`Memoized`] bundles a cache with its compute function for the
//! common call-through case; recursive memoization (e.g. Fibonacci) uses a
//! `MemoCache` directly via [`MemoCache::get`] and [`MemoCache::insert`].

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of cache effectiveness counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of values currently stored.
    pub entries: usize,
    /// Number of probes that found a value.
    pub hits: u64,
    /// Number of probes that missed.
    pub misses: u64,
    /// Hit percentage over all probes; 0.0 before the first probe.
    pub hit_rate: f64,
}

/// A memoizing cache over a single function argument.
///
/// Probes record hits and misses on atomic counters so a shared lookup
/// (`get` takes `&self`) still counts toward the stats.
#[derive(Debug)]
pub struct MemoCache<K, V> {
    entries: HashMap<K, V>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Eq + Hash, V> MemoCache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look a value up, recording a hit or a miss.
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a value, returning the previous one for the key if any.
    ///
    /// Does not touch the hit/miss counters; only probes do.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> V
    where
        V: Clone,
        F: FnOnce(&K) -> V,
    {
        if let Some(value) = self.get(&key) {
            return value.clone();
        }
        let value = compute(&key);
        self.entries.insert(key, value.clone());
        value
    }

    /// Number of values currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all stored values. Counters are cumulative and are not reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of probes that found a value.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of probes that missed.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Snapshot the current counters.
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits();
        let misses = self.misses();
        let probes = hits + misses;
        let hit_rate = if probes > 0 {
            (hits as f64 / probes as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            entries: self.len(),
            hits,
            misses,
            hit_rate,
        }
    }
}

impl<K: Eq + Hash, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A compute function paired with its memo cache.
///
/// Calling [`Memoized::call`] with a key it has seen before returns the
/// cached value without re-running the function.
pub struct Memoized<K, V, F> {
    cache: MemoCache<K, V>,
    compute: F,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: Fn(&K) -> V,
{
    /// Wrap a compute function with an empty cache.
    pub fn new(compute: F) -> Self {
        Self {
            cache: MemoCache::new(),
            compute,
        }
    }

    /// Return the value for `key`, computing it at most once.
    pub fn call(&mut self, key: K) -> V {
        self.cache.get_or_compute(key, &self.compute)
    }

    /// The underlying cache, for stats inspection.
    pub fn cache(&self) -> &MemoCache<K, V> {
        &self.cache
    }
}
