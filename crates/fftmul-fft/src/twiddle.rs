//! Thread-safe cache of twiddle-factor tables.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use num_complex::Complex64;
use parking_lot::Mutex;

/// Thread-safe cache mapping transform length to its root table.
pub struct TwiddleCache {
    cache: Mutex<HashMap<usize, Arc<Vec<Complex64>>>>,
    max_entries: usize,
}

impl TwiddleCache {
    /// Create a new twiddle cache with the given maximum entries.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            max_entries,
        }
    }

    /// Get the root table for transform length `n`, computing it on a miss.
    pub fn roots_for(&self, n: usize) -> Arc<Vec<Complex64>> {
        debug_assert!(n.is_power_of_two());
        if let Some(table) = self.cache.lock().get(&n) {
            return Arc::clone(table);
        }

        tracing::trace!(n, "computing twiddle table");
        let table = Arc::new(compute_roots(n));
        let mut cache = self.cache.lock();
        if cache.len() >= self.max_entries {
            // Simple eviction: clear all (LRU would be more sophisticated)
            cache.clear();
        }
        cache.insert(n, Arc::clone(&table));
        table
    }

    /// Get the number of cached tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Clear the cache.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl Default for TwiddleCache {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Compute exp(-2πi·j/n) for j in 0..n/2.
///
/// Only the first half of the unit circle is needed: the butterfly at
/// stage `size` indexes the table with stride n/size, never past n/2.
#[allow(clippy::cast_precision_loss)]
fn compute_roots(n: usize) -> Vec<Complex64> {
    let mut roots = Vec::with_capacity(n / 2);
    for j in 0..n / 2 {
        let angle = -2.0 * std::f64::consts::PI * (j as f64) / (n as f64);
        roots.push(Complex64::cis(angle));
    }
    roots
}

/// Get the shared process-wide root table for transform length `n`.
pub fn roots_for(n: usize) -> Arc<Vec<Complex64>> {
    static CACHE: OnceLock<TwiddleCache> = OnceLock::new();
    CACHE.get_or_init(TwiddleCache::default).roots_for(n)
}
