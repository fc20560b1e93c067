//! Contrast memo cache: Moka in-memory, keyed by the unordered color pair.
//! The ratio is symmetric, so (a, b) and (b, a) share one entry.

use moka::sync::Cache;

use hueprint_core::Color;

type CacheKey = (Color, Color);

fn make_key(a: Color, b: Color) -> CacheKey {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Memoized unrounded contrast ratios (TinyLFU admission).
pub struct ContrastCache {
    inner: Cache<CacheKey, f64>,
}

impl ContrastCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
        }
    }

    /// Cached ratio for the pair, computing and storing it on a miss.
    pub fn get_or_compute<F>(&self, a: Color, b: Color, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        self.inner.get_with(make_key(a, b), compute)
    }

    pub fn get(&self, a: Color, b: Color) -> Option<f64> {
        self.inner.get(&make_key(a, b))
    }

    /// Number of cached pairs. Moka updates this lazily.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    pub fn clear(&self) {
        self.inner.invalidate_all();
    }
}

impl Default for ContrastCache {
    fn default() -> Self {
        Self::new(hueprint_core::constants::DEFAULT_CONTRAST_CACHE_CAPACITY)
    }
}
