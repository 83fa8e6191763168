//! Memoization of blend results.
//!
//! Every blend is a pure function of `(mode, base, blend, opacity)`, so a
//! cached result is always bit-identical to a fresh evaluation. Useful when
//! a host recomposites the same palette entries every frame.

use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};

use crate::blend::params::{BlendMode, BlendParams};
use crate::color::Color;

/// Default number of entries kept before the cache is flushed.
pub const DEFAULT_CAPACITY: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct BlendKey {
    mode: BlendMode,
    base: Color,
    blend: Color,
    opacity: i32,
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to evaluate the blend.
    pub misses: u64,
    /// Times the cache hit capacity and was cleared.
    pub flushes: u64,
}

impl CacheStats {
    /// Hit rate (0.0 - 1.0)
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

/// Thread-safe blend memoizer.
///
/// Bounded by entry count. When full, the whole map is dropped rather than
/// tracking recency; blends are cheap enough that refilling costs little.
pub struct BlendCache {
    entries: RwLock<HashMap<BlendKey, Color>>,
    capacity: usize,
    stats: Mutex<CacheStats>,
}

impl Default for BlendCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BlendCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity,
            stats: Mutex::new(CacheStats::default()),
        }
    }

    /// Return the cached composite of `blend` over `base`, evaluating it on a miss.
    pub fn get_or_blend(&self, base: Color, blend: Color, params: BlendParams) -> Color {
        let key = BlendKey {
            mode: params.mode,
            base,
            blend,
            opacity: params.opacity,
        };

        if let Some(&hit) = self.entries.read().get(&key) {
            self.stats.lock().hits += 1;
            return hit;
        }

        let result = params.apply(base, blend);
        tracing::trace!("blend cache miss: {} {base} over {blend} -> {result}", params.mode);

        let mut entries = self.entries.write();
        let mut stats = self.stats.lock();
        stats.misses += 1;
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            tracing::debug!("blend cache full ({} entries), flushing", entries.len());
            entries.clear();
            stats.flushes += 1;
        }
        entries.insert(key, result);
        result
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        *self.stats.lock()
    }

    /// Drop all entries. Statistics are kept.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(mode: BlendMode, opacity: i32) -> BlendParams {
        BlendParams::new(mode, opacity)
    }

    #[test]
    fn test_cached_result_matches_direct_evaluation() {
        let cache = BlendCache::new();
        let base = Color::from_rgb8(100, 150, 200);
        let blend = Color::from_rgb8(200, 60, 128);
        for mode in BlendMode::ALL {
            let p = params(mode, 60);
            let first = cache.get_or_blend(base, blend, p);
            let second = cache.get_or_blend(base, blend, p);
            assert_eq!(first, p.apply(base, blend));
            assert_eq!(first, second);
        }
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses), (3, 3));
        assert!((stats.hit_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_distinct_keys_are_distinct_entries() {
        let cache = BlendCache::new();
        let base = Color::from_rgb8(10, 20, 30);
        let blend = Color::from_rgb8(40, 50, 60);
        cache.get_or_blend(base, blend, params(BlendMode::Overlay, 50));
        cache.get_or_blend(base, blend, params(BlendMode::Overlay, 51));
        cache.get_or_blend(blend, base, params(BlendMode::Overlay, 50));
        cache.get_or_blend(base, blend, params(BlendMode::SoftLight, 50));
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_flush_when_full() {
        let cache = BlendCache::with_capacity(2);
        let base = Color::BLACK;
        for v in 0..3u8 {
            cache.get_or_blend(base, Color::from_rgb8(v, v, v), BlendParams::default());
        }
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().flushes, 1);
    }

    #[test]
    fn test_clear_keeps_stats() {
        let cache = BlendCache::new();
        cache.get_or_blend(Color::BLACK, Color::WHITE, BlendParams::default());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let cache = BlendCache::with_capacity(0);
        assert_eq!(cache.capacity(), 1);
        cache.get_or_blend(Color::BLACK, Color::WHITE, BlendParams::default());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_empty_stats_hit_rate_is_zero() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
