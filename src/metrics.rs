//! Resolution metrics and observability.
//!
//! Counters for table-cache effectiveness and file loading. The resolver
//! records into the process-wide instance returned by
//! [`TranslationMetrics::global`]; tests construct their own instances.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Counters for translation-table resolution.
pub struct TranslationMetrics {
    /// Number of lookups served from the table cache
    cache_hits: AtomicUsize,

    /// Number of lookups that had to load tables from disk
    cache_misses: AtomicUsize,

    /// Number of translation files successfully loaded
    files_loaded: AtomicUsize,

    /// Number of translation files skipped as unreadable or unparseable
    files_skipped: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Create a fresh set of counters, all zero.
    pub fn new() -> Self {
        Self {
            cache_hits: AtomicUsize::new(0),
            cache_misses: AtomicUsize::new(0),
            files_loaded: AtomicUsize::new(0),
            files_skipped: AtomicUsize::new(0),
        }
    }

    /// Get the process-wide metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    /// Record a lookup served from the table cache.
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that had to load its table from disk.
    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successfully loaded translation file.
    pub fn record_file_loaded(&self) {
        self.files_loaded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a translation file skipped as unreadable.
    pub fn record_file_skipped(&self) {
        self.files_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Current cache hit count.
    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    /// Current cache miss count.
    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Current count of files loaded.
    pub fn files_loaded(&self) -> usize {
        self.files_loaded.load(Ordering::Relaxed)
    }

    /// Current count of files skipped.
    pub fn files_skipped(&self) -> usize {
        self.files_skipped.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total = hits + misses;
        let cache_hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            files_loaded: self.files_loaded(),
            files_skipped: self.files_skipped(),
        }
    }
}

impl Default for TranslationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time resolution statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of cache hits
    pub cache_hits: usize,

    /// Number of cache misses
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    /// Number of translation files loaded
    pub files_loaded: usize,

    /// Number of translation files skipped
    pub files_skipped: usize,
}
