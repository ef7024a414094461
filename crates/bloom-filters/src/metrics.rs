//! Metrics hooks for operation-stream processing
//!
//! Provides instrumentation points for counting filter operations, their
//! latencies and the lines the interpreter rejected.
//!
//! ## Usage
//!
//! ```
//! use bloom_filters::metrics::{Metrics, MetricsRecorder};
//! use std::time::Duration;
//!
//! let metrics = Metrics::new();
//! metrics.record_lookup(Duration::from_nanos(120), true);
//! assert_eq!(metrics.snapshot().lookups_positive, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

/// Metrics collector for filter operations
#[derive(Default)]
pub struct Metrics {
    /// Total elements inserted
    pub elements_inserted: AtomicU64,
    /// Total lookups performed
    pub lookups_performed: AtomicU64,
    /// Total positive lookups (matches, including false positives)
    pub lookups_positive: AtomicU64,
    /// Lines rejected as malformed
    pub lines_rejected: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
    /// Cumulative insert time in nanoseconds
    pub insert_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record element insertion
    pub fn record_insert(&self, duration: Duration) {
        self.elements_inserted.fetch_add(1, Ordering::Relaxed);
        self.insert_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record lookup operation
    ///
    /// # Arguments
    /// * `duration` - Time taken for lookup
    /// * `found` - Whether the element was found (possibly false positive)
    pub fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a malformed line
    pub fn record_rejected(&self) {
        self.lines_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            elements_inserted: self.elements_inserted.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            lines_rejected: self.lines_rejected.load(Ordering::Relaxed),
            avg_lookup_ns: self.avg_lookup_time_ns(),
            avg_insert_ns: self.avg_insert_time_ns(),
        }
    }

    /// Calculate average lookup time in nanoseconds
    pub fn avg_lookup_time_ns(&self) -> u64 {
        let total = self.lookup_time_ns.load(Ordering::Relaxed);
        let count = self.lookups_performed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Calculate average insert time in nanoseconds
    pub fn avg_insert_time_ns(&self) -> u64 {
        let total = self.insert_time_ns.load(Ordering::Relaxed);
        let count = self.elements_inserted.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Ratio of positive lookups to total lookups
    ///
    /// Includes both true positives and false positives.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.lookups_performed.load(Ordering::Relaxed);
        let positive = self.lookups_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub elements_inserted: u64,
    pub lookups_performed: u64,
    pub lookups_positive: u64,
    pub lines_rejected: u64,
    pub avg_lookup_ns: u64,
    pub avg_insert_ns: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder {
    /// Record element insertion
    fn record_insert(&self, duration: Duration);

    /// Record lookup operation
    fn record_lookup(&self, duration: Duration, found: bool);

    /// Record a malformed line
    fn record_rejected(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_insert(&self, _: Duration) {}
    fn record_lookup(&self, _: Duration, _: bool) {}
    fn record_rejected(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_insert(&self, duration: Duration) {
        Metrics::record_insert(self, duration);
    }

    fn record_lookup(&self, duration: Duration, found: bool) {
        Metrics::record_lookup(self, duration, found);
    }

    fn record_rejected(&self) {
        Metrics::record_rejected(self);
    }
}

impl<M: MetricsRecorder + ?Sized> MetricsRecorder for std::sync::Arc<M> {
    fn record_insert(&self, duration: Duration) {
        (**self).record_insert(duration);
    }

    fn record_lookup(&self, duration: Duration, found: bool) {
        (**self).record_lookup(duration, found);
    }

    fn record_rejected(&self) {
        (**self).record_rejected();
    }
}
