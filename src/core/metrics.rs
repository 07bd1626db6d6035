//! Sink metrics for observability
//!
//! Dispatch never reports sink failures to the caller. These counters are
//! where degraded sinks become visible.

use super::error::SinkKind;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-sink failure counters
///
/// # Example
///
/// ```
/// use multi_sink_logger::core::{SinkKind, SinkMetrics};
///
/// let metrics = SinkMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_failure(SinkKind::Remote);
///
/// assert_eq!(metrics.lines_dispatched(), 1);
/// assert_eq!(metrics.failures(SinkKind::Remote), 1);
/// assert_eq!(metrics.total_failures(), 1);
/// ```
#[derive(Debug)]
pub struct SinkMetrics {
    /// Lines rendered and fanned out
    lines_dispatched: AtomicU64,

    durable_failures: AtomicU64,

    primary_failures: AtomicU64,

    remote_failures: AtomicU64,
}

impl SinkMetrics {
    pub const fn new() -> Self {
        Self {
            lines_dispatched: AtomicU64::new(0),
            durable_failures: AtomicU64::new(0),
            primary_failures: AtomicU64::new(0),
            remote_failures: AtomicU64::new(0),
        }
    }

    fn counter(&self, sink: SinkKind) -> &AtomicU64 {
        match sink {
            SinkKind::Durable => &self.durable_failures,
            SinkKind::Primary => &self.primary_failures,
            SinkKind::Remote => &self.remote_failures,
        }
    }

    #[inline]
    pub fn lines_dispatched(&self) -> u64 {
        self.lines_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failures(&self, sink: SinkKind) -> u64 {
        self.counter(sink).load(Ordering::Relaxed)
    }

    pub fn total_failures(&self) -> u64 {
        self.failures(SinkKind::Durable)
            + self.failures(SinkKind::Primary)
            + self.failures(SinkKind::Remote)
    }

    /// Record a dispatched line, returning the previous count
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.lines_dispatched.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write on `sink`, returning the previous count
    #[inline]
    pub fn record_failure(&self, sink: SinkKind) -> u64 {
        self.counter(sink).fetch_add(1, Ordering::Relaxed)
    }

    /// Failed sink writes per dispatched line as a percentage.
    ///
    /// A line that failed on two sinks counts twice, so the rate can exceed
    /// 100% on a logger with several broken sinks. Returns 0.0 before the
    /// first line.
    pub fn failure_rate(&self) -> f64 {
        let dispatched = self.lines_dispatched() as f64;
        if dispatched == 0.0 {
            0.0
        } else {
            (self.total_failures() as f64 / dispatched) * 100.0
        }
    }

    pub fn reset(&self) {
        self.lines_dispatched.store(0, Ordering::Relaxed);
        self.durable_failures.store(0, Ordering::Relaxed);
        self.primary_failures.store(0, Ordering::Relaxed);
        self.remote_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SinkMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_dispatched: AtomicU64::new(self.lines_dispatched()),
            durable_failures: AtomicU64::new(self.failures(SinkKind::Durable)),
            primary_failures: AtomicU64::new(self.failures(SinkKind::Primary)),
            remote_failures: AtomicU64::new(self.failures(SinkKind::Remote)),
        }
    }
}
