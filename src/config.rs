//! Global configuration for runtime behavior.
//!
//! This module provides thread-safe global configuration that affects
//! how the sweep sorts its events without adding overhead to hot loops.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default minimum number of events before the sweep sorts in parallel.
/// Below this threshold, sequential sorting is faster due to
/// thread spawn overhead.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Global event-count threshold for parallel sorting.
///
/// This is set once at startup and read once per sweep. The atomic load
/// has negligible overhead compared to the sort itself.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Set the parallel sort threshold.
///
/// Sweeps with at least `events` events sort them on the rayon pool.
/// `usize::MAX` disables parallel sorting entirely.
///
/// # Example
///
/// ```
/// use parking_peak::config;
///
/// // Configure at startup before any counting
/// config::set_parallel_threshold(50_000);
/// assert_eq!(config::parallel_threshold(), 50_000);
/// # config::reset();
/// ```
#[inline]
pub fn set_parallel_threshold(events: usize) {
    PARALLEL_THRESHOLD.store(events, Ordering::Release);
}

/// Current parallel sort threshold.
#[inline]
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Acquire)
}

/// Whether a sweep over `events` events should sort in parallel.
#[inline]
pub fn use_parallel_sort(events: usize) -> bool {
    events >= parallel_threshold()
}

/// Restore default configuration.
pub fn reset() {
    set_parallel_threshold(DEFAULT_PARALLEL_THRESHOLD);
}
