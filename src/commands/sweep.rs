//! Sweep-line peak occupancy.
//!
//! O(n log n) for sorting events, O(n) for the sweep.

use crate::config;
use crate::event::{Event, EventKind};
use crate::interval::Interval;
use rayon::prelude::*;

/// Event-sweep occupancy counter.
#[derive(Debug, Clone, Default)]
pub struct SweepCounter;

/// Statistics collected during a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Number of sessions swept
    pub intervals: usize,
    /// Number of events (two per session)
    pub events: usize,
    /// Number of distinct event timestamps
    pub distinct_times: usize,
    /// Peak concurrent occupancy
    pub peak: usize,
    /// Earliest instant at which the peak is reached
    pub peak_time: Option<u64>,
    /// Whether events were sorted on the rayon pool
    pub parallel_sort: bool,
}

impl std::fmt::Display for SweepStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sessions: {}, Events: {}, Timestamps: {}, Peak: {}",
            self.intervals, self.events, self.distinct_times, self.peak
        )?;
        if let Some(t) = self.peak_time {
            write!(f, " at {}", t)?;
        }
        write!(f, ", Parallel: {}", if self.parallel_sort { "yes" } else { "no" })
    }
}

impl SweepCounter {
    pub fn new() -> Self {
        Self
    }

    /// Maximum number of sessions present at any single instant.
    pub fn count<T>(&self, intervals: &[T]) -> usize
    where
        T: Copy + Into<Interval>,
    {
        self.count_with_stats(intervals).peak
    }

    /// Run the sweep and report statistics alongside the peak.
    pub fn count_with_stats<T>(&self, intervals: &[T]) -> SweepStats
    where
        T: Copy + Into<Interval>,
    {
        let (events, parallel_sort) = self.sorted_events(intervals);

        let mut stats = SweepStats {
            intervals: intervals.len(),
            events: events.len(),
            parallel_sort,
            ..SweepStats::default()
        };

        let mut current: usize = 0;
        let mut prev_time: Option<u64> = None;

        for event in &events {
            if prev_time != Some(event.time) {
                stats.distinct_times += 1;
                prev_time = Some(event.time);
            }

            match event.kind {
                EventKind::Arrival => {
                    current += 1;
                    if current > stats.peak {
                        stats.peak = current;
                        stats.peak_time = Some(event.time);
                    }
                }
                EventKind::Departure => {
                    current = current.saturating_sub(1);
                }
            }
        }

        stats
    }

    /// Build the event list sorted by `(time, kind)`.
    fn sorted_events<T>(&self, intervals: &[T]) -> (Vec<Event>, bool)
    where
        T: Copy + Into<Interval>,
    {
        let mut events: Vec<Event> = Vec::with_capacity(intervals.len() * 2);
        for &interval in intervals {
            events.extend(Event::pair(interval.into()));
        }

        // Equal events are indistinguishable, so an unstable sort is exact
        let parallel = config::use_parallel_sort(events.len());
        if parallel {
            events.par_sort_unstable();
        } else {
            events.sort_unstable();
        }

        (events, parallel)
    }
}

/// Peak concurrent occupancy of `(arrival, departure)` pairs.
///
/// Sessions are closed: a car departing at `t` and another arriving at `t`
/// are both present at `t`.
///
/// ```
/// use parking_peak::max_concurrent;
///
/// assert_eq!(max_concurrent(&[(1, 8), (8, 12), (9, 10)]), 2);
/// assert_eq!(max_concurrent(&[]), 0);
/// ```
pub fn max_concurrent(intervals: &[(u64, u64)]) -> usize {
    SweepCounter::new().count(intervals)
}
