//! Brute-force peak occupancy by pairwise cluster merging.
//!
//! O(n^2). Reference oracle for [`SweepCounter`](super::SweepCounter); it
//! shares no code with the sweep so a defect in one does not hide in both.

use crate::interval::Interval;

/// Quadratic occupancy counter.
#[derive(Debug, Clone, Default)]
pub struct BruteForceCounter;

impl BruteForceCounter {
    pub fn new() -> Self {
        Self
    }

    /// Maximum number of sessions present at any single instant.
    pub fn count<T>(&self, intervals: &[T]) -> usize
    where
        T: Copy + Into<Interval>,
    {
        let mut sorted: Vec<Interval> = intervals.iter().map(|&i| i.into()).collect();
        sorted.sort_unstable();

        let mut best: usize = 0;

        for anchor in &sorted {
            // Every merged session contains the whole window, so the local
            // count never exceeds the real occupancy inside it.
            let mut lo = anchor.start;
            let mut hi = anchor.end;
            let mut local: usize = 0;

            for other in &sorted {
                if other.start > hi {
                    break;
                }
                if other.end < lo {
                    continue;
                }

                lo = lo.max(other.start);
                hi = hi.min(other.end);
                local += 1;

                if local > best {
                    best = local;
                }
            }
        }

        best
    }
}

/// Peak concurrent occupancy computed by brute force.
///
/// Same contract as [`max_concurrent`](super::max_concurrent); intended for
/// cross-validation only.
pub fn max_concurrent_bruteforce(intervals: &[(u64, u64)]) -> usize {
    BruteForceCounter::new().count(intervals)
}
