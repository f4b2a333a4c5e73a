//! Core interval type for parking sessions.

use std::cmp::Ordering;
use std::fmt;

/// A parking session from arrival to departure.
/// Uses closed coordinates: both `start` and `end` are occupied instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    /// Create a new interval. Callers guarantee `start <= end`.
    #[inline]
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "interval start {} > end {}", start, end);
        Self { start, end }
    }

    /// Returns the duration of the session.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the session arrives and departs at the same instant.
    ///
    /// Such a session still occupies its single instant.
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Check if the session occupies instant `t`.
    #[inline]
    pub fn contains(&self, t: u64) -> bool {
        self.start <= t && t <= self.end
    }

    /// Check if two sessions share at least one instant.
    #[inline]
    pub fn intersects(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Common instants of two sessions, if any.
    #[inline]
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        if !self.intersects(other) {
            return None;
        }
        Some(Interval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }
}

impl From<(u64, u64)> for Interval {
    #[inline]
    fn from((start, end): (u64, u64)) -> Self {
        Interval::new(start, end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then(self.end.cmp(&other.end))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_intersects_closed() {
        let a = Interval::new(1, 8);
        let b = Interval::new(8, 12);
        let c = Interval::new(9, 10);

        assert!(a.intersects(&b)); // Touching endpoints share instant 8
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_instant_interval() {
        let a = Interval::new(11, 11);
        assert!(a.is_instant());
        assert_eq!(a.len(), 0);
        assert!(a.contains(11));
        assert!(!a.contains(10));
        assert!(a.intersects(&Interval::new(10, 11)));
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_interval_intersection() {
        let a = Interval::new(100, 200);
        let b = Interval::new(110, 130);

        assert_eq!(a.intersection(&b), Some(Interval::new(110, 130)));
        assert_eq!(a.intersection(&Interval::new(210, 220)), None);
        assert_eq!(
            Interval::new(2, 4).intersection(&Interval::new(4, 9)),
            Some(Interval::new(4, 4))
        );
    }

    #[test]
    fn test_interval_from_tuple() {
        let a: Interval = (5, 7).into();
        assert_eq!(a.start, 5);
        assert_eq!(a.end, 7);
        assert_eq!(a.to_string(), "[5, 7]");
    }

    #[test]
    fn test_interval_ordering() {
        let mut intervals = [
            Interval::new(5, 8),
            Interval::new(2, 4),
            Interval::new(2, 3),
        ];
        intervals.sort();

        assert_eq!(intervals[0], Interval::new(2, 3));
        assert_eq!(intervals[1], Interval::new(2, 4));
        assert_eq!(intervals[2], Interval::new(5, 8));
    }
}
