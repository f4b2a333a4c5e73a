//! Sweep-line events derived from sessions.

use crate::interval::Interval;

/// Kind of a sweep event.
///
/// Variant order is the tie-break at equal timestamps: every arrival at
/// `t` is processed before any departure at `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Arrival,
    Departure,
}

/// A single arrival or departure.
///
/// Field order makes the derived `Ord` sort by `(time, kind)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Event {
    pub time: u64,
    pub kind: EventKind,
}

impl Event {
    #[inline]
    pub fn arrival(time: u64) -> Self {
        Self {
            time,
            kind: EventKind::Arrival,
        }
    }

    #[inline]
    pub fn departure(time: u64) -> Self {
        Self {
            time,
            kind: EventKind::Departure,
        }
    }

    /// Both events of a session.
    #[inline]
    pub fn pair(interval: Interval) -> [Event; 2] {
        [Event::arrival(interval.start), Event::departure(interval.end)]
    }
}
