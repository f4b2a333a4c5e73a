//! Property tests for peak occupancy.
//!
//! Covers agreement between the two counters, the literal parking days,
//! monotonicity, and instant sessions through the public API.

use parking_peak::commands::SessionGenerator;
use parking_peak::{max_concurrent, max_concurrent_bruteforce, BruteForceCounter, SweepCounter};

/// Peak by checking every candidate instant directly.
fn occupancy_at_every_endpoint(sessions: &[(u64, u64)]) -> usize {
    sessions
        .iter()
        .flat_map(|&(s, e)| [s, e])
        .map(|t| sessions.iter().filter(|&&(s, e)| s <= t && t <= e).count())
        .max()
        .unwrap_or(0)
}

// =============================================================================
// Literal scenarios
// =============================================================================

#[test]
fn test_literal_scenarios() {
    let cases: Vec<(Vec<(u64, u64)>, usize)> = vec![
        (
            vec![
                (1, 8),
                (2, 3),
                (2, 4),
                (2, 5),
                (7, 8),
                (8, 12),
                (9, 10),
                (3, 4),
                (5, 7),
                (5, 8),
            ],
            5,
        ),
        (vec![(1, 8), (9, 10)], 1),
        (vec![(1, 8)], 1),
        (vec![], 0),
        (
            vec![(11, 12), (11, 11), (10, 11), (1, 2), (2, 4), (7, 8), (9, 10)],
            3,
        ),
        (vec![(0, 12), (11, 13), (50, 99), (100, 101), (101, 105)], 2),
        (vec![(100, 200), (110, 130), (210, 220), (218, 219), (219, 220)], 3),
    ];

    for (sessions, expected) in cases {
        assert_eq!(max_concurrent(&sessions), expected, "{:?}", sessions);
        assert_eq!(max_concurrent_bruteforce(&sessions), expected, "{:?}", sessions);
    }
}

// =============================================================================
// Agreement and monotonicity on random days
// =============================================================================

#[test]
fn test_agreement_with_endpoint_scan() {
    let sweep = SweepCounter::new();
    let brute = BruteForceCounter::new();

    for seed in 0..200u64 {
        let sessions: Vec<(u64, u64)> = SessionGenerator::new(seed, 30, 6)
            .sessions(25)
            .into_iter()
            .map(|s| (s.start, s.end))
            .collect();

        let expected = occupancy_at_every_endpoint(&sessions);
        assert_eq!(sweep.count(&sessions), expected, "seed {}", seed);
        assert_eq!(brute.count(&sessions), expected, "seed {}", seed);
    }
}

#[test]
fn test_adding_sessions_never_lowers_peak() {
    let mut generator = SessionGenerator::new(2024, 100, 20);
    let mut sessions = Vec::new();
    let mut previous = 0;

    for _ in 0..150 {
        sessions.push(generator.session());
        let peak = max_concurrent_sessions(&sessions);
        assert!(peak >= previous);
        previous = peak;
    }
}

fn max_concurrent_sessions(sessions: &[parking_peak::Interval]) -> usize {
    SweepCounter::new().count(sessions)
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn test_single_session_any_bounds() {
    for &(a, b) in &[(0, 0), (0, 1), (5, 5), (7, 1_000_000), (u64::MAX, u64::MAX)] {
        assert_eq!(max_concurrent(&[(a, b)]), 1);
        assert_eq!(max_concurrent_bruteforce(&[(a, b)]), 1);
    }
}

#[test]
fn test_instant_sessions_stack_with_arrivals() {
    let sessions = [(4, 4), (4, 4), (4, 9), (0, 4)];
    assert_eq!(max_concurrent(&sessions), 4);
    assert_eq!(max_concurrent_bruteforce(&sessions), 4);
}

#[test]
fn test_back_to_back_departures_and_arrivals() {
    // Every arrival coincides with a departure
    let sessions = [(0, 10), (10, 20), (20, 30), (30, 40)];
    assert_eq!(max_concurrent(&sessions), 2);
    assert_eq!(max_concurrent_bruteforce(&sessions), 2);
}
