//! Peak parking occupancy.
//!
//! Computes the maximum number of parking sessions present at any single
//! instant. Sessions are closed intervals `[arrival, departure]`: a car
//! leaving at `t` and another arriving at `t` are both counted at `t`.
//!
//! # Features
//!
//! - **Event sweep**: O(n log n) sort of arrivals and departures, one pass
//! - **Brute-force oracle**: independent O(n^2) cluster merge for verification
//! - **Self test**: fixed parking days with known peaks
//! - **Cross-check**: seeded random days checked in parallel with Rayon
//!
//! # Example
//!
//! ```rust
//! use parking_peak::{max_concurrent, max_concurrent_bruteforce};
//!
//! let day = [(1, 8), (2, 3), (2, 4), (2, 5), (7, 8), (8, 12), (9, 10), (3, 4), (5, 7), (5, 8)];
//! assert_eq!(max_concurrent(&day), 5);
//! assert_eq!(max_concurrent_bruteforce(&day), 5);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod event;
pub mod interval;
pub mod report;

// Re-export commonly used types
pub use commands::{max_concurrent, max_concurrent_bruteforce, BruteForceCounter, SweepCounter};
pub use error::{Result, VerifyError};
pub use interval::Interval;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{
        max_concurrent, max_concurrent_bruteforce, BruteForceCounter, CrosscheckCommand,
        SelfTestCommand, SweepCounter,
    };
    pub use crate::error::VerifyError;
    pub use crate::interval::Interval;
}
