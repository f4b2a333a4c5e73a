//! Occupancy counters and verification commands.

pub mod bruteforce;
pub mod crosscheck;
pub mod generate;
pub mod selftest;
pub mod sweep;

pub use bruteforce::{max_concurrent_bruteforce, BruteForceCounter};
pub use crosscheck::{CrosscheckCommand, CrosscheckStats};
pub use generate::SessionGenerator;
pub use selftest::{CaseResult, Fixture, SelfTestCommand, SelfTestReport, FIXTURES};
pub use sweep::{max_concurrent, SweepCounter, SweepStats};
