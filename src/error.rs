//! Verification failures.

use std::io;
use thiserror::Error;

/// Errors raised when a verification run detects a logic defect.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("case '{case}': expected {expected}, sweep returned {sweep}, brute force returned {brute}")]
    Mismatch {
        case: String,
        expected: usize,
        sweep: usize,
        brute: usize,
    },

    #[error("trial {trial} (seed {seed}): sweep returned {sweep}, brute force returned {brute}")]
    Disagreement {
        trial: u64,
        seed: u64,
        sweep: usize,
        brute: usize,
    },

    #[error("trial {trial} (seed {seed}): adding a session lowered the peak from {before} to {after}")]
    NonMonotonic {
        trial: u64,
        seed: u64,
        before: usize,
        after: usize,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
