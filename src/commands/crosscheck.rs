//! Randomized agreement check between the sweep and the brute force.
//!
//! Each trial draws a seeded random parking day, compares both counters,
//! then adds one more session and checks the peak did not drop. Trials run
//! in parallel; the failure with the lowest trial index is reported.

use crate::commands::generate::SessionGenerator;
use crate::commands::{BruteForceCounter, SweepCounter};
use crate::error::{Result, VerifyError};
use rayon::prelude::*;

/// Cross-check command configuration.
#[derive(Debug, Clone)]
pub struct CrosscheckCommand {
    /// Number of random parking days
    pub trials: u64,
    /// Sessions per parking day
    pub sessions: usize,
    /// Latest possible arrival
    pub horizon: u64,
    /// Longest possible stay
    pub max_duration: u64,
    /// Base seed; trial `i` uses `seed + i`
    pub seed: u64,
}

/// Statistics from a passing cross-check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrosscheckStats {
    /// Trials run
    pub trials: u64,
    /// Sessions counted across all trials, including the added ones
    pub sessions_checked: usize,
    /// Highest peak seen in any trial
    pub max_peak: usize,
}

impl std::fmt::Display for CrosscheckStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trials: {}, Sessions: {}, Max peak: {}",
            self.trials, self.sessions_checked, self.max_peak
        )
    }
}

impl Default for CrosscheckCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosscheckCommand {
    pub fn new() -> Self {
        Self {
            trials: 1_000,
            sessions: 64,
            horizon: 500,
            max_duration: 50,
            seed: 42,
        }
    }

    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_sessions(mut self, sessions: usize) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_horizon(mut self, horizon: u64) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_max_duration(mut self, max_duration: u64) -> Self {
        self.max_duration = max_duration;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run all trials.
    pub fn run(&self) -> Result<CrosscheckStats> {
        if self.trials == 0 {
            return Err(VerifyError::InvalidArgument(
                "trials must be at least 1".to_string(),
            ));
        }
        if self.sessions == 0 {
            return Err(VerifyError::InvalidArgument(
                "sessions must be at least 1".to_string(),
            ));
        }

        let outcomes: Vec<Result<usize>> = (0..self.trials)
            .into_par_iter()
            .map(|trial| self.run_trial(trial))
            .collect();

        let mut stats = CrosscheckStats {
            trials: self.trials,
            ..CrosscheckStats::default()
        };

        // Collected in trial order, so the first error is the earliest trial
        for outcome in outcomes {
            let peak = outcome?;
            stats.max_peak = stats.max_peak.max(peak);
            stats.sessions_checked += self.sessions + 1;
        }

        Ok(stats)
    }

    /// Run a single trial, returning the peak after the added session.
    pub fn run_trial(&self, trial: u64) -> Result<usize> {
        let seed = self.seed.wrapping_add(trial);
        let mut generator = SessionGenerator::new(seed, self.horizon, self.max_duration);
        let mut sessions = generator.sessions(self.sessions);

        let sweep = SweepCounter::new();
        let brute = BruteForceCounter::new();

        let before = sweep.count(&sessions);
        let oracle = brute.count(&sessions);
        if before != oracle {
            return Err(VerifyError::Disagreement {
                trial,
                seed,
                sweep: before,
                brute: oracle,
            });
        }

        sessions.push(generator.session());
        let after = sweep.count(&sessions);
        if after < before {
            return Err(VerifyError::NonMonotonic {
                trial,
                seed,
                before,
                after,
            });
        }

        let oracle = brute.count(&sessions);
        if after != oracle {
            return Err(VerifyError::Disagreement {
                trial,
                seed,
                sweep: after,
                brute: oracle,
            });
        }

        Ok(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crosscheck_default_passes() {
        let stats = CrosscheckCommand::new().with_trials(200).run().unwrap();

        assert_eq!(stats.trials, 200);
        assert_eq!(stats.sessions_checked, 200 * 65);
        assert!(stats.max_peak >= 1);
    }

    #[test]
    fn test_crosscheck_dense_coincident_times() {
        // Tiny horizon forces many equal arrival and departure instants
        let stats = CrosscheckCommand::new()
            .with_trials(300)
            .with_sessions(40)
            .with_horizon(5)
            .with_max_duration(3)
            .run()
            .unwrap();

        assert!(stats.max_peak > 1);
    }

    #[test]
    fn test_crosscheck_instant_sessions() {
        let stats = CrosscheckCommand::new()
            .with_trials(50)
            .with_horizon(10)
            .with_max_duration(0)
            .run()
            .unwrap();

        assert!(stats.max_peak >= 1);
    }

    #[test]
    fn test_crosscheck_rejects_zero_trials() {
        let err = CrosscheckCommand::new().with_trials(0).run().unwrap_err();
        assert!(matches!(err, VerifyError::InvalidArgument(_)));
    }

    #[test]
    fn test_crosscheck_rejects_zero_sessions() {
        let err = CrosscheckCommand::new().with_sessions(0).run().unwrap_err();
        assert!(matches!(err, VerifyError::InvalidArgument(_)));
    }

    #[test]
    fn test_crosscheck_trial_reproducible() {
        let cmd = CrosscheckCommand::new().with_seed(9);
        assert_eq!(cmd.run_trial(3).unwrap(), cmd.run_trial(3).unwrap());
    }

    #[test]
    fn test_stats_display() {
        let stats = CrosscheckStats {
            trials: 2,
            sessions_checked: 10,
            max_peak: 4,
        };
        assert_eq!(stats.to_string(), "Trials: 2, Sessions: 10, Max peak: 4");
    }
}
