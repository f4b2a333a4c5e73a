//! parking-peak: peak parking occupancy self-verification.
//!
//! Usage: parking-peak [COMMAND] [OPTIONS]
//!
//! Without a command, runs the fixed self test. Exit status 0 means every
//! check held.

use clap::{Parser, Subcommand};
use std::io;
use std::process;

use parking_peak::commands::{CrosscheckCommand, SelfTestCommand};
use parking_peak::error::VerifyError;

#[derive(Parser)]
#[command(name = "parking-peak")]
#[command(version)]
#[command(about = "Peak concurrent parking occupancy: sweep-line counter verified against a brute-force oracle", long_about = None)]
struct Cli {
    /// Number of threads to use (default: number of CPUs)
    #[arg(long, short = 't', global = true)]
    threads: Option<usize>,

    /// Minimum number of events before the sweep sorts in parallel
    #[arg(long, global = true)]
    parallel_threshold: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check both counters against the built-in parking days (default)
    Selftest {
        /// Print a summary to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Check both counters agree on seeded random parking days
    Crosscheck {
        /// Number of random parking days
        #[arg(short = 'n', long, default_value = "1000")]
        trials: u64,

        /// Sessions per parking day
        #[arg(short, long, default_value = "64")]
        sessions: usize,

        /// Latest possible arrival time
        #[arg(long, default_value = "500")]
        horizon: u64,

        /// Longest possible stay
        #[arg(long, default_value = "50")]
        max_duration: u64,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Print a summary to stderr
        #[arg(long)]
        stats: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Must be set before any counting occurs
    if let Some(n) = cli.parallel_threshold {
        parking_peak::config::set_parallel_threshold(n);
    }

    // Configure thread pool if --threads specified
    if let Some(n) = cli.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
        {
            eprintln!("Error: failed to initialize thread pool: {}", e);
            process::exit(1);
        }
    }

    let result = match cli.command {
        None => run_selftest(false),
        Some(Commands::Selftest { stats }) => run_selftest(stats),
        Some(Commands::Crosscheck {
            trials,
            sessions,
            horizon,
            max_duration,
            seed,
            stats,
        }) => run_crosscheck(trials, sessions, horizon, max_duration, seed, stats),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_selftest(stats: bool) -> Result<(), VerifyError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let report = SelfTestCommand::new().run(&mut handle)?;

    if stats {
        eprintln!("Self test stats: {}", report);
    }
    Ok(())
}

fn run_crosscheck(
    trials: u64,
    sessions: usize,
    horizon: u64,
    max_duration: u64,
    seed: u64,
    stats: bool,
) -> Result<(), VerifyError> {
    let cmd = CrosscheckCommand::new()
        .with_trials(trials)
        .with_sessions(sessions)
        .with_horizon(horizon)
        .with_max_duration(max_duration)
        .with_seed(seed);

    let result = cmd.run()?;

    if stats {
        eprintln!("Cross-check stats: {}", result);
    }
    Ok(())
}
