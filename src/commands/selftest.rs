//! Fixed-vector self test.
//!
//! Runs both counters over known parking days and checks them against
//! literal expected peaks and against each other. The first failure aborts
//! the run.

use crate::commands::{BruteForceCounter, SweepCounter};
use crate::error::{Result, VerifyError};
use crate::report::ReportWriter;
use std::io::Write;

/// A named parking day with its known peak occupancy.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub sessions: &'static [(u64, u64)],
    pub expected: usize,
}

/// Built-in fixtures.
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "mixed_day",
        sessions: &[
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
        expected: 5,
    },
    Fixture {
        name: "disjoint_pair",
        sessions: &[(1, 8), (9, 10)],
        expected: 1,
    },
    Fixture {
        name: "single",
        sessions: &[(1, 8)],
        expected: 1,
    },
    Fixture {
        name: "empty",
        sessions: &[],
        expected: 0,
    },
    Fixture {
        name: "touching_instants",
        sessions: &[
            (11, 12),
            (11, 11),
            (10, 11),
            (1, 2),
            (2, 4),
            (7, 8),
            (9, 10),
        ],
        expected: 3,
    },
    Fixture {
        name: "sparse",
        sessions: &[(0, 12), (11, 13), (50, 99), (100, 101), (101, 105)],
        expected: 2,
    },
    Fixture {
        name: "nested_tail",
        sessions: &[(100, 200), (110, 130), (210, 220), (218, 219), (219, 220)],
        expected: 3,
    },
];

/// Outcome of one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub name: &'static str,
    pub expected: usize,
    pub sweep: usize,
    pub brute: usize,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        self.sweep == self.expected && self.brute == self.expected
    }
}

/// Results of a passing self test.
#[derive(Debug, Clone, Default)]
pub struct SelfTestReport {
    pub cases: Vec<CaseResult>,
}

impl SelfTestReport {
    /// Highest peak across all fixtures.
    pub fn max_peak(&self) -> usize {
        self.cases.iter().map(|c| c.expected).max().unwrap_or(0)
    }
}

impl std::fmt::Display for SelfTestReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cases: {}, Passed: {}, Max peak: {}",
            self.cases.len(),
            self.cases.iter().filter(|c| c.passed()).count(),
            self.max_peak()
        )
    }
}

/// Self test command configuration.
#[derive(Debug, Clone)]
pub struct SelfTestCommand {
    fixtures: &'static [Fixture],
}

impl Default for SelfTestCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SelfTestCommand {
    pub fn new() -> Self {
        Self { fixtures: FIXTURES }
    }

    /// Use a different fixture set.
    pub fn with_fixtures(mut self, fixtures: &'static [Fixture]) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// Run one fixture through both counters.
    pub fn check(&self, fixture: &Fixture) -> CaseResult {
        CaseResult {
            name: fixture.name,
            expected: fixture.expected,
            sweep: SweepCounter::new().count(fixture.sessions),
            brute: BruteForceCounter::new().count(fixture.sessions),
        }
    }

    /// Run every fixture without producing output.
    pub fn verify(&self) -> Result<SelfTestReport> {
        self.run(&mut std::io::sink())
    }

    /// Run every fixture, writing one TSV line per case:
    /// `name  expected  sweep  brute  status`.
    pub fn run<W: Write>(&self, output: &mut W) -> Result<SelfTestReport> {
        let mut writer = ReportWriter::new(output);
        let mut report = SelfTestReport::default();

        for fixture in self.fixtures {
            let case = self.check(fixture);
            Self::write_case(&mut writer, &case)?;

            if !case.passed() {
                writer.flush()?;
                return Err(VerifyError::Mismatch {
                    case: case.name.to_string(),
                    expected: case.expected,
                    sweep: case.sweep,
                    brute: case.brute,
                });
            }
            report.cases.push(case);
        }

        writer.flush()?;
        Ok(report)
    }

    fn write_case<W: Write>(writer: &mut ReportWriter<W>, case: &CaseResult) -> Result<()> {
        writer.write_str(case.name)?;
        writer.write_tab()?;
        writer.write_usize(case.expected)?;
        writer.write_tab()?;
        writer.write_usize(case.sweep)?;
        writer.write_tab()?;
        writer.write_usize(case.brute)?;
        writer.write_tab()?;
        writer.write_str(if case.passed() { "ok" } else { "FAIL" })?;
        writer.write_newline()
    }
}
