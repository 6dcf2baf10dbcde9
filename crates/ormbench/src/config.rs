//! Benchmark run configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::harness::Operation;

/// Default row counts for the trial ladder.
pub const DEFAULT_ROW_COUNTS: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

/// Default seed for fixture generation.
pub const DEFAULT_SEED: u64 = 42;

/// Default CSV output path.
pub const DEFAULT_OUTPUT_PATH: &str = "performance_results_with_indexes.csv";

/// Configuration for a benchmark run.
///
/// Passed explicitly into [`Harness::new`](crate::Harness::new); there is no
/// process-wide connection or ambient state.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Path to the SQLite database file. `None` runs against an in-memory
    /// database.
    pub database_path: Option<PathBuf>,

    /// Row counts to benchmark, in trial order.
    pub row_counts: Vec<usize>,

    /// Operations to benchmark, in trial order.
    pub operations: Vec<Operation>,

    /// Seed for fixture generation. Runs with the same seed and row counts
    /// produce identical row content.
    pub seed: u64,

    /// Path the CSV report is written to (overwritten if present).
    pub output_path: PathBuf,
}

impl BenchConfig {
    /// Create a configuration with the default trial matrix and an
    /// in-memory database.
    pub fn new() -> Self {
        Self {
            database_path: None,
            row_counts: DEFAULT_ROW_COUNTS.to_vec(),
            operations: Operation::ALL.to_vec(),
            seed: DEFAULT_SEED,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Set the database file path.
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Set the row counts to benchmark.
    pub fn with_row_counts(mut self, counts: impl Into<Vec<usize>>) -> Self {
        self.row_counts = counts.into();
        self
    }

    /// Set the operations to benchmark.
    pub fn with_operations(mut self, operations: impl Into<Vec<Operation>>) -> Self {
        self.operations = operations.into();
        self
    }

    /// Set the fixture seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the CSV output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Reject configurations the harness cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.row_counts.is_empty() {
            return Err(Error::Config("row counts must not be empty".into()));
        }
        if self.row_counts.iter().any(|&count| count == 0) {
            return Err(Error::Config("row counts must be positive".into()));
        }
        if self.operations.is_empty() {
            return Err(Error::Config("operations must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}
