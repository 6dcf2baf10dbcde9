//! Benchmark harness.
//!
//! Runs the (operation x row count) trial matrix: operations in a fixed
//! order on the outside, row counts on the inside. Tables are cleared
//! before every trial and pre-populated when the operation under test is
//! not INSERT. Indexes are created exactly once, before the first trial.
//!
//! There is no retry or per-trial isolation: the first error aborts the
//! whole run.

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::fixtures::{generate_authors, updated_name};
use crate::gateway::Gateway;

/// A benchmarked operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Select,
    Update,
    Delete,
}

impl Operation {
    /// All operations, in trial order.
    pub const ALL: [Operation; 4] = [
        Operation::Insert,
        Operation::Select,
        Operation::Update,
        Operation::Delete,
    ];

    /// Uppercase name used in reports and progress output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Insert => "INSERT",
            Operation::Select => "SELECT",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One collected (operation, row count, elapsed) triple.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub operation: Operation,
    pub rows: usize,
    /// Elapsed wall-clock seconds, rounded to 4 decimal places.
    pub elapsed_secs: f64,
}

/// Round elapsed seconds to 4 decimal places.
fn round_elapsed(secs: f64) -> f64 {
    (secs * 10_000.0).round() / 10_000.0
}

/// Measure the wall-clock duration of `f`, returning rounded seconds
/// alongside its value.
pub fn measure<T>(f: impl FnOnce() -> Result<T>) -> Result<(f64, T)> {
    let start = Instant::now();
    let value = f()?;
    Ok((round_elapsed(start.elapsed().as_secs_f64()), value))
}

/// Benchmark harness: owns the configuration, the fixture RNG, and the
/// append-only results sequence for one run.
pub struct Harness {
    config: BenchConfig,
    rng: StdRng,
}

impl Harness {
    /// Create a harness for the given configuration.
    pub fn new(config: BenchConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Run the full trial matrix and return the collected results in
    /// generation order.
    pub fn run(&mut self, gateway: &mut Gateway) -> Result<Vec<BenchmarkResult>> {
        self.config.validate()?;

        gateway.create_indexes()?;
        tracing::info!("indexes created");

        let operations = self.config.operations.clone();
        let row_counts = self.config.row_counts.clone();
        let mut results = Vec::with_capacity(operations.len() * row_counts.len());

        for operation in operations {
            tracing::info!(operation = %operation, "testing operation with indexes");

            for &count in &row_counts {
                let elapsed = self.run_trial(gateway, operation, count)?;
                tracing::info!(
                    operation = %operation,
                    rows = count,
                    elapsed_secs = elapsed,
                    "trial complete"
                );
                results.push(BenchmarkResult {
                    operation,
                    rows: count,
                    elapsed_secs: elapsed,
                });
            }
        }

        Ok(results)
    }

    /// Run one timed trial against cleared (and, for non-INSERT
    /// operations, pre-populated) tables.
    fn run_trial(
        &mut self,
        gateway: &mut Gateway,
        operation: Operation,
        count: usize,
    ) -> Result<f64> {
        gateway.clear_tables()?;

        if operation != Operation::Insert {
            let authors = generate_authors(count, &mut self.rng);
            gateway.insert_rows(&authors)?;
        }

        let (elapsed, _) = match operation {
            Operation::Insert => {
                let authors = generate_authors(count, &mut self.rng);
                measure(|| gateway.insert_rows(&authors).map(|_| 0))?
            }
            Operation::Select => measure(|| gateway.select_rows(count).map(|rows| rows.len()))?,
            Operation::Update => {
                let new_name = updated_name(&mut self.rng);
                measure(|| gateway.update_rows(count, &new_name))?
            }
            Operation::Delete => measure(|| gateway.delete_rows(count))?,
        };

        Ok(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig::new().with_row_counts([10, 20])
    }

    #[test]
    fn test_operation_order_and_names() {
        let names: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(names, ["INSERT", "SELECT", "UPDATE", "DELETE"]);
    }

    #[test]
    fn test_round_elapsed() {
        assert_eq!(round_elapsed(0.123456), 0.1235);
        assert_eq!(round_elapsed(1.0), 1.0);
        assert_eq!(round_elapsed(0.00001), 0.0);
    }

    #[test]
    fn test_measure_returns_value() {
        let (elapsed, value) = measure(|| Ok(7)).unwrap();
        assert!(elapsed >= 0.0);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_run_produces_matrix_in_order() {
        let mut gateway = Gateway::open_in_memory().unwrap();
        let mut harness = Harness::new(small_config());
        let results = harness.run(&mut gateway).unwrap();

        assert_eq!(results.len(), 8);
        let expected: Vec<(Operation, usize)> = Operation::ALL
            .iter()
            .flat_map(|&op| [(op, 10), (op, 20)])
            .collect();
        let actual: Vec<(Operation, usize)> =
            results.iter().map(|r| (r.operation, r.rows)).collect();
        assert_eq!(actual, expected);

        for result in &results {
            assert!(result.elapsed_secs >= 0.0);
        }
    }

    #[test]
    fn test_run_leaves_no_rows_after_delete_trials() {
        let mut gateway = Gateway::open_in_memory().unwrap();
        let mut harness = Harness::new(small_config());
        harness.run(&mut gateway).unwrap();

        // DELETE is the last operation and removes everything it
        // pre-populated.
        assert_eq!(gateway.author_count().unwrap(), 0);
        assert_eq!(gateway.book_count().unwrap(), 0);
    }

    #[test]
    fn test_run_single_operation() {
        let mut gateway = Gateway::open_in_memory().unwrap();
        let config = BenchConfig::new()
            .with_row_counts([10])
            .with_operations([Operation::Insert]);
        let mut harness = Harness::new(config);
        let results = harness.run(&mut gateway).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].operation, Operation::Insert);
        assert_eq!(results[0].rows, 10);
        assert_eq!(gateway.author_count().unwrap(), 10);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let mut gateway = Gateway::open_in_memory().unwrap();
        let mut harness = Harness::new(BenchConfig::new().with_row_counts([]));
        assert!(harness.run(&mut gateway).is_err());
    }
}
