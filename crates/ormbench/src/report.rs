//! CSV report writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::harness::BenchmarkResult;

/// Header row of the CSV report.
pub const CSV_HEADER: &str = "Operation,Record Count,Elapsed Time (s)";

/// Write collected results to `path` as UTF-8 comma-separated values,
/// overwriting any existing file. One row per result, in the order they
/// were collected.
pub fn write_csv(path: impl AsRef<Path>, results: &[BenchmarkResult]) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", CSV_HEADER)?;
    for result in results {
        writeln!(
            out,
            "{},{},{}",
            result.operation, result.rows, result.elapsed_secs
        )?;
    }

    out.flush()?;
    Ok(())
}
