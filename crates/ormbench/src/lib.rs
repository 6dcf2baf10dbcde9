//! ORMBench - Timed CRUD benchmarks for relational stores
//!
//! This crate measures elapsed wall-clock time for bulk INSERT, SELECT,
//! UPDATE, and DELETE operations against SQLite over a pair of related
//! entities (Author 1-N Book), with secondary indexes created before the
//! runs, and writes the collected results to a CSV report.
//!
//! # Components
//!
//! - **Gateway**: thin data-access layer over `rusqlite` (schema, indexes,
//!   batch CRUD statements)
//! - **Fixtures**: seeded random author/book data generation
//! - **Harness**: runs the (operation x row count) trial matrix and times
//!   each trial
//! - **Report**: serializes collected results to CSV

pub mod config;
pub mod error;
pub mod fixtures;
pub mod gateway;
pub mod harness;
pub mod report;

pub use config::BenchConfig;
pub use error::{Error, Result};
pub use fixtures::AuthorSpec;
pub use gateway::{AuthorRow, Gateway};
pub use harness::{BenchmarkResult, Harness, Operation};
