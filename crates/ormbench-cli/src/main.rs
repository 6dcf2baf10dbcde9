//! ORMBench Command-Line Runner
//!
//! Runs the timed CRUD trial matrix against SQLite and writes the CSV
//! report.

use std::path::PathBuf;

use clap::Parser;

use ormbench::config::{DEFAULT_OUTPUT_PATH, DEFAULT_SEED};
use ormbench::{report, BenchConfig, Gateway, Harness, Operation};

/// ORMBench Command-Line Runner
#[derive(Parser, Debug)]
#[command(name = "ormbench")]
#[command(version, about = "Timed CRUD benchmarks against a relational store")]
pub struct Args {
    /// Path to the SQLite database file (in-memory when omitted).
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Row counts to benchmark, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = [1_000usize, 10_000, 100_000, 1_000_000])]
    pub rows: Vec<usize>,

    /// Operations to benchmark, comma separated (defaults to all four).
    #[arg(long, value_delimiter = ',', value_enum)]
    pub ops: Vec<OpArg>,

    /// Seed for fixture generation.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Path the CSV report is written to.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

/// Operation selector for the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum OpArg {
    Insert,
    Select,
    Update,
    Delete,
}

impl From<OpArg> for Operation {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Insert => Operation::Insert,
            OpArg::Select => Operation::Select,
            OpArg::Update => Operation::Update,
            OpArg::Delete => Operation::Delete,
        }
    }
}

impl Args {
    /// Convert command-line arguments to a benchmark configuration.
    pub fn into_config(self) -> BenchConfig {
        let operations: Vec<Operation> = if self.ops.is_empty() {
            Operation::ALL.to_vec()
        } else {
            self.ops.into_iter().map(Operation::from).collect()
        };

        let mut config = BenchConfig::new()
            .with_row_counts(self.rows)
            .with_operations(operations)
            .with_seed(self.seed)
            .with_output_path(self.output);

        if let Some(path) = self.database {
            config = config.with_database_path(path);
        }

        config
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ormbench=info".into()),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.into_config();
    config.validate()?;

    let database = config
        .database_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ":memory:".into());
    tracing::info!(
        database = %database,
        rows = ?config.row_counts,
        seed = config.seed,
        "configuration loaded"
    );

    let mut gateway = Gateway::from_config(&config)?;
    let mut harness = Harness::new(config.clone());
    let results = harness.run(&mut gateway)?;

    report::write_csv(&config.output_path, &results)?;
    tracing::info!(
        path = %config.output_path.display(),
        trials = results.len(),
        "results saved"
    );

    Ok(())
}
