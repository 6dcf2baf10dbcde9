//! End-to-end tests for the benchmark harness.

use ormbench::{BenchConfig, Gateway, Harness, Operation};

#[test]
fn insert_only_run_writes_expected_csv() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("results.csv");

    let config = BenchConfig::new()
        .with_row_counts([10])
        .with_operations([Operation::Insert])
        .with_output_path(&output);

    let mut gateway = Gateway::from_config(&config).unwrap();
    let mut harness = Harness::new(config.clone());
    let results = harness.run(&mut gateway).unwrap();
    ormbench::report::write_csv(&config.output_path, &results).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Operation,Record Count,Elapsed Time (s)");

    let fields: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(fields[0], "INSERT");
    assert_eq!(fields[1], "10");
    assert!(fields[2].parse::<f64>().unwrap() >= 0.0);
}

#[test]
fn full_matrix_run_against_file_database() {
    let dir = tempfile::tempdir().unwrap();

    let config = BenchConfig::new()
        .with_database_path(dir.path().join("bench.db"))
        .with_row_counts([25, 50])
        .with_output_path(dir.path().join("results.csv"));

    let mut gateway = Gateway::from_config(&config).unwrap();
    let mut harness = Harness::new(config.clone());
    let results = harness.run(&mut gateway).unwrap();

    // 4 operations x 2 row counts, operation-outer order.
    assert_eq!(results.len(), 8);
    assert_eq!(results[0].operation, Operation::Insert);
    assert_eq!(results[7].operation, Operation::Delete);
    assert_eq!(results[7].rows, 50);

    ormbench::report::write_csv(&config.output_path, &results).unwrap();
    let content = std::fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(content.lines().count(), 9);
}

#[test]
fn runs_with_same_seed_generate_identical_fixtures() {
    use ormbench::fixtures::generate_authors;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let config = BenchConfig::new().with_seed(7);
    let mut rng1 = StdRng::seed_from_u64(config.seed);
    let mut rng2 = StdRng::seed_from_u64(config.seed);

    assert_eq!(
        generate_authors(100, &mut rng1),
        generate_authors(100, &mut rng2)
    );
}
