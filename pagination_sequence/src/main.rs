/// Pagination Kernel — Golden Table Harness
///
/// Loads the golden sequence tables, rebuilds every row through the
/// kernel, and checks rendering, output invariants and determinism.
/// Exits with status 1 on any mismatch.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pagination_sequence::fixtures::{parse_cases, RowFailure};

const FIXTURE_PATHS: [&str; 3] = [
    "tests/golden/sequences.json",
    "pagination_sequence/tests/golden/sequences.json",
    "../pagination_sequence/tests/golden/sequences.json",
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = FIXTURE_PATHS.iter().copied().find(|p| Path::new(p).exists()) else {
        error!(searched = ?FIXTURE_PATHS, "could not find golden sequences.json");
        return ExitCode::FAILURE;
    };

    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            error!(path, error = %e, "failed to read fixture file");
            return ExitCode::FAILURE;
        }
    };
    info!(path, "loaded fixtures");

    let cases = match parse_cases(&data) {
        Ok(cases) => cases,
        Err(e) => {
            error!(path, error = %e, "failed to parse fixture file");
            return ExitCode::FAILURE;
        }
    };

    let mut total = 0;
    let mut passed = 0;

    for case in &cases {
        let mut case_failures = 0;
        for outcome in case.replay() {
            total += 1;
            if outcome.passed() {
                passed += 1;
                continue;
            }
            case_failures += 1;
            println!(
                "[FAIL] {} (pages={}, edges={}, neighbors={}) page={}:",
                case.name, case.pages, case.edges, case.neighbors, outcome.page
            );
            for failure in &outcome.failures {
                match failure {
                    RowFailure::Rejected(e) => println!("  Rejected: {}", e),
                    RowFailure::Rendered { expected, actual } => {
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                    }
                    RowFailure::Invariant(v) => println!("  {}", v),
                    RowFailure::Nondeterministic { first, second } => {
                        println!("  Determinism fail: run1={} run2={}", first, second)
                    }
                    RowFailure::MissingRow => println!("  No expected row in table"),
                    RowFailure::ExtraRow { expected } => {
                        println!("  Row past last page: {}", expected)
                    }
                }
            }
        }
        if case_failures == 0 {
            println!(
                "[PASS] {} (pages={}, edges={}, neighbors={}): {} rows",
                case.name, case.pages, case.edges, case.neighbors, case.pages
            );
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} rows passed", passed, total);
    if passed == total {
        println!("[OK] All golden sequence checks PASSED.");
        ExitCode::SUCCESS
    } else {
        println!("[FAIL] Some checks failed.");
        ExitCode::FAILURE
    }
}
