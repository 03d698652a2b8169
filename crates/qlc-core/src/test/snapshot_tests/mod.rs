//! Fixture-driven snapshot tests for whole batch compiles.
//!
//! Each directory under `fixtures/` is one case: a set of `.graphql`
//! documents, an optional `.qlcrc.json`, and for every file the compile is
//! expected to generate, a sibling `<Name>.expected.ts`. A case may instead
//! (or additionally) list substrings of expected diagnostics, one per line,
//! in `expected_errors.txt`. All cases compile against the shared
//! introspection fixture.

mod snapshot_test_case;
mod test_runner;

use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

fn fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/test/snapshot_tests/fixtures")
    })
}

#[test]
fn verify_compile_snapshots() {
    let results = test_runner::run_all(fixtures_dir());

    if results.all_passed() {
        println!("{}", results.summary());
    } else {
        eprintln!("{}", results.failure_report());
        eprintln!("\n{}", results.summary());
    }

    assert!(
        results.all_passed(),
        "Compile snapshot tests failed:\n{}",
        results.failure_report(),
    );
}
