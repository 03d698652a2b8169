use crate::Compiler;
use crate::SourceFile;
use crate::config::CompileConfig;
use crate::config::ConfigSet;
use crate::test::fixture_schema;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use super::snapshot_test_case::SnapshotTestCase;

/// Result of a single snapshot case.
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub failures: Vec<String>,
    pub test_name: String,
}
impl SnapshotTestResult {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}
impl SnapshotTestResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(SnapshotTestResult::passed)
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed()).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| {
                let details = r.failures
                    .iter()
                    .map(|failure| format!("   {failure}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("❌ {}\n{details}", r.test_name)
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} snapshot tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let emoji = if self.all_passed() { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let total = self.results.len();
        let failed = self.results.iter().filter(|r| !r.passed()).count();
        let passed = total - failed;
        format!(
            "{banner}\n{emoji} COMPILE SNAPSHOT SUMMARY\n{banner}\nTotal tests: {total}\n\
            Passed: {passed}\nFailed: {failed}\n{banner}",
        )
    }
}

pub fn run_all(fixtures_dir: &Path) -> SnapshotTestResults {
    let test_cases = SnapshotTestCase::discover_all(fixtures_dir);
    let results = test_cases
        .par_iter()
        .map(run_case)
        .collect();
    SnapshotTestResults { results }
}

fn run_case(test_case: &SnapshotTestCase) -> SnapshotTestResult {
    let mut failures = vec![];
    let test_name = test_case.name.clone();

    let root_config = match &test_case.config_path {
        None => CompileConfig::default(),
        Some(config_path) => match CompileConfig::from_file(config_path) {
            Ok(config) => config,
            Err(err) => return SnapshotTestResult {
                failures: vec![format!("Could not load config: {err}")],
                test_name,
            },
        },
    };

    let mut sources = vec![];
    for document_path in &test_case.document_paths {
        match fs::read_to_string(document_path) {
            Ok(content) => sources.push(SourceFile::new(document_path.clone(), content)),
            Err(err) => failures.push(format!("Could not read {}: {err}", document_path.display())),
        }
    }

    let compiler = Compiler::new(fixture_schema(), ConfigSet::new(&test_case.dir, root_config));
    let output = compiler.compile(sources);

    let messages: Vec<String> = output
        .diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect();
    for pattern in &test_case.expected_errors {
        if !messages.iter().any(|message| message.contains(pattern.as_str())) {
            failures.push(format!(
                "Expected an error containing `{pattern}`, got:\n{}",
                messages.join("\n"),
            ));
        }
    }
    if test_case.expected_errors.is_empty() && !messages.is_empty() {
        failures.push(format!("Unexpected errors:\n{}", messages.join("\n")));
    }

    let generated: BTreeMap<&PathBuf, &str> = output
        .files()
        .iter()
        .map(|file| (&file.path, file.contents.as_str()))
        .collect();
    for (output_path, expected_path) in &test_case.expected_outputs {
        let expected = fs::read_to_string(expected_path).unwrap_or_default();
        match generated.get(output_path) {
            None => failures.push(format!("Missing output {}", output_path.display())),
            Some(actual) if *actual != expected => failures.push(format!(
                "Output differs from {}:\n--- expected\n{expected}\n--- actual\n{actual}",
                expected_path.display(),
            )),
            Some(_) => (),
        }
    }
    for output_path in generated.keys() {
        if !test_case.expected_outputs.iter().any(|(path, _)| path == *output_path) {
            failures.push(format!("No expectation for output {}", output_path.display()));
        }
    }

    SnapshotTestResult {
        failures,
        test_name,
    }
}
