//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use midline_core::Point;
use std::collections::BTreeSet;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results against the expected values (default)
    #[default]
    Compare,
    /// Compare and additionally dump every checked point sequence
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode and
/// every failure recorded so far. Checks never panic; call
/// [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "octant")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Also installs an `env_logger` test logger so that `RUST_LOG=trace`
    /// shows the rasterizer's per-pixel output.
    pub fn new(test_name: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, err: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, err);
        self.failures.push(err);
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two point sequences for exact, ordered equality
    pub fn compare_points(&mut self, expected: &[Point], actual: &[Point]) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("[{}] {}", self.index, format_points(actual));
        }

        if expected.len() != actual.len() {
            let message = format!(
                "length {} vs {}\n  expected {}\n  actual   {}",
                expected.len(),
                actual.len(),
                format_points(expected),
                format_points(actual)
            );
            self.fail(TestError::PointMismatch {
                index: self.index,
                message,
            });
            return false;
        }

        if let Some(i) = expected.iter().zip(actual).position(|(e, a)| e != a) {
            let message = format!(
                "first difference at position {}: expected {}, got {}",
                i, expected[i], actual[i]
            );
            self.fail(TestError::PointMismatch {
                index: self.index,
                message,
            });
            return false;
        }

        true
    }

    /// Compare two point collections as sets, ignoring order and repeats
    pub fn compare_point_sets(&mut self, expected: &[Point], actual: &[Point]) -> bool {
        self.index += 1;
        let expected: BTreeSet<Point> = expected.iter().copied().collect();
        let actual: BTreeSet<Point> = actual.iter().copied().collect();

        if expected != actual {
            let missing: Vec<Point> = expected.difference(&actual).copied().collect();
            let extra: Vec<Point> = actual.difference(&expected).copied().collect();
            let message = format!(
                "missing {}, unexpected {}",
                format_points(&missing),
                format_points(&extra)
            );
            self.fail(TestError::PointMismatch {
                index: self.index,
                message,
            });
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        let success = self.is_success();
        if success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        success
    }

    /// Consume the parameters, returning the first failure if any
    pub fn into_result(self) -> TestResult<()> {
        match self.failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}

fn format_points(points: &[Point]) -> String {
    let body: Vec<String> = points.iter().map(|p| p.to_string()).collect();
    format!("[{}]", body.join(","))
}
