/// Core data structures for extracted test results
///
/// This module defines the record types produced by the JUnit extractor and
/// consumed by the report assembler. Records are built once while parsing and
/// never mutated afterwards.

/// Terminal status of a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Error,
    Skipped,
}

impl TestStatus {
    /// Lowercase name used in templates and JSON ("passed", "failed", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Error => "error",
            TestStatus::Skipped => "skipped",
        }
    }
}

/// A single `<testcase>` record
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TestCase {
    pub name: String,
    pub classname: String,
    pub time: f64, // seconds
    pub status: TestStatus,
    pub message: String, // message attribute of failure/error/skipped, may be empty
    pub details: String, // inner text of failure/error/skipped, may be empty
}

impl TestCase {
    /// A passed test case with no message or details
    pub fn passed(name: impl Into<String>, classname: impl Into<String>, time: f64) -> Self {
        Self {
            name: name.into(),
            classname: classname.into(),
            time,
            status: TestStatus::Passed,
            message: String::new(),
            details: String::new(),
        }
    }
}

/// A single `<testsuite>` record
///
/// Counters are copied from the suite's attributes as-is; they are not
/// recomputed from the contained test cases.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TestSuite {
    pub name: String,
    pub tests: u64,
    pub failures: u64,
    pub errors: u64,
    pub skipped: u64,
    pub time: f64,
    pub timestamp: String,
    pub testcases: Vec<TestCase>,
}

/// All suites of one input document plus their summed counters
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub testsuites: Vec<TestSuite>,
    pub total_tests: u64,
    pub total_failures: u64,
    pub total_errors: u64,
    pub total_skipped: u64,
    pub total_time: f64,
}

impl Report {
    /// Build a report from suites, summing each suite's counters
    ///
    /// Fails when a summed counter does not fit in a `u64`.
    pub fn from_suites(testsuites: Vec<TestSuite>) -> Result<Self, String> {
        let mut report = Report::default();
        for suite in testsuites {
            report.push_suite(suite)?;
        }
        Ok(report)
    }

    /// Append a suite and add its counters to the totals
    pub fn push_suite(&mut self, suite: TestSuite) -> Result<(), String> {
        self.total_tests = add_count(self.total_tests, suite.tests, "tests")?;
        self.total_failures = add_count(self.total_failures, suite.failures, "failures")?;
        self.total_errors = add_count(self.total_errors, suite.errors, "errors")?;
        self.total_skipped = add_count(self.total_skipped, suite.skipped, "skipped")?;
        self.total_time += suite.time;
        self.testsuites.push(suite);
        Ok(())
    }
}

fn add_count(total: u64, count: u64, attr: &str) -> Result<u64, String> {
    total.checked_add(count).ok_or_else(|| format!("sum of '{}' attributes across suites exceeds {}", attr, u64::MAX))
}
