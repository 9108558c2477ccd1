//! Report type definitions for the rendering model.

/// Format of the generation timestamp shown in reports
pub const GENERATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Derived metrics for one report.
///
/// Field names are the top-level template variables.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportSummary {
    pub total_tests: u64,
    /// tests - failures - errors - skipped; negative when the source counts disagree
    pub total_passed: i64,
    pub total_failures: u64,
    pub total_errors: u64,
    pub total_skipped: u64,
    pub total_failed_and_errors: u64,
    pub total_testsuites: usize,
    /// Seconds, rounded to two decimals
    pub total_time: f64,
    /// Percentage, rounded to one decimal; 0 when there are no tests
    pub success_rate: f64,
    pub generation_date: String,
}
