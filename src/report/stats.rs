//! Statistics and summary generation for test results.
//!
//! This module derives the report-level metrics from extracted suites and
//! assembles the render context handed to the template engine.

use super::types::{GENERATION_DATE_FORMAT, ReportSummary};
use crate::error::{ReportError, Result};
use crate::template::{Context, Value, context_from_json};
use crate::types::Report;
use chrono::{DateTime, Local};

/// Calculate summary statistics for a report.
///
/// # Arguments
/// * `report` - Extracted suites and totals
/// * `generated_at` - Timestamp recorded as the generation date
pub fn summarize_report(report: &Report, generated_at: DateTime<Local>) -> Result<ReportSummary> {
    let total_passed = passed_count(report)?;
    let total_failed_and_errors = report
        .total_failures
        .checked_add(report.total_errors)
        .ok_or(ReportError::CountOverflow("total_failed_and_errors"))?;

    Ok(ReportSummary {
        total_tests: report.total_tests,
        total_passed,
        total_failures: report.total_failures,
        total_errors: report.total_errors,
        total_skipped: report.total_skipped,
        total_failed_and_errors,
        total_testsuites: report.testsuites.len(),
        total_time: round_to(report.total_time, 2),
        success_rate: success_rate(total_passed, report.total_tests),
        generation_date: generated_at.format(GENERATION_DATE_FORMAT).to_string(),
    })
}

/// Tests that neither failed, errored nor were skipped. Not clamped at zero.
pub fn passed_count(report: &Report) -> Result<i64> {
    let passed = i128::from(report.total_tests)
        - i128::from(report.total_failures)
        - i128::from(report.total_errors)
        - i128::from(report.total_skipped);
    i64::try_from(passed).map_err(|_| ReportError::CountOverflow("total_passed"))
}

/// Percentage of passed tests, one decimal place; 0 when `total` is 0
pub fn success_rate(passed: i64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(passed as f64 / total as f64 * 100.0, 1)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Build the template context: every summary field plus the suite list.
pub fn build_context(report: &Report, summary: &ReportSummary) -> Result<Context> {
    let mut json = serde_json::to_value(summary)?;
    json["testsuites"] = serde_json::to_value(&report.testsuites)?;

    let mut context = context_from_json(json);
    // No tests: the rate is the integer 0 and renders as `0`, not `0.0`
    if summary.total_tests == 0 {
        context.insert("success_rate".to_string(), Value::Int(0));
    }
    Ok(context)
}
