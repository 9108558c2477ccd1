/// JUnit XML extraction
///
/// This module handles:
/// - Loading a JUnit XML document from disk
/// - Accepting either a `<testsuites>` collection or a single `<testsuite>` root
/// - Copying suite counters and test-case outcomes into the record types
use crate::error::{ReportError, Result};
use crate::types::{Report, TestCase, TestStatus, TestSuite};
use log::debug;
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;
use std::str::FromStr;

const TAG_TEST_SUITES: &str = "testsuites";
const TAG_TEST_SUITE: &str = "testsuite";
const TAG_TEST_CASE: &str = "testcase";

/// Outcome children in priority order: the first one present wins
const STATUS_TAGS: [(&str, TestStatus); 3] =
    [("failure", TestStatus::Failed), ("error", TestStatus::Error), ("skipped", TestStatus::Skipped)];

const UNKNOWN_NAME: &str = "Unknown";

/// Read and parse a JUnit XML file
pub fn parse_file(path: &Path) -> Result<Report> {
    if !path.exists() {
        return Err(ReportError::InputNotFound(path.to_path_buf()));
    }

    let xml = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    debug!("Read {} bytes from {:?}", xml.len(), path);

    parse_document(&xml, path)
}

/// Parse JUnit XML text; `source` is only used to label errors
pub fn parse_document(xml: &str, source: &Path) -> Result<Report> {
    let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let doc = Document::parse_with_options(xml, options).map_err(|e| ReportError::malformed(source, e.to_string()))?;
    let root = doc.root_element();

    let suite_nodes: Vec<Node> = match root.tag_name().name() {
        TAG_TEST_SUITES => root.children().filter(|n| n.has_tag_name(TAG_TEST_SUITE)).collect(),
        TAG_TEST_SUITE => vec![root],
        other => {
            debug!("Root element <{}> is neither <testsuites> nor <testsuite>, no suites extracted", other);
            Vec::new()
        }
    };

    let mut suites = Vec::with_capacity(suite_nodes.len());
    for node in suite_nodes {
        let suite = parse_test_suite(node).map_err(|e| ReportError::malformed(source, e))?;
        debug!("Parsed suite '{}' with {} test cases", suite.name, suite.testcases.len());
        suites.push(suite);
    }

    let report = Report::from_suites(suites).map_err(|e| ReportError::malformed(source, e))?;

    debug!(
        "Extracted {} suites: tests={} failures={} errors={} skipped={}",
        report.testsuites.len(),
        report.total_tests,
        report.total_failures,
        report.total_errors,
        report.total_skipped
    );

    Ok(report)
}

fn parse_test_suite(node: Node) -> std::result::Result<TestSuite, String> {
    let testcases = node
        .children()
        .filter(|n| n.has_tag_name(TAG_TEST_CASE))
        .map(parse_test_case)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(TestSuite {
        name: node.attribute("name").unwrap_or(UNKNOWN_NAME).to_string(),
        tests: numeric_attribute(node, "tests", 0)?,
        failures: numeric_attribute(node, "failures", 0)?,
        errors: numeric_attribute(node, "errors", 0)?,
        skipped: numeric_attribute(node, "skipped", 0)?,
        time: numeric_attribute(node, "time", 0.0)?,
        timestamp: node.attribute("timestamp").unwrap_or("").to_string(),
        testcases,
    })
}

fn parse_test_case(node: Node) -> std::result::Result<TestCase, String> {
    let mut testcase = TestCase::passed(
        node.attribute("name").unwrap_or(UNKNOWN_NAME),
        node.attribute("classname").unwrap_or(""),
        numeric_attribute(node, "time", 0.0)?,
    );

    let outcome = STATUS_TAGS
        .iter()
        .find_map(|(tag, status)| node.children().find(|n| n.has_tag_name(*tag)).map(|child| (child, *status)));

    if let Some((child, status)) = outcome {
        testcase.status = status;
        testcase.message = child.attribute("message").unwrap_or("").to_string();
        testcase.details = child.text().unwrap_or("").to_string();
        debug!("Test case '{}' {}", testcase.name, status.as_str());
    }

    Ok(testcase)
}

/// Read a numeric attribute, falling back to `default` when it is absent
fn numeric_attribute<T: FromStr>(node: Node, attr: &str, default: T) -> std::result::Result<T, String>
where
    T::Err: std::fmt::Display,
{
    match node.attribute(attr) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| {
            let pos = node.document().text_pos_at(node.range().start);
            let tag = node.tag_name().name();
            format!("invalid value '{}' for attribute '{}' on <{}> at {}: {}", raw, attr, tag, pos, e)
        }),
    }
}

#[cfg(test)]
#[path = "junit_test.rs"]
mod junit_test;
