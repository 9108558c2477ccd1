//! Report export functions for HTML and JSON formats.
//!
//! Output files are written to a temporary file next to the destination and
//! renamed into place, so a failed run never leaves a truncated report at the
//! output path.

use super::stats::{build_context, summarize_report};
use super::templates::{TemplateSource, load_template};
use super::types::ReportSummary;
use crate::error::{ReportError, Result};
use crate::types::Report;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Render a report with a named template and write it as HTML.
///
/// # Arguments
/// * `report` - Extracted suites and totals
/// * `templates` - Bundled templates or a directory of `<name>.html` files
/// * `template_name` - Template to render
/// * `output_path` - Path to write the HTML file
///
/// # Returns
/// The summary that was rendered, for console output.
pub fn generate_html_report(
    report: &Report,
    templates: &TemplateSource,
    template_name: &str,
    output_path: &Path,
) -> Result<ReportSummary> {
    let template = load_template(templates, template_name)?;
    let summary = summarize_report(report, chrono::Local::now())?;
    let context = build_context(report, &summary)?;

    let html = template.render(&context);
    write_atomically(output_path, html.as_bytes())?;
    debug!("Wrote {} bytes of HTML to {:?}", html.len(), output_path);

    Ok(summary)
}

/// Export the summary and all suites as pretty-printed JSON.
///
/// # Arguments
/// * `report` - Extracted suites and totals
/// * `summary` - Derived metrics, as rendered in the HTML report
/// * `output_path` - Path to write the JSON file
pub fn export_json_report(report: &Report, summary: &ReportSummary, output_path: &Path) -> Result<()> {
    use serde_json::json;

    let document = json!({
        "summary": summary,
        "testsuites": report.testsuites,
    });

    let bytes = serde_json::to_vec_pretty(&document)?;
    write_atomically(output_path, &bytes)?;
    debug!("Wrote JSON report to {:?}", output_path);

    Ok(())
}

/// Write `contents` to a sibling temporary file, then rename it over `path`
///
/// An existing file keeps its permissions; a new one gets the usual
/// `0o666` minus umask instead of the temporary file's private mode.
fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    builder.permissions(output_permissions(path));

    let mut file = builder.tempfile_in(dir).map_err(|e| ReportError::io(dir, e))?;
    file.write_all(contents).map_err(|e| ReportError::io(file.path(), e))?;
    file.persist(path).map_err(|e| ReportError::io(path, e.error))?;

    Ok(())
}

#[cfg(unix)]
fn output_permissions(path: &Path) -> std::fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.permissions(),
        _ => std::fs::Permissions::from_mode(0o666),
    }
}
