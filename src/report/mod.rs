//! Report generation module - Derived metrics, templates and export.
//!
//! This module handles:
//! - Calculating summary statistics (passed count, success rate, timestamp)
//! - Building the render context from extracted suites
//! - Discovering and loading templates
//! - Writing HTML and JSON reports
//!
//! Rendering itself is handled by the template module.
//!
//! # Module Organization
//!
//! - `types` - Summary type shared by HTML, JSON and console output
//! - `stats` - Summary statistics and context assembly
//! - `templates` - Bundled templates and discovery by file extension
//! - `export` - HTML and JSON export with atomic writes

mod export;
mod stats;
mod templates;
mod types;

// Re-export types
pub use types::ReportSummary;

// Re-export template discovery
pub use templates::{TemplateSource, list_templates};

// Re-export export functions
pub use export::{export_json_report, generate_html_report};
