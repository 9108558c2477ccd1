// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod error;
mod junit;
mod report;
mod template;
mod types;
mod ui;

use config::ReportConfig;
use error::{ReportError, Result};
use report::ReportSummary;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    if args.list_templates {
        print_template_list(&config::resolve_template_source(&args));
        return;
    }

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(2);
    }

    let config = match config::build_report_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(summary) => print_summary(&config, &summary),
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Parse the input, render the selected template and write all outputs
fn run(config: &ReportConfig) -> Result<ReportSummary> {
    // Checked up front so nothing is printed or written for a missing input
    if !config.input.exists() {
        return Err(ReportError::InputNotFound(config.input.clone()));
    }

    ui::status(&format!("Parsing JUnit XML from '{}'...", config.input.display()));
    let report = junit::parse_file(&config.input)?;

    ui::status(&format!("Generating HTML report using '{}' template...", config.template));
    let summary = report::generate_html_report(&report, &config.templates, &config.template, &config.output)?;

    if let Some(ref json_path) = config.json_output {
        report::export_json_report(&report, &summary, json_path)?;
        ui::status(&format!("JSON report saved to: '{}'", json_path.display()));
    }

    Ok(summary)
}

/// Print the template names `--template` accepts, one per line
fn print_template_list(templates: &report::TemplateSource) {
    match report::list_templates(templates) {
        Ok(names) => {
            println!("Available templates:");
            for name in names.into_iter().filter(|n| cli::TemplateName::is_selectable(n)) {
                println!("  - {}", name);
            }
        }
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Print the success line and test counts
fn print_summary(config: &ReportConfig, summary: &ReportSummary) {
    ui::print_success(&format!("Report generated successfully: '{}'", config.output.display()));
    println!("  Total tests: {}", summary.total_tests);
    println!("  Passed: {}", summary.total_passed);
    println!("  Failed: {}", summary.total_failures);
    println!("  Errors: {}", summary.total_errors);
    println!("  Skipped: {}", summary.total_skipped);
}
