/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportConfig from CLI arguments
/// - Resolving the template source (flag, environment, bundled default)
use crate::cli::CliArgs;
use crate::report::TemplateSource;
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the template directory
pub const TEMPLATE_DIR_ENV: &str = "JUNIT_REPORT_TEMPLATE_DIR";

/// Fully resolved settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub template: String,
    pub templates: TemplateSource,
    pub json_output: Option<PathBuf>,
}

/// Build a complete ReportConfig from CLI arguments
///
/// Arguments must already have passed `CliArgs::validate`.
pub fn build_report_config(args: &CliArgs) -> Result<ReportConfig, String> {
    let input = args.input.clone().ok_or_else(|| "Missing input path".to_string())?;
    let output = args.output.clone().ok_or_else(|| "Missing output path".to_string())?;
    let templates = resolve_template_source(args);

    debug!("Input {:?}, output {:?}, template '{}' from {:?}", input, output, args.template.as_str(), templates);

    Ok(ReportConfig {
        input,
        output,
        template: args.template.as_str().to_string(),
        templates,
        json_output: args.json.clone(),
    })
}

/// Resolve where templates come from: `--template-dir`, then the environment, then the bundled set
pub fn resolve_template_source(args: &CliArgs) -> TemplateSource {
    template_source_from(args.template_dir.as_deref(), std::env::var_os(TEMPLATE_DIR_ENV))
}

fn template_source_from(flag: Option<&Path>, env_value: Option<OsString>) -> TemplateSource {
    if let Some(dir) = flag {
        debug!("Using template directory from --template-dir: {:?}", dir);
        return TemplateSource::Directory(dir.to_path_buf());
    }

    match env_value.filter(|v| !v.is_empty()) {
        Some(dir) => {
            debug!("Using template directory from {}: {:?}", TEMPLATE_DIR_ENV, dir);
            TemplateSource::Directory(PathBuf::from(dir))
        }
        None => TemplateSource::Bundled,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
