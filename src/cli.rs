use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Bundled report templates
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateName {
    Basic,
    Modern,
    Detailed,
}

impl TemplateName {
    /// Template file stem
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Basic => "basic",
            TemplateName::Modern => "modern",
            TemplateName::Detailed => "detailed",
        }
    }

    /// Whether `name` is accepted by `--template`
    pub fn is_selectable(name: &str) -> bool {
        Self::value_variants().iter().any(|t| t.as_str() == name)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "junit-report")]
#[command(about = "Transform JUnit XML reports into clean, standalone HTML reports")]
#[command(version)]
#[command(after_help = "Examples:
  # Generate a basic HTML report
  junit-report junit-results.xml report.html

  # Use a modern template
  junit-report junit-results.xml report.html --template modern

  # List available templates
  junit-report --list-templates")]
pub struct CliArgs {
    /// Path to JUnit XML file
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Path to output HTML file
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// HTML template to use
    #[arg(long, short = 't', value_enum, default_value_t = TemplateName::Basic)]
    pub template: TemplateName,

    /// List available templates and exit
    #[arg(long)]
    pub list_templates: bool,

    /// Directory to load templates from; only basic, modern and detailed are selectable
    /// Default: $JUNIT_REPORT_TEMPLATE_DIR, then the templates built into the binary
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Also export the report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.list_templates {
            return Ok(());
        }

        if self.input.is_none() || self.output.is_none() {
            return Err("Both input and output arguments are required (unless using --list-templates)".to_string());
        }

        Ok(())
    }
}
