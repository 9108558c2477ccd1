//! Template discovery and loading.
//!
//! Templates are either the ones compiled into the binary or the `*.html`
//! files of a user-supplied directory. In a directory the file stem is the
//! name a user selects with `--template`.

use crate::error::{ReportError, Result};
use crate::template::Template;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension shared by all template files
pub const TEMPLATE_EXTENSION: &str = "html";

/// Templates shipped inside the binary, sorted by name
const BUNDLED_TEMPLATES: [(&str, &str); 3] = [
    ("basic", include_str!("../../templates/basic.html")),
    ("detailed", include_str!("../../templates/detailed.html")),
    ("modern", include_str!("../../templates/modern.html")),
];

/// Where templates are looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    Bundled,
    /// `<name>.html` files in a directory
    Directory(PathBuf),
}

/// List available template names, sorted.
///
/// A missing directory lists no templates.
pub fn list_templates(source: &TemplateSource) -> Result<Vec<String>> {
    match source {
        TemplateSource::Bundled => Ok(BUNDLED_TEMPLATES.iter().map(|(name, _)| name.to_string()).collect()),
        TemplateSource::Directory(dir) => list_directory(dir),
    }
}

fn list_directory(dir: &Path) -> Result<Vec<String>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Template directory {:?} does not exist", dir);
            return Ok(Vec::new());
        }
        Err(e) => return Err(ReportError::io(dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ReportError::io(dir, e))?.path();
        if path.is_file()
            && path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION)
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            names.push(stem.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Path of the template file for `name`
pub fn template_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION))
}

/// Read and parse the template called `name`
pub fn load_template(source: &TemplateSource, name: &str) -> Result<Template> {
    let dir = match source {
        TemplateSource::Bundled => {
            debug!("Loading bundled template '{}'", name);
            return BUNDLED_TEMPLATES
                .iter()
                .find(|(bundled, _)| *bundled == name)
                .map(|(_, text)| Template::parse(text))
                .ok_or_else(|| ReportError::TemplateMissing {
                    name: name.to_string(),
                    path: template_path(Path::new("<bundled>"), name),
                });
        }
        TemplateSource::Directory(dir) => dir,
    };

    let path = template_path(dir, name);
    debug!("Loading template '{}' from {:?}", name, path);

    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(Template::parse(&text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ReportError::TemplateMissing { name: name.to_string(), path }),
        Err(e) => Err(ReportError::io(path, e)),
    }
}
