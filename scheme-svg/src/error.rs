use std::io;
use std::path::PathBuf;

/// Error produced while rewriting a single template document.
#[derive(thiserror::Error, Debug)]
pub enum TemplateError {
    /// The template has no `<style>` element to receive the stylesheet.
    #[error("no <style> element is present in the template")]
    MissingStyle,
    #[error("malformed template: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("error serializing document: {0}")]
    Io(#[from] io::Error),
    #[error("serialized document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Error produced by a render job, carrying the offending path.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("error reading template {}: {source}", path.display())]
    ReadTemplate { path: PathBuf, source: io::Error },
    #[error("bad template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        source: TemplateError,
    },
    #[error("error creating output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("error writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("error reading job table {}: {source}", path.display())]
    ReadJobs { path: PathBuf, source: io::Error },
    #[error("error parsing job table {}: {source}", path.display())]
    ParseJobs {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl RenderError {
    /// Whether the error comes from the template's structure rather than
    /// from the filesystem.
    pub fn is_template_structure(&self) -> bool {
        matches!(
            self,
            RenderError::Template {
                source: TemplateError::MissingStyle,
                ..
            }
        )
    }
}
