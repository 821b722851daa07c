//! Rendering of cube color schemes into SVG templates.
//!
//! A template is any SVG document with a `<style>` element and, optionally,
//! a `<text id="label">` element. Stickers are expected to carry one of the
//! face classes (`col_up`, `col_down`, ...), which the generated stylesheet
//! fills with the scheme's colors.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use scheme_core::ColorScheme;

mod error;
mod jobs;
mod template;

pub use error::{RenderError, TemplateError};
pub use jobs::{RenderJob, RenderMode, load_jobs};
pub use template::rewrite;

/// Stylesheet with one fill declaration per face class.
pub fn stylesheet(scheme: &ColorScheme) -> String {
    let mut s = String::from("\n");
    for (face, color) in scheme.face_colors() {
        // Writing into a String never fails.
        let _ = writeln!(s, "    .{} {{ fill:{} }}", face.css_class(), color.name());
    }
    s.push_str("  ");
    s
}

/// Label text, e.g. `(01) WYGBOR (standard)`.
pub fn scheme_label(scheme: &ColorScheme) -> String {
    match &scheme.description {
        Some(d) if !d.is_empty() => format!("({:02}) {} ({d})", scheme.index, scheme.code),
        _ => format!("({:02}) {}", scheme.index, scheme.code),
    }
}

/// Render one scheme into the given template text.
pub fn render_scheme(template: &str, scheme: &ColorScheme) -> Result<String, TemplateError> {
    rewrite(template, &stylesheet(scheme), &scheme_label(scheme))
}

/// Output file for a scheme: `{prefix}_{NN}_{CODE}.svg`.
pub fn output_path(prefix: &Path, scheme: &ColorScheme) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!("_{:02}_{}.svg", scheme.index, scheme.code));
    PathBuf::from(name)
}

/// Render every selected scheme into `template_path` and write one file per
/// scheme next to `output_prefix`. Returns the written paths in order.
///
/// The template is re-parsed for every scheme. Nothing is written if the
/// template is missing its `<style>` element.
pub fn render_all(
    schemes: &[ColorScheme],
    template_path: &Path,
    output_prefix: &Path,
    mode: RenderMode,
) -> Result<Vec<PathBuf>, RenderError> {
    let template = fs::read_to_string(template_path).map_err(|source| RenderError::ReadTemplate {
        path: template_path.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for scheme in mode.select(schemes) {
        let svg = render_scheme(&template, scheme).map_err(|source| RenderError::Template {
            path: template_path.to_path_buf(),
            source,
        })?;
        let path = output_path(output_prefix, scheme);
        write_file(&path, svg.as_bytes())?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), RenderError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|source| RenderError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}
