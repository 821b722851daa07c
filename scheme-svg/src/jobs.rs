use std::fs;
use std::path::{Path, PathBuf};

use scheme_core::ColorScheme;
use serde::{Deserialize, Serialize};

use crate::RenderError;

/// Which schemes a job renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Every scheme.
    #[default]
    Default,
    /// Every second scheme, starting with the first.
    Summary,
}

impl RenderMode {
    pub fn select(self, schemes: &[ColorScheme]) -> Vec<&ColorScheme> {
        match self {
            RenderMode::Default => schemes.iter().collect(),
            RenderMode::Summary => schemes.iter().step_by(2).collect(),
        }
    }
}

/// One template rendered against the scheme list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderJob {
    /// Template file name, relative to the templates directory.
    pub template: String,
    /// Output subdirectory, relative to the output root.
    pub output_dir: String,
    /// File name prefix of the generated images.
    pub prefix: String,
    #[serde(default)]
    pub mode: RenderMode,
}

impl RenderJob {
    pub fn new(template: &str, output_dir: &str, prefix: &str, mode: RenderMode) -> Self {
        Self {
            template: template.to_string(),
            output_dir: output_dir.to_string(),
            prefix: prefix.to_string(),
            mode,
        }
    }

    /// The templates shipped in `templates/` and where their images go.
    pub fn reference_jobs() -> Vec<RenderJob> {
        let job = |template, output_dir, prefix| {
            RenderJob::new(template, output_dir, prefix, RenderMode::Default)
        };
        vec![
            job("template_simplified.svg", "color_scheme_simplified", "simplified"),
            job("template_detailed.svg", "color_scheme_detailed", "detailed"),
            job("template_checkerboard.svg", "color_scheme_checkerboard", "checkerboard"),
            job("template_flat.svg", "color_scheme_flat", "flat"),
            RenderJob::new(
                "template_checkerboard_summary.svg",
                "color_scheme_checkerboard_summary",
                "checkerboard_summary",
                RenderMode::Summary,
            ),
        ]
    }

    pub fn template_path(&self, templates_dir: &Path) -> PathBuf {
        templates_dir.join(&self.template)
    }

    pub fn output_prefix(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.output_dir).join(&self.prefix)
    }

    /// Render the job and return the written files.
    pub fn run(
        &self,
        schemes: &[ColorScheme],
        templates_dir: &Path,
        output_root: &Path,
    ) -> Result<Vec<PathBuf>, RenderError> {
        log::info!(
            "Generating {} images for {:?}.",
            self.mode.select(schemes).len(),
            self.output_dir
        );
        crate::render_all(
            schemes,
            &self.template_path(templates_dir),
            &self.output_prefix(output_root),
            self.mode,
        )
    }
}

/// Load a job table from a JSON array of jobs.
pub fn load_jobs(path: &Path) -> Result<Vec<RenderJob>, RenderError> {
    let txt = fs::read_to_string(path).map_err(|source| RenderError::ReadJobs {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&txt).map_err(|source| RenderError::ParseJobs {
        path: path.to_path_buf(),
        source,
    })
}
