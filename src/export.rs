//! Export orchestration: check the input, render, verify the output

use std::fmt;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::ExportError;
use crate::plan::ExportPlan;
use crate::renderer::Renderer;

/// A PDF the renderer left at the planned output path
#[derive(Debug, Clone, PartialEq)]
pub struct PdfArtifact {
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

impl fmt::Display for PdfArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bytes, {:.1} KB)",
            self.path.display(),
            group_thousands(self.size),
            self.size as f64 / 1024.0
        )
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// What a file at the output path looked like, used to tell a fresh PDF
/// from one left behind by an earlier run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OutputStamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl OutputStamp {
    fn of(metadata: &Metadata) -> Self {
        Self {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        }
    }

    fn read(path: &Path) -> Option<Self> {
        std::fs::metadata(path).ok().map(|m| Self::of(&m))
    }
}

/// Runs a single export plan through a renderer
#[derive(Debug)]
pub struct Exporter<R> {
    plan: ExportPlan,
    renderer: R,
}

impl<R: Renderer> Exporter<R> {
    pub fn new(plan: ExportPlan, renderer: R) -> Self {
        Self { plan, renderer }
    }

    pub fn plan(&self) -> &ExportPlan {
        &self.plan
    }

    /// The command line (or equivalent) the export will run
    pub fn describe(&self) -> String {
        self.renderer.describe(&self.plan)
    }

    /// Export the PDF
    ///
    /// A partially written output file is left in place on failure. An
    /// output file the renderer did not touch counts as missing.
    pub fn export(&self) -> Result<PdfArtifact, ExportError> {
        let plan = &self.plan;
        if !plan.resume_path.is_file() {
            return Err(ExportError::MissingInput(plan.resume_path.clone()));
        }

        let previous = OutputStamp::read(&plan.output_path);

        tracing::info!(theme = %plan.theme, "exporting resume to PDF");
        self.renderer.render(plan)?;

        let missing = || ExportError::MissingOutput(plan.output_path.clone());
        let metadata = std::fs::metadata(&plan.output_path).map_err(|_| missing())?;
        if !metadata.is_file() {
            return Err(missing());
        }
        if previous == Some(OutputStamp::of(&metadata)) {
            tracing::warn!(output = %plan.output_path.display(), "output left unchanged by renderer");
            return Err(missing());
        }

        let artifact = PdfArtifact {
            path: plan.output_path.clone(),
            size: metadata.len(),
        };
        tracing::info!(size = artifact.size, "export finished");
        Ok(artifact)
    }
}
