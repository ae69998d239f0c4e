//! Resume Export - renders a built resume data file to a PDF
//!
//! The heavy lifting belongs to an external export tool that drives a
//! headless browser. This crate resolves where the input and output live,
//! launches the tool with the browser flags it needs, and reports whether a
//! PDF came out the other end.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use resume_export::{export_project, ResumeCli};
//!
//! let artifact = export_project(Path::new("/srv/site"), ResumeCli::new()).unwrap();
//! println!("{}", artifact);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod plan;
pub mod renderer;

pub use config::{ExportConfig, CONFIG_FILE_NAME, DEFAULT_THEME};
pub use error::{ConfigError, ExportError};
pub use export::{Exporter, PdfArtifact};
pub use plan::ExportPlan;
pub use renderer::{ExportCommand, Renderer, ResumeCli, LAUNCH_ARGS_ENV};

use std::path::Path;

use thiserror::Error;

/// Errors from a complete load-plan-export run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Build an exporter for the project rooted at `root`, reading its
/// optional config file
pub fn exporter_for<R: Renderer>(root: &Path, renderer: R) -> Result<Exporter<R>, ConfigError> {
    let config = ExportConfig::load(root)?;
    Ok(Exporter::new(ExportPlan::resolve(root, &config), renderer))
}

/// Export the resume PDF for the project rooted at `root`
pub fn export_project<R: Renderer>(root: &Path, renderer: R) -> Result<PdfArtifact, RunError> {
    let exporter = exporter_for(root, renderer)?;
    Ok(exporter.export()?)
}
