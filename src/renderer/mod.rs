//! PDF renderers
//!
//! A renderer turns the resume data file named by an [`ExportPlan`] into a
//! PDF at the plan's output path. The crate ships one, [`ResumeCli`], which
//! drives the external resume export tool; anything else implementing
//! [`Renderer`] can stand in for it.

pub mod command;
pub mod resume_cli;

pub use command::{ExportCommand, CACHE_DIR_ENV, LAUNCH_ARGS_ENV};
pub use resume_cli::ResumeCli;

use crate::error::ExportError;
use crate::plan::ExportPlan;

/// Capability to render a resume data file to PDF
pub trait Renderer {
    /// Human-readable description of what `render` will run
    fn describe(&self, plan: &ExportPlan) -> String;

    /// Render synchronously, returning once the PDF is written or the
    /// attempt has failed
    fn render(&self, plan: &ExportPlan) -> Result<(), ExportError>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn describe(&self, plan: &ExportPlan) -> String {
        (**self).describe(plan)
    }

    fn render(&self, plan: &ExportPlan) -> Result<(), ExportError> {
        (**self).render(plan)
    }
}
