//! Renderer backed by the external resume command-line tool

use crate::error::ExportError;
use crate::plan::ExportPlan;

use super::command::ExportCommand;
use super::Renderer;

/// Renders by running the resume CLI's `export` subcommand as a child
/// process, which in turn drives a headless browser
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeCli;

impl ResumeCli {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for ResumeCli {
    fn describe(&self, plan: &ExportPlan) -> String {
        ExportCommand::for_plan(plan).to_string()
    }

    fn render(&self, plan: &ExportPlan) -> Result<(), ExportError> {
        ExportCommand::for_plan(plan).run()
    }
}
