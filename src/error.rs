//! Error types for configuration loading and PDF export

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur when loading export settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("runner command must name at least one program")]
    EmptyRunner,
}

/// Ways an export can fail
///
/// Every variant means the same thing to the caller: the export failed and
/// the PDF at the output path cannot be trusted. The variants only exist to
/// give the failure message a useful description.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The resume data file is not where the plan expects it
    #[error("resume data file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The export tool could not be started
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The export tool ran but did not exit cleanly
    #[error("export command failed with {0}")]
    Status(ExitStatus),

    /// The export tool exited zero without writing anything
    #[error("export command succeeded but no PDF was written to {}", .0.display())]
    MissingOutput(PathBuf),
}

impl ExportError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        1
    }
}
