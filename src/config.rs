//! Export settings
//!
//! Every setting has a built-in default, so a project needs no config file
//! at all. A `resume-export.toml` at the project root overrides individual
//! values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Name of the optional settings file, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "resume-export.toml";

/// Theme passed to the export tool unless overridden
pub const DEFAULT_THEME: &str = "stackoverflow";

/// Settings for a single PDF export
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Theme identifier, interpreted by the export tool
    pub theme: String,
    /// Build output directory, relative to the project root
    pub build_dir: PathBuf,
    /// Resume data file name inside the build directory
    pub resume_file: PathBuf,
    /// PDF file name inside the build directory
    pub output_file: PathBuf,
    /// How to invoke the export tool
    pub runner: RunnerConfig,
    /// Headless browser settings handed to the export tool
    pub browser: BrowserConfig,
}

/// Program and leading arguments that reach the export tool
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    pub command: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserConfig {
    /// Flags for every browser launch the export tool performs
    pub launch_args: Vec<String>,
    /// Browser binary cache, relative to the project root
    pub cache_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            build_dir: PathBuf::from("build"),
            resume_file: PathBuf::from("resume.json"),
            output_file: PathBuf::from("resume.pdf"),
            runner: RunnerConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command: vec!["npx".to_string(), "resume".to_string()],
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            launch_args: vec![
                "--no-sandbox".to_string(),
                "--disable-setuid-sandbox".to_string(),
            ],
            cache_dir: None,
        }
    }
}

impl ExportConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings for a project, falling back to defaults when the
    /// project has no config file
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: ExportConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.runner.command.is_empty() {
            return Err(ConfigError::EmptyRunner);
        }
        Ok(())
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set the build output directory
    pub fn with_build_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_dir = dir.into();
        self
    }

    /// Set the program and leading arguments used to reach the export tool
    pub fn with_runner<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.runner.command = command.into_iter().map(Into::into).collect();
        self
    }

    /// Set the browser binary cache directory
    pub fn with_browser_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.browser.cache_dir = Some(dir.into());
        self
    }
}
