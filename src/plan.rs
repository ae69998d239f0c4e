//! Resolved export plan: absolute paths and launch settings for one run

use std::path::{Path, PathBuf};

use crate::config::ExportConfig;

/// Everything a renderer needs to produce the PDF
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    /// Resume data file consumed by the export tool
    pub resume_path: PathBuf,
    /// Where the export tool writes the PDF
    pub output_path: PathBuf,
    pub theme: String,
    /// Program and leading arguments that reach the export tool
    pub runner: Vec<String>,
    /// Flags for the headless browser launched by the export tool
    pub browser_args: Vec<String>,
    pub browser_cache_dir: Option<PathBuf>,
}

impl ExportPlan {
    /// Resolve a plan against a project root
    ///
    /// Relative settings are joined onto `root`; the current working
    /// directory plays no part.
    pub fn resolve(root: &Path, config: &ExportConfig) -> Self {
        let build_dir = root.join(&config.build_dir);
        let plan = Self {
            resume_path: build_dir.join(&config.resume_file),
            output_path: build_dir.join(&config.output_file),
            theme: config.theme.clone(),
            runner: config.runner.command.clone(),
            browser_args: config.browser.launch_args.clone(),
            browser_cache_dir: config.browser.cache_dir.as_ref().map(|dir| root.join(dir)),
        };
        tracing::debug!(
            resume = %plan.resume_path.display(),
            output = %plan.output_path.display(),
            theme = %plan.theme,
            "resolved export plan"
        );
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_paths_under_build_dir() {
        let plan = ExportPlan::resolve(Path::new("/site"), &ExportConfig::default());
        assert_eq!(plan.resume_path, PathBuf::from("/site/build/resume.json"));
        assert_eq!(plan.output_path, PathBuf::from("/site/build/resume.pdf"));
        assert_eq!(plan.theme, "stackoverflow");
        assert_eq!(plan.runner, vec!["npx", "resume"]);
        assert_eq!(plan.browser_cache_dir, None);
    }

    #[test]
    fn test_absolute_build_dir_is_kept() {
        let config = ExportConfig::new().with_build_dir("/tmp/out");
        let plan = ExportPlan::resolve(Path::new("/site"), &config);
        assert_eq!(plan.output_path, PathBuf::from("/tmp/out/resume.pdf"));
    }

    #[test]
    fn test_cache_dir_relative_to_root() {
        let config = ExportConfig::new().with_browser_cache_dir(".cache/puppeteer");
        let plan = ExportPlan::resolve(Path::new("/site"), &config);
        assert_eq!(
            plan.browser_cache_dir,
            Some(PathBuf::from("/site/.cache/puppeteer"))
        );
    }
}
