//! Child process command line for the resume export tool

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{Command, Stdio};

use crate::error::ExportError;
use crate::plan::ExportPlan;

/// Environment variable the export tool reads its browser launch flags from
pub const LAUNCH_ARGS_ENV: &str = "PUPPETEER_ARGS";

/// Environment variable pointing the headless browser at its binary cache
pub const CACHE_DIR_ENV: &str = "PUPPETEER_CACHE_DIR";

/// A fully built export invocation
///
/// The child inherits this process's environment; the variables in `envs`
/// are set on top of it so a parent value can never shadow them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportCommand {
    program: OsString,
    args: Vec<OsString>,
    envs: Vec<(String, OsString)>,
}

impl ExportCommand {
    /// Build `<runner...> export <output> --theme <theme> --resume <input>`
    pub fn for_plan(plan: &ExportPlan) -> Self {
        let (program, leading) = match plan.runner.split_first() {
            Some((program, rest)) => (OsString::from(program), rest),
            None => (OsString::new(), &[][..]),
        };

        let mut args: Vec<OsString> = leading.iter().map(OsString::from).collect();
        args.push("export".into());
        args.push(plan.output_path.clone().into_os_string());
        args.push("--theme".into());
        args.push(OsString::from(&plan.theme));
        args.push("--resume".into());
        args.push(plan.resume_path.clone().into_os_string());

        let mut envs = vec![(
            LAUNCH_ARGS_ENV.to_string(),
            OsString::from(plan.browser_args.join(" ")),
        )];
        if let Some(dir) = &plan.browser_cache_dir {
            envs.push((CACHE_DIR_ENV.to_string(), dir.clone().into_os_string()));
        }

        Self {
            program,
            args,
            envs,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Value this command sets for an environment variable, if any
    pub fn env(&self, key: &str) -> Option<&OsStr> {
        self.envs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }

    /// Build the process command with all standard streams inherited
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    /// Run to completion, blocking until the child exits
    pub fn run(&self) -> Result<(), ExportError> {
        tracing::debug!(envs = ?self.envs, "export command environment");
        tracing::info!(command = %self, "running export tool");

        let status = self
            .to_command()
            .status()
            .map_err(|source| ExportError::Launch {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            tracing::warn!(%status, "export tool failed");
            Err(ExportError::Status(status))
        }
    }
}

impl fmt::Display for ExportCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Quote a word for display the way a POSIX shell would need it
fn shell_quote(word: &OsStr) -> String {
    let word = word.to_string_lossy();
    let needs_quotes = word.is_empty() || !word.chars().all(is_shell_safe);
    if needs_quotes {
        format!("'{}'", word.replace('\'', r"'\''"))
    } else {
        word.into_owned()
    }
}

/// Characters a POSIX shell passes through unquoted in any position
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | '=' | ':' | ',' | '+' | '@' | '%' | '-')
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::config::ExportConfig;
    use pretty_assertions::assert_eq;

    fn default_plan() -> ExportPlan {
        ExportPlan::resolve(Path::new("/site"), &ExportConfig::default())
    }

    #[test]
    fn test_command_line_for_default_plan() {
        let command = ExportCommand::for_plan(&default_plan());
        insta::assert_snapshot!(
            command.to_string(),
            @"npx resume export /site/build/resume.pdf --theme stackoverflow --resume /site/build/resume.json"
        );
    }

    #[test]
    fn test_runner_program_and_leading_args() {
        let command = ExportCommand::for_plan(&default_plan());
        assert_eq!(command.program(), OsStr::new("npx"));
        assert_eq!(command.args()[0], OsString::from("resume"));
        assert_eq!(command.args()[1], OsString::from("export"));
    }

    #[test]
    fn test_sandbox_flags_in_environment() {
        let command = ExportCommand::for_plan(&default_plan());
        assert_eq!(
            command.env(LAUNCH_ARGS_ENV),
            Some(OsStr::new("--no-sandbox --disable-setuid-sandbox"))
        );
        assert_eq!(command.env(CACHE_DIR_ENV), None);
    }

    #[test]
    fn test_cache_dir_in_environment_when_configured() {
        let config = ExportConfig::new().with_browser_cache_dir(".cache/puppeteer");
        let plan = ExportPlan::resolve(Path::new("/site"), &config);
        let command = ExportCommand::for_plan(&plan);
        assert_eq!(
            command.env(CACHE_DIR_ENV),
            Some(OsStr::new("/site/.cache/puppeteer"))
        );
    }

    #[test]
    fn test_process_command_carries_env_and_args() {
        let command = ExportCommand::for_plan(&default_plan()).to_command();
        let envs: Vec<_> = command.get_envs().collect();
        assert!(envs.contains(&(
            OsStr::new(LAUNCH_ARGS_ENV),
            Some(OsStr::new("--no-sandbox --disable-setuid-sandbox"))
        )));
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.len(), 7);
        assert_eq!(args[3], OsStr::new("--theme"));
        assert_eq!(args[4], OsStr::new("stackoverflow"));
    }

    #[test]
    fn test_paths_with_spaces_are_quoted() {
        let mut plan = default_plan();
        plan.output_path = PathBuf::from("/my site/resume.pdf");
        let line = ExportCommand::for_plan(&plan).to_string();
        assert!(line.contains("export '/my site/resume.pdf' --theme"));
    }

    #[test]
    fn test_shell_quote_escapes_single_quotes() {
        assert_eq!(shell_quote(OsStr::new("it's")), r"'it'\''s'");
        assert_eq!(shell_quote(OsStr::new("")), "''");
        assert_eq!(shell_quote(OsStr::new("plain")), "plain");
    }

    #[test]
    fn test_shell_metacharacters_are_quoted() {
        for word in ["a;b", "a&b", "a|b", "(a)", "<a>", "*.pdf", "a?", "#a", "~/cv", "$HOME"] {
            assert_eq!(shell_quote(OsStr::new(word)), format!("'{}'", word));
        }
        assert_eq!(
            shell_quote(OsStr::new("/srv/site-1/build/resume.pdf")),
            "/srv/site-1/build/resume.pdf"
        );
        assert_eq!(shell_quote(OsStr::new("--theme=a,b:c+d@e%f")), "--theme=a,b:c+d@e%f");
    }

    #[test]
    fn test_missing_program_fails_to_launch() {
        let mut plan = default_plan();
        plan.runner = vec!["resume-export-no-such-tool".to_string()];
        let result = ExportCommand::for_plan(&plan).run();
        assert!(matches!(result, Err(ExportError::Launch { .. })));
    }
}
