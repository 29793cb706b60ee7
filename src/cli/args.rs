//! Command line argument parsing and validation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release runner for Python packages
#[derive(Parser, Debug)]
#[command(
    name = "pypi_release",
    version,
    about = "Release runner for Python packages: clean, build, upload",
    long_about = "Automate the local release of a Python distribution.

Usage:
  pypi_release publish
  pypi_release -C /path/to/project publish --repository-url https://test.pypi.org/legacy/
  pypi_release clean
  pypi_release check"
)]
pub struct Args {
    /// Project directory; searched upward for pyproject.toml or setup.py
    #[arg(
        short = 'C',
        long = "project-dir",
        global = true,
        value_name = "DIR",
        default_value = "."
    )]
    pub project_dir: PathBuf,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show extra diagnostic output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clean, build sdist + wheel, and upload to the package index
    Publish {
        /// Upload endpoint passed to twine; twine's configuration applies
        /// when unset
        #[arg(long, env = "TWINE_REPOSITORY_URL", value_name = "URL")]
        repository_url: Option<String>,

        /// Build and verify but skip the upload step
        #[arg(long)]
        dry_run: bool,

        /// Print a JSON run summary on success
        #[arg(long)]
        json: bool,
    },

    /// Remove build/, dist/ and egg-info output
    Clean,

    /// Verify the build and upload tool chain without changing anything
    Check,
}

impl Command {
    /// Short name of the command, for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Command::Publish { .. } => "publish",
            Command::Clean => "clean",
            Command::Check => "check",
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Command::Publish {
            repository_url: Some(url),
            ..
        } = &self.command
            && !url.starts_with("https://")
            && !url.starts_with("http://")
        {
            return Err(format!("Repository URL must be http(s), got '{url}'"));
        }
        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print verbose message (only with --verbose)
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.output.is_verbose()
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.output.is_quiet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn rejects_non_http_repository_url() {
        let args = Args::try_parse_from([
            "pypi_release",
            "publish",
            "--repository-url",
            "ftp://example.org/legacy/",
        ])
        .expect("parse");
        assert!(args.validate().is_err());
    }

    #[test]
    fn accepts_https_repository_url() {
        let args = Args::try_parse_from([
            "pypi_release",
            "publish",
            "--repository-url",
            "https://test.pypi.org/legacy/",
        ])
        .expect("parse");
        assert!(args.validate().is_ok());
    }

    #[test]
    fn command_names() {
        let args = Args::try_parse_from(["pypi_release", "clean"]).expect("parse");
        assert_eq!(args.command.name(), "clean");
        assert_eq!(args.project_dir, PathBuf::from("."));
    }
}
