//! Error types for pypi_release operations.
//!
//! Each pipeline step has its own error enum so a failure names the step it
//! came from and carries the underlying tool's diagnostics verbatim.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pypi_release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all pypi_release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Project discovery errors
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    /// Cleanup step errors
    #[error("Clean error: {0}")]
    Clean(#[from] CleanError),

    /// Build step errors
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Upload step errors
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Project discovery errors
#[derive(Error, Debug)]
pub enum ProjectError {
    /// No Python project manifest found
    #[error("No pyproject.toml or setup.py found in '{start}' or any parent directory")]
    RootNotFound {
        /// Directory the upward search started from
        start: PathBuf,
    },

    /// Distribution name could not be determined
    #[error("Could not determine distribution name under {root}: {reason}")]
    NameNotFound {
        /// Project root that was inspected
        root: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// pyproject.toml failed to parse
    #[error("Invalid pyproject.toml at {path}: {source}")]
    InvalidPyproject {
        /// Path to the offending file
        path: PathBuf,
        /// Parsing error
        #[source]
        source: toml::de::Error,
    },
}

/// Cleanup step errors
#[derive(Error, Debug)]
pub enum CleanError {
    /// Removing an artifact directory failed for a reason other than absence
    #[error("Failed to remove {path}: {source}")]
    RemoveFailed {
        /// Directory that could not be removed
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },
}

/// Build step errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// No Python interpreter on PATH
    #[error("No Python interpreter found on PATH (tried python3, python)")]
    InterpreterNotFound,

    /// The build frontend exited non-zero
    #[error("python -m build exited with status {code:?}:\n{stderr}")]
    BuildFailed {
        /// Exit code if the process was not killed by a signal
        code: Option<i32>,
        /// The tool's stderr, verbatim
        stderr: String,
    },

    /// Build succeeded but produced no source distribution
    #[error("Build produced no source distribution in {dist}")]
    MissingSdist {
        /// Distribution output directory
        dist: PathBuf,
    },

    /// Build succeeded but produced no wheel
    #[error("Build produced no wheel in {dist}")]
    MissingWheel {
        /// Distribution output directory
        dist: PathBuf,
    },
}

/// Upload step errors
#[derive(Error, Debug)]
pub enum UploadError {
    /// twine is not installed or not on PATH
    #[error("twine not found on PATH")]
    TwineNotFound,

    /// The distribution directory is empty at upload time
    #[error("No artifacts in {dist} to upload")]
    NoArtifacts {
        /// Distribution output directory
        dist: PathBuf,
    },

    /// twine exited non-zero (bad credentials, network, duplicate version)
    #[error("twine upload exited with status {code:?}:\n{stderr}")]
    UploadFailed {
        /// Exit code if the process was not killed by a signal
        code: Option<i32>,
        /// The tool's stderr, verbatim
        stderr: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Project(ProjectError::RootNotFound { .. }) => vec![
                "Run from within a Python project directory".to_string(),
                "Point at the project explicitly: pypi_release -C /path/to/project publish"
                    .to_string(),
            ],
            ReleaseError::Build(BuildError::InterpreterNotFound) => vec![
                "Install Python 3 and ensure python3 is on PATH".to_string(),
            ],
            ReleaseError::Build(BuildError::BuildFailed { .. }) => vec![
                "Install the build frontend: python -m pip install build".to_string(),
                "Check the package metadata in pyproject.toml or setup.py".to_string(),
            ],
            ReleaseError::Upload(UploadError::TwineNotFound) => vec![
                "Install the upload client: python -m pip install twine".to_string(),
            ],
            ReleaseError::Upload(UploadError::UploadFailed { .. }) => vec![
                "Check credentials: TWINE_USERNAME/TWINE_PASSWORD or ~/.pypirc".to_string(),
                "A duplicate version is rejected by the index; bump the version and rebuild"
                    .to_string(),
            ],
            ReleaseError::Upload(UploadError::NoArtifacts { .. }) => vec![
                "Run the build step first: pypi_release publish".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
