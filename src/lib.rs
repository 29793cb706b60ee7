//! # pypi_release
//!
//! Release runner for Python packages.
//!
//! This crate automates the local release of a Python distribution as an
//! explicitly gated pipeline: clear stale build artifacts, invoke the Python
//! build frontend to produce a source distribution and a wheel, and upload
//! the results to a package index with twine. Each step's success is a
//! precondition for the next; the first failure halts the run.
//!
//! ## Usage
//!
//! ```bash
//! pypi_release publish                 # clean, build, upload
//! pypi_release publish --dry-run       # clean and build, skip upload
//! pypi_release clean                   # remove build/, dist/, egg-info
//! pypi_release check                   # preflight the tool chain
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod project;
pub mod report;

pub use cli::Args;
pub use error::{BuildError, CleanError, ReleaseError, Result, UploadError};
pub use pipeline::{PipelineOptions, ReleasePipeline};
pub use project::ProjectMetadata;
pub use report::RunReport;
