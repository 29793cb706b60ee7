//! The release pipeline: clean, build, upload.
//!
//! Steps run strictly in order and each one gates the next, so a failed
//! build can never be followed by an upload of stale or missing artifacts.

mod build;
mod clean;
mod upload;

pub use build::{BuildArtifacts, build_distributions, find_interpreter};
pub use clean::clean_artifacts;
pub use upload::{collect_artifacts, upload_artifacts};

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::project::ProjectMetadata;
use crate::report::RunReport;
use std::time::Instant;

/// Options controlling a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Upload endpoint passed to twine; twine's own configuration applies
    /// when unset
    pub repository_url: Option<String>,
    /// Build and verify but skip the upload step
    pub dry_run: bool,
}

/// Sequential executor for the release pipeline
pub struct ReleasePipeline<'a> {
    metadata: &'a ProjectMetadata,
    options: PipelineOptions,
    config: &'a RuntimeConfig,
}

impl<'a> ReleasePipeline<'a> {
    /// Create a pipeline for `metadata` with the given options
    pub fn new(
        metadata: &'a ProjectMetadata,
        options: PipelineOptions,
        config: &'a RuntimeConfig,
    ) -> Self {
        Self {
            metadata,
            options,
            config,
        }
    }

    /// Run clean, build and upload in order.
    ///
    /// The first failing step aborts the run; callers print the completion
    /// message only when this returns Ok.
    pub async fn run(&self) -> Result<RunReport> {
        let mut report = RunReport::new(&self.metadata.name);

        // ===== STEP 1: CLEAN =====
        self.config.println("Cleaning previous build artifacts...");
        let started = Instant::now();
        clean_artifacts(self.metadata)?;
        report.record_step("clean", started.elapsed());
        self.config
            .success_println("Removed build/, dist/ and egg-info output");

        // ===== STEP 2: BUILD =====
        self.config
            .println("Building source distribution and wheel...");
        let started = Instant::now();
        let artifacts = build_distributions(self.metadata).await?;
        report.record_step("build", started.elapsed());
        report.artifacts = artifacts.file_names();
        self.config
            .success_println(&format!("Built {} artifact(s)", artifacts.files.len()));
        for name in &report.artifacts {
            self.config.indent(name);
        }

        // ===== STEP 3: UPLOAD =====
        if self.options.dry_run {
            self.config
                .warning_println("Dry run: skipping upload to the package index");
        } else {
            self.config
                .println("Uploading distributions to the package index...");
            let started = Instant::now();
            upload_artifacts(self.metadata, self.options.repository_url.as_deref()).await?;
            report.record_step("upload", started.elapsed());
            report.uploaded = true;
            self.config
                .success_println(&format!("Uploaded {} artifact(s)", artifacts.files.len()));
        }

        Ok(report)
    }
}
