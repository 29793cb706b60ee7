//! Publish command implementation.
//!
//! Runs the full pipeline: clean, build sdist + wheel, upload, report.

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::Result;
use crate::pipeline::{PipelineOptions, ReleasePipeline};
use crate::project::ProjectMetadata;

/// Execute publish command
pub(super) async fn execute_publish(args: &Args, config: &RuntimeConfig) -> Result<()> {
    let Command::Publish {
        repository_url,
        dry_run,
        json,
    } = &args.command
    else {
        unreachable!("execute_publish called with non-Publish command");
    };

    let metadata = ProjectMetadata::discover(&args.project_dir)?;
    config.verbose_println(&format!(
        "Releasing '{}' from {}",
        metadata.name,
        metadata.root.display()
    ));

    let options = PipelineOptions {
        repository_url: repository_url.clone(),
        dry_run: *dry_run,
    };

    let pipeline = ReleasePipeline::new(&metadata, options, config);
    let report = pipeline.run().await?;

    if *json {
        config.println(&report.to_json()?);
    }

    // Printed only when every step above succeeded.
    config.success_println(&format!("Done: released {}", metadata.name));
    Ok(())
}
