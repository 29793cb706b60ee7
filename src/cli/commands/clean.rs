//! Clean command implementation.
//!
//! Removes artifact directories without building or uploading.

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::pipeline::clean_artifacts;
use crate::project::ProjectMetadata;

/// Execute clean command
pub(super) async fn execute_clean(args: &Args, config: &RuntimeConfig) -> Result<()> {
    let metadata = ProjectMetadata::discover(&args.project_dir)?;

    config.println(&format!(
        "Cleaning previous build artifacts for '{}'...",
        metadata.name
    ));
    clean_artifacts(&metadata)?;
    config.success_println("Removed build/, dist/ and egg-info output");
    Ok(())
}
