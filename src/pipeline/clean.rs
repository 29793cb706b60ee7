//! Artifact directory cleanup.

use crate::error::{CleanError, Result};
use crate::project::ProjectMetadata;
use std::path::Path;

/// Remove `build/`, `dist/` and the egg-info directory under the project
/// root.
///
/// Directories that do not exist are skipped, so a second run on an
/// already-clean tree is a no-op. Any other filesystem error aborts with
/// the failing path.
pub fn clean_artifacts(metadata: &ProjectMetadata) -> Result<()> {
    for dir in [
        metadata.build_dir(),
        metadata.dist_dir(),
        metadata.egg_info_dir(),
    ] {
        remove_dir_if_present(&dir)?;
    }
    Ok(())
}

fn remove_dir_if_present(path: &Path) -> Result<()> {
    log::debug!("Removing {}", path.display());
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(CleanError::RemoveFailed {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}
