//! Check command implementation.
//!
//! Preflight for the release tool chain: resolves the project, locates the
//! build and upload tools, and reports whether credentials are visible.
//! Mutates nothing.

use crate::cli::{Args, RuntimeConfig};
use crate::error::{Result, UploadError};
use crate::pipeline::find_interpreter;
use crate::project::ProjectMetadata;

/// Execute check command
pub(super) async fn execute_check(args: &Args, config: &RuntimeConfig) -> Result<()> {
    let metadata = ProjectMetadata::discover(&args.project_dir)?;
    config.println(&format!(
        "Project: {} ({})",
        metadata.name,
        metadata.root.display()
    ));

    let python = find_interpreter()?;
    config.success_println(&format!("Python interpreter: {}", python.display()));

    let twine = which::which("twine").map_err(|_| UploadError::TwineNotFound)?;
    config.success_println(&format!("Upload client: {}", twine.display()));

    if credentials_visible() {
        config.success_println("Upload credentials: found");
    } else {
        config.warning_println("Upload credentials: none visible (twine may prompt or fail)");
    }

    Ok(())
}

/// Credentials are twine's concern; this only reports whether any of its
/// usual sources exist.
fn credentials_visible() -> bool {
    const TWINE_ENV_VARS: [&str; 2] = ["TWINE_USERNAME", "TWINE_PASSWORD"];
    if TWINE_ENV_VARS
        .iter()
        .any(|var| std::env::var_os(var).is_some())
    {
        return true;
    }
    dirs::home_dir()
        .map(|home| home.join(".pypirc").is_file())
        .unwrap_or(false)
}
