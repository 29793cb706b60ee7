//! Invocation of the twine upload client.
//!
//! Credentials are ambient (TWINE_* environment variables or ~/.pypirc) and
//! never handled here; twine's own diagnostics are surfaced on failure.

use crate::error::{CliError, Result, UploadError};
use crate::project::ProjectMetadata;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Expand `<dist>/*` at call time, returning the files currently present.
///
/// Expansion is deliberately deferred to the moment of use so the upload
/// step sees exactly what the build step produced, not an earlier snapshot.
pub fn collect_artifacts(dist: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*", glob::Pattern::escape(&dist.to_string_lossy()));
    let entries = glob::glob(&pattern).map_err(|e| CliError::ExecutionFailed {
        command: format!("glob {pattern}"),
        reason: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    log::debug!("Glob '{}' matched {} file(s)", pattern, files.len());
    Ok(files)
}

/// Upload everything currently in `dist/` with twine.
///
/// Errors if the directory is empty rather than letting a run with no
/// artifacts report success.
pub async fn upload_artifacts(
    metadata: &ProjectMetadata,
    repository_url: Option<&str>,
) -> Result<()> {
    let dist = metadata.dist_dir();
    let files = collect_artifacts(&dist)?;
    if files.is_empty() {
        return Err(UploadError::NoArtifacts { dist }.into());
    }

    let twine = which::which("twine").map_err(|_| UploadError::TwineNotFound)?;
    log::debug!(
        "Spawning {} upload with {} file(s)",
        twine.display(),
        files.len()
    );

    let mut cmd = Command::new(&twine);
    cmd.arg("upload").current_dir(&metadata.root);
    if let Some(url) = repository_url {
        cmd.args(["--repository-url", url]);
    }
    cmd.args(&files);

    let output = cmd.output().await?;
    if !output.status.success() {
        return Err(UploadError::UploadFailed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;
    use std::fs;

    fn demo_project() -> (tempfile::TempDir, ProjectMetadata) {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nname = \"demo-pkg\"\n",
        )
        .expect("write pyproject");
        let metadata = ProjectMetadata::discover(dir.path()).expect("discover");
        (dir, metadata)
    }

    #[test]
    fn collects_only_files_sorted() {
        let (_dir, metadata) = demo_project();
        let dist = metadata.dist_dir();
        fs::create_dir_all(dist.join("subdir")).expect("mkdirs");
        fs::write(dist.join("b.whl"), "").expect("write b");
        fs::write(dist.join("a.tar.gz"), "").expect("write a");

        let files = collect_artifacts(&dist).expect("collect");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().expect("name").to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.tar.gz", "b.whl"]);
    }

    #[test]
    fn collect_on_missing_dist_is_empty() {
        let (_dir, metadata) = demo_project();
        let files = collect_artifacts(&metadata.dist_dir()).expect("collect");
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn upload_rejects_empty_dist() {
        let (_dir, metadata) = demo_project();
        fs::create_dir_all(metadata.dist_dir()).expect("mkdir dist");

        let err = upload_artifacts(&metadata, None)
            .await
            .expect_err("empty dist must not upload");
        assert!(matches!(
            err,
            ReleaseError::Upload(UploadError::NoArtifacts { .. })
        ));
    }
}
