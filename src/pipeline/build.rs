//! Invocation of the Python build frontend.
//!
//! Runs `python -m build --sdist --wheel` in the project root and verifies
//! that the distribution directory holds both output formats afterwards.

use crate::error::{BuildError, Result};
use crate::project::ProjectMetadata;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Files produced by a successful build, as found in `dist/`
#[derive(Debug)]
pub struct BuildArtifacts {
    /// Artifact paths, sorted
    pub files: Vec<PathBuf>,
}

impl BuildArtifacts {
    /// File names of the artifacts, for display and reporting
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

/// Locate a Python interpreter on PATH, preferring `python3`
pub fn find_interpreter() -> Result<PathBuf> {
    which::which("python3")
        .or_else(|_| which::which("python"))
        .map_err(|_| BuildError::InterpreterNotFound.into())
}

/// Run the build frontend, requesting a source distribution and a wheel.
///
/// A non-zero exit is fatal and surfaces the tool's stderr verbatim; the
/// pipeline must not proceed to upload a stale or absent artifact set.
pub async fn build_distributions(metadata: &ProjectMetadata) -> Result<BuildArtifacts> {
    let python = find_interpreter()?;
    log::debug!(
        "Spawning {} -m build --sdist --wheel in {}",
        python.display(),
        metadata.root.display()
    );

    let output = Command::new(&python)
        .args(["-m", "build", "--sdist", "--wheel"])
        .current_dir(&metadata.root)
        .output()
        .await?;

    if !output.status.success() {
        return Err(BuildError::BuildFailed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }

    verify_artifacts(metadata)
}

/// Confirm the build left at least one sdist and one wheel in `dist/`.
fn verify_artifacts(metadata: &ProjectMetadata) -> Result<BuildArtifacts> {
    let dist = metadata.dist_dir();
    let files = super::collect_artifacts(&dist)?;

    if !files.iter().any(|path| is_sdist(path)) {
        return Err(BuildError::MissingSdist { dist }.into());
    }
    if !files.iter().any(|path| is_wheel(path)) {
        return Err(BuildError::MissingWheel { dist }.into());
    }

    Ok(BuildArtifacts { files })
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|name| name.to_str()).unwrap_or("")
}

fn is_sdist(path: &Path) -> bool {
    let name = file_name(path);
    name.ends_with(".tar.gz") || name.ends_with(".zip")
}

fn is_wheel(path: &Path) -> bool {
    file_name(path).ends_with(".whl")
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn classifies_artifact_formats() {
        assert!(is_sdist(Path::new("dist/demo_pkg-0.1.0.tar.gz")));
        assert!(is_sdist(Path::new("dist/demo_pkg-0.1.0.zip")));
        assert!(!is_sdist(Path::new("dist/demo_pkg-0.1.0-py3-none-any.whl")));
        assert!(is_wheel(Path::new("dist/demo_pkg-0.1.0-py3-none-any.whl")));
        assert!(!is_wheel(Path::new("dist/demo_pkg-0.1.0.tar.gz")));
    }

    #[test]
    fn verify_requires_both_formats() {
        let (_dir, metadata) = demo_project();
        let dist = metadata.dist_dir();
        fs::create_dir_all(&dist).expect("mkdir dist");
        fs::write(dist.join("demo_pkg-0.1.0.tar.gz"), "").expect("write sdist");

        let err = verify_artifacts(&metadata).expect_err("missing wheel");
        assert!(matches!(
            err,
            crate::error::ReleaseError::Build(BuildError::MissingWheel { .. })
        ));

        fs::write(dist.join("demo_pkg-0.1.0-py3-none-any.whl"), "").expect("write wheel");
        let artifacts = verify_artifacts(&metadata).expect("both formats present");
        assert_eq!(artifacts.files.len(), 2);
    }

    #[test]
    fn verify_fails_on_empty_dist() {
        let (_dir, metadata) = demo_project();
        fs::create_dir_all(metadata.dist_dir()).expect("mkdir dist");

        let err = verify_artifacts(&metadata).expect_err("empty dist");
        assert!(matches!(
            err,
            crate::error::ReleaseError::Build(BuildError::MissingSdist { .. })
        ));
    }
}
