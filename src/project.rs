//! Project root discovery and distribution metadata.
//!
//! The release runner anchors every artifact path to the directory that
//! holds the Python project manifest, not to the caller's working directory.
//! The distribution name is read from pyproject.toml ([project] table) or,
//! for legacy projects, scanned out of setup.py.

use crate::error::{ProjectError, Result};
use std::path::{Path, PathBuf};

/// Metadata for the Python project being released
#[derive(Debug, Clone)]
pub struct ProjectMetadata {
    /// Distribution name as declared in the project manifest
    pub name: String,
    /// Resolved project root (directory containing the manifest)
    pub root: PathBuf,
}

impl ProjectMetadata {
    /// Locate the project root at or above `start` and read the
    /// distribution name from its manifest.
    pub fn discover(start: &Path) -> Result<Self> {
        let root = find_project_root(start)?;
        let name = read_distribution_name(&root)?;
        log::debug!("Resolved project '{}' at {}", name, root.display());
        Ok(Self { name, root })
    }

    /// Directory the build backend writes intermediate output into
    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    /// Directory the build frontend writes finished distributions into
    pub fn dist_dir(&self) -> PathBuf {
        self.root.join("dist")
    }

    /// setuptools metadata directory, named after the distribution with
    /// hyphens normalized to underscores as setuptools does
    pub fn egg_info_dir(&self) -> PathBuf {
        self.root
            .join(format!("{}.egg-info", self.name.replace('-', "_")))
    }
}

/// Walk upward from `start` until a directory holds a project manifest.
fn find_project_root(start: &Path) -> Result<PathBuf> {
    let start = start.canonicalize()?;
    let mut dir = start.as_path();
    loop {
        if dir.join("pyproject.toml").is_file() || dir.join("setup.py").is_file() {
            return Ok(dir.to_path_buf());
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return Err(ProjectError::RootNotFound { start }.into()),
        }
    }
}

fn read_distribution_name(root: &Path) -> Result<String> {
    let pyproject = root.join("pyproject.toml");
    if pyproject.is_file()
        && let Some(name) = pyproject_name(&pyproject)?
    {
        return Ok(name);
    }

    let setup = root.join("setup.py");
    if setup.is_file()
        && let Some(name) = setup_py_name(&setup)?
    {
        return Ok(name);
    }

    Err(ProjectError::NameNotFound {
        root: root.to_path_buf(),
        reason: "no [project] name in pyproject.toml and no name= keyword in setup.py"
            .to_string(),
    }
    .into())
}

/// Read `[project] name` from pyproject.toml.
fn pyproject_name(path: &Path) -> Result<Option<String>> {
    let content = std::fs::read_to_string(path)?;
    let value: toml::Value =
        toml::from_str(&content).map_err(|source| ProjectError::InvalidPyproject {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(value
        .get("project")
        .and_then(|project| project.get("name"))
        .and_then(|name| name.as_str())
        .map(|name| name.to_string()))
}

/// Scan setup.py for a `name="..."` keyword argument.
///
/// This is a line scan, not a Python parser. It handles the common
/// setup(name="pkg", ...) layout where the keyword sits on its own line.
fn setup_py_name(path: &Path) -> Result<Option<String>> {
    let content = std::fs::read_to_string(path)?;
    for line in content.lines() {
        let Some(rest) = line.trim().strip_prefix("name") else {
            continue;
        };
        let Some(rest) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let quote = match rest.chars().next() {
            Some(c @ ('"' | '\'')) => c,
            _ => continue,
        };
        if let Some(end) = rest[1..].find(quote) {
            return Ok(Some(rest[1..1 + end].to_string()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_pyproject_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nname = \"demo-pkg\"\nversion = \"0.1.0\"\n",
        )
        .expect("write pyproject");

        let metadata = ProjectMetadata::discover(dir.path()).expect("discover");
        assert_eq!(metadata.name, "demo-pkg");
        assert!(metadata.egg_info_dir().ends_with("demo_pkg.egg-info"));
    }

    #[test]
    fn discovers_setup_py_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("setup.py"),
            "from setuptools import setup\n\nsetup(\n    name=\"eezo\",\n    version=\"0.4.1\",\n)\n",
        )
        .expect("write setup.py");

        let metadata = ProjectMetadata::discover(dir.path()).expect("discover");
        assert_eq!(metadata.name, "eezo");
        assert!(metadata.egg_info_dir().ends_with("eezo.egg-info"));
    }

    #[test]
    fn setup_py_single_quotes() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("setup.py"),
            "setup(\n    name='my-tool',\n)\n",
        )
        .expect("write setup.py");

        let metadata = ProjectMetadata::discover(dir.path()).expect("discover");
        assert_eq!(metadata.name, "my-tool");
    }

    #[test]
    fn searches_upward_for_manifest() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nname = \"nested\"\n",
        )
        .expect("write pyproject");
        let nested = dir.path().join("src").join("nested");
        fs::create_dir_all(&nested).expect("mkdirs");

        let metadata = ProjectMetadata::discover(&nested).expect("discover");
        assert_eq!(metadata.name, "nested");
        assert_eq!(
            metadata.root,
            dir.path().canonicalize().expect("canonicalize")
        );
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ProjectMetadata::discover(dir.path()).expect_err("no manifest");
        assert!(err.to_string().contains("pyproject.toml"));
    }

    #[test]
    fn pyproject_wins_over_setup_py() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nname = \"modern\"\n",
        )
        .expect("write pyproject");
        fs::write(dir.path().join("setup.py"), "setup(name=\"legacy\")\n")
            .expect("write setup.py");

        let metadata = ProjectMetadata::discover(dir.path()).expect("discover");
        assert_eq!(metadata.name, "modern");
    }
}
