//! Project discovery
//!
//! A treadfit project is any directory containing a `treadfit.yaml` manifest.
//! Discovery walks up from the current directory so commands work from
//! anywhere inside the project tree.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Manifest file that marks a project root
pub const MANIFEST_FILE: &str = "treadfit.yaml";

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("not inside a treadfit project (no {MANIFEST_FILE} found in this or any parent directory)")]
    NotFound,

    #[error("a treadfit project already exists at {0}")]
    AlreadyExists(PathBuf),

    #[error("could not read project manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid project manifest: {0}")]
    Manifest(#[from] serde_yml::Error),
}

/// Project manifest contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Directory holding the markdown inventory, relative to the project root
    #[serde(default = "default_inventory_dir")]
    pub inventory_dir: String,
}

fn default_inventory_dir() -> String {
    "tires".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest {
            inventory_dir: default_inventory_dir(),
        }
    }
}

/// A discovered project: root directory plus parsed manifest
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    manifest: Manifest,
}

impl Project {
    /// Discover the project containing the current directory
    pub fn discover() -> Result<Project, ProjectError> {
        let cwd = std::env::current_dir()?;
        Project::discover_from(&cwd)
    }

    /// Discover the project containing `start`, walking up its ancestors
    pub fn discover_from(start: &Path) -> Result<Project, ProjectError> {
        for dir in start.ancestors() {
            let manifest_path = dir.join(MANIFEST_FILE);
            if manifest_path.is_file() {
                return Project::open(dir);
            }
        }
        Err(ProjectError::NotFound)
    }

    /// Open the project rooted at `root`, parsing its manifest
    pub fn open(root: &Path) -> Result<Project, ProjectError> {
        let content = fs::read_to_string(root.join(MANIFEST_FILE))?;
        let manifest: Manifest = serde_yml::from_str(&content)?;
        Ok(Project {
            root: root.to_path_buf(),
            manifest,
        })
    }

    /// Create a new project at `root`, writing the manifest and inventory dir
    pub fn init(root: &Path, manifest: Manifest) -> Result<Project, ProjectError> {
        let manifest_path = root.join(MANIFEST_FILE);
        if manifest_path.exists() {
            return Err(ProjectError::AlreadyExists(root.to_path_buf()));
        }
        fs::create_dir_all(root)?;
        fs::write(&manifest_path, serde_yml::to_string(&manifest)?)?;
        fs::create_dir_all(root.join(&manifest.inventory_dir))?;
        Ok(Project {
            root: root.to_path_buf(),
            manifest,
        })
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the inventory directory
    pub fn inventory_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.inventory_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_open() {
        let tmp = tempfile::TempDir::new().unwrap();
        let project = Project::init(tmp.path(), Manifest::default()).unwrap();
        assert!(tmp.path().join(MANIFEST_FILE).is_file());
        assert!(project.inventory_dir().is_dir());

        let reopened = Project::open(tmp.path()).unwrap();
        assert_eq!(reopened.inventory_dir(), project.inventory_dir());
    }

    #[test]
    fn test_init_refuses_existing_project() {
        let tmp = tempfile::TempDir::new().unwrap();
        Project::init(tmp.path(), Manifest::default()).unwrap();
        let err = Project::init(tmp.path(), Manifest::default()).unwrap_err();
        assert!(matches!(err, ProjectError::AlreadyExists(_)));
    }

    #[test]
    fn test_discover_walks_up_ancestors() {
        let tmp = tempfile::TempDir::new().unwrap();
        Project::init(tmp.path(), Manifest::default()).unwrap();
        let nested = tmp.path().join("tires").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let project = Project::discover_from(&nested).unwrap();
        assert_eq!(project.root(), tmp.path());
    }

    #[test]
    fn test_discover_outside_project_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = Project::discover_from(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound));
    }
}
