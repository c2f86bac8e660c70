//! Project layout resolution
//!
//! Every other path in the pipeline hangs off `project_root`, so this is
//! the first thing a run computes. The root is either passed in explicitly
//! (`--root`) or derived from the location of the running executable -
//! never from the process working directory, so the tool behaves the same
//! no matter where it is invoked from.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the directory holding per-application sources
pub const SOURCE_DIR_NAME: &str = "SRC";

/// Name of the shared configuration directory under `SRC`
pub const GENERAL_DIR_NAME: &str = "GENERAL";

/// Error types for layout resolution
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("cannot determine the pipeline executable location: {0}")]
    ExeLocation(#[source] std::io::Error),

    #[error("executable path {0} has no parent directory")]
    NoParent(PathBuf),

    #[error("project root {path} is not usable: {source}")]
    BadRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved top-level directories of the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Absolute, normalized project root
    pub project_root: PathBuf,

    /// `<project_root>/SRC`
    pub source_dir: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout, preferring an explicit root over the default
    /// derived from the executable location.
    pub fn resolve(root_override: Option<&Path>) -> Result<Self, LayoutError> {
        let root = match root_override {
            Some(path) => path.canonicalize().map_err(|e| LayoutError::BadRoot {
                path: path.to_path_buf(),
                source: e,
            })?,
            None => Self::default_root()?,
        };
        Ok(Self::at_root(root))
    }

    /// Build a layout rooted at a known directory. Pure - no I/O.
    pub fn at_root(project_root: PathBuf) -> Self {
        let source_dir = project_root.join(SOURCE_DIR_NAME);
        Self {
            project_root,
            source_dir,
        }
    }

    /// The shared configuration directory, `SRC/GENERAL`
    pub fn general_dir(&self) -> PathBuf {
        self.source_dir.join(GENERAL_DIR_NAME)
    }

    /// Default root: one level above the directory containing the
    /// running executable.
    fn default_root() -> Result<PathBuf, LayoutError> {
        let exe = std::env::current_exe()
            .and_then(|p| p.canonicalize())
            .map_err(LayoutError::ExeLocation)?;
        let bin_dir = exe
            .parent()
            .ok_or_else(|| LayoutError::NoParent(exe.clone()))?;
        let root = bin_dir
            .parent()
            .ok_or_else(|| LayoutError::NoParent(bin_dir.to_path_buf()))?;
        Ok(root.to_path_buf())
    }
}
