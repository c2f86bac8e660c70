//! Pipeline execution: clean, package, stage, report

pub mod cleaner;
pub mod engine;
pub mod stager;

use crate::packager::PackagerError;
use std::path::PathBuf;
use thiserror::Error;

pub use engine::{BuildEngine, BuildEvent, BuildReport};

/// Error types for a build run
///
/// Every variant is fatal: the run aborts, nothing downstream executes,
/// and there is no partial-success state.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to remove stale directory {path}: {source}")]
    Clean {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Packager(#[from] PackagerError),

    #[error("required config file missing: {path}")]
    MissingConfig { path: PathBuf },

    #[error("output directory {path} was not produced by the packager")]
    MissingOutputDir { path: PathBuf },

    #[error("failed to stage {name} into {dest}: {source}")]
    Stage {
        name: String,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
