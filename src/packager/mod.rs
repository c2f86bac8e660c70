//! External packaging tool integration
//!
//! The packager is an opaque collaborator: the pipeline hands it a build
//! specification and explicit output paths, waits for it to exit, and
//! checks the status. Its internals (dependency scanning, freezing) are
//! none of our business, so the whole thing sits behind a narrow trait
//! and the subprocess backend is swappable.

pub mod subprocess;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use subprocess::SubprocessPackager;

/// Error types for packager invocation
#[derive(Debug, Error)]
pub enum PackagerError {
    #[error("failed to spawn packager `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("packager exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("packager timed out after {0} seconds")]
    Timeout(u64),
}

/// One packaging request: spec in, explicit output locations out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    /// Build-specification file for this application
    pub spec_path: PathBuf,

    /// Distribution path override passed to the packager
    pub dist_path: PathBuf,

    /// Work path override passed to the packager
    pub work_path: PathBuf,

    /// Directory the packager runs in
    pub project_root: PathBuf,
}

/// Trait for packager backends - allows for different implementations
#[async_trait]
pub trait PackagerBackend: Send + Sync {
    /// Run one packaging request to completion
    async fn package(&self, request: &PackageRequest) -> Result<(), PackagerError>;
}

/// Backends stay usable when shared behind `Arc`, so a caller can keep a
/// handle on the same backend the engine owns.
#[async_trait]
impl<P: PackagerBackend + ?Sized> PackagerBackend for std::sync::Arc<P> {
    async fn package(&self, request: &PackageRequest) -> Result<(), PackagerError> {
        self.as_ref().package(request).await
    }
}
