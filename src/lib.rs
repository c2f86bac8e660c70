//! distkit - build-and-stage pipeline for distributable application bundles

pub mod cli;
pub mod core;
pub mod execution;
pub mod packager;

// Re-export commonly used types
pub use crate::core::{AppSpec, BuildPlan, BuildRun, BundleManifest, ProjectLayout, RunPhase};
pub use execution::{BuildEngine, BuildError, BuildEvent, BuildReport};
pub use packager::{PackageRequest, PackagerBackend, PackagerError, SubprocessPackager};
