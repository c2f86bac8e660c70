//! Stale-artifact removal
//!
//! The packager may leave partial or renamed executables from prior runs
//! that staging would otherwise pick up. Removing the distribution and
//! work roots up front is what guarantees the final bundle only ever
//! contains artifacts from one build.

use crate::core::plan::BuildPlan;
use crate::execution::BuildError;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Remove the distribution and work roots if they exist.
///
/// Absence is success, not an error; anything else (locked files,
/// permissions) is fatal, since continuing would risk mixing old and new
/// artifacts. Returns the directories that were actually removed.
pub fn remove_stale(plan: &BuildPlan) -> Result<Vec<PathBuf>, BuildError> {
    let mut removed = Vec::new();

    for dir in [&plan.dist_root, &plan.work_dir] {
        match std::fs::remove_dir_all(dir) {
            Ok(()) => {
                debug!("removed stale directory {}", dir.display());
                removed.push(dir.clone());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(BuildError::Clean {
                    path: dir.clone(),
                    source: e,
                })
            }
        }
    }

    Ok(removed)
}
