//! Output location planning
//!
//! Pure derivation of the per-run directories: nothing here touches the
//! filesystem, and identical inputs always yield identical paths.

use crate::core::{app::AppSpec, layout::ProjectLayout};
use serde::Serialize;
use std::path::PathBuf;

/// Derived filesystem locations for one application's build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    /// Build-specification file handed to the packager
    pub spec_path: PathBuf,

    /// Distribution root for this app, `<root>/dist_<id>`
    pub dist_root: PathBuf,

    /// Packager scratch directory, `<root>/build_<id>`.
    /// Per-app so that concurrent digest/sync runs never share state.
    pub work_dir: PathBuf,

    /// Final bundle directory, `<dist_root>/<executable>`
    pub output_dir: PathBuf,
}

impl BuildPlan {
    pub fn new(layout: &ProjectLayout, app: &AppSpec) -> Self {
        let root = &layout.project_root;
        let dist_root = root.join(format!("dist_{}", app.id));
        let work_dir = root.join(format!("build_{}", app.id));
        let output_dir = dist_root.join(&app.executable);
        Self {
            spec_path: root.join(&app.spec_file),
            dist_root,
            work_dir,
            output_dir,
        }
    }
}
