//! Build run domain model

use crate::core::{
    app::AppSpec,
    layout::ProjectLayout,
    plan::BuildPlan,
    state::RunState,
};
use std::path::PathBuf;

/// A single execution of one application's build pipeline
///
/// Constructed with its paths fully resolved; consumed by the engine
/// within one execution. Nothing persists across runs except the
/// filesystem artifacts the run produces.
#[derive(Debug, Clone)]
pub struct BuildRun {
    /// The application being bundled
    pub app: AppSpec,

    /// Project root the packager runs in
    pub project_root: PathBuf,

    /// Derived output locations for this run
    pub plan: BuildPlan,

    /// Shared configuration directory, `SRC/GENERAL`
    pub general_dir: PathBuf,

    /// Run state
    pub state: RunState,
}

impl BuildRun {
    pub fn new(layout: &ProjectLayout, app: AppSpec) -> Self {
        let plan = BuildPlan::new(layout, &app);
        Self {
            app,
            project_root: layout.project_root.clone(),
            plan,
            general_dir: layout.general_dir(),
            state: RunState::new(),
        }
    }
}
