//! Main execution engine - orchestrates one build run from clean to report

use crate::{
    core::{run::BuildRun, state::RunPhase},
    execution::{cleaner, stager, BuildError},
    packager::{PackageRequest, PackagerBackend},
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{error, info};
use uuid::Uuid;

/// Events that can occur during a build run
#[derive(Debug, Clone)]
pub enum BuildEvent {
    RunStarted {
        run_id: Uuid,
        app_id: String,
    },
    StaleRemoved {
        path: PathBuf,
    },
    PackagerStarted {
        spec_path: PathBuf,
    },
    PackagerFinished,
    ConfigStaged {
        name: String,
    },
    RunCompleted {
        run_id: Uuid,
        output_dir: PathBuf,
    },
    RunAborted {
        run_id: Uuid,
        phase: RunPhase,
        error: String,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(BuildEvent) + Send + Sync>;

/// Terminal result of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub run_id: Uuid,
    pub app_id: String,
    /// Final bundle directory - the pipeline's reported result
    pub output_dir: PathBuf,
    pub staged_configs: Vec<PathBuf>,
}

/// Build execution engine
///
/// Control flow is strictly sequential: clean, invoke the packager (which
/// must succeed before anything else happens), stage configs, report. Any
/// failure aborts the run with no partial-success state.
pub struct BuildEngine<P> {
    packager: Arc<P>,
    event_handlers: Mutex<Vec<EventHandler>>,
}

impl<P: PackagerBackend + Send + Sync + 'static> BuildEngine<P> {
    pub fn new(packager: P) -> Self {
        Self {
            packager: Arc::new(packager),
            event_handlers: Mutex::new(Vec::new()),
        }
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&self, handler: F)
    where
        F: Fn(BuildEvent) + Send + Sync + 'static,
    {
        self.event_handlers
            .lock()
            .expect("event handler lock poisoned")
            .push(Arc::new(handler));
    }

    /// Emit an event to all handlers
    fn emit(&self, event: BuildEvent) {
        let handlers = self
            .event_handlers
            .lock()
            .expect("event handler lock poisoned");
        for handler in handlers.iter() {
            handler(event.clone());
        }
    }

    /// Execute one build run
    pub async fn execute(&self, run: &mut BuildRun) -> Result<BuildReport, BuildError> {
        let run_id = run.state.run_id;
        info!("Starting build run for {} ({})", run.app.id, run_id);

        run.state.start();
        self.emit(BuildEvent::RunStarted {
            run_id,
            app_id: run.app.id.clone(),
        });

        // Clean stale artifacts from previous runs
        let removed = match cleaner::remove_stale(&run.plan) {
            Ok(removed) => removed,
            Err(e) => return self.abort(run, e),
        };
        for path in removed {
            self.emit(BuildEvent::StaleRemoved { path });
        }
        run.state.advance(RunPhase::Cleaned);

        // Invoke the packager; nothing downstream runs if it fails
        self.emit(BuildEvent::PackagerStarted {
            spec_path: run.plan.spec_path.clone(),
        });
        let request = PackageRequest {
            spec_path: run.plan.spec_path.clone(),
            dist_path: run.plan.dist_root.clone(),
            work_path: run.plan.work_dir.clone(),
            project_root: run.project_root.clone(),
        };
        if let Err(e) = self.packager.package(&request).await {
            return self.abort(run, e.into());
        }
        self.emit(BuildEvent::PackagerFinished);
        run.state.advance(RunPhase::Packaged);

        // Stage configs next to the produced executable
        let staged = match stager::stage_configs(
            &run.general_dir,
            &run.app.configs,
            &run.plan.output_dir,
        ) {
            Ok(staged) => staged,
            Err(e) => return self.abort(run, e),
        };
        for path in &staged {
            if let Some(name) = path.file_name() {
                self.emit(BuildEvent::ConfigStaged {
                    name: name.to_string_lossy().into_owned(),
                });
            }
        }
        run.state.advance(RunPhase::ConfigsStaged);

        // Report the final bundle location
        run.state.advance(RunPhase::Reported);
        info!(
            "Build run for {} finished: {}",
            run.app.id,
            run.plan.output_dir.display()
        );
        self.emit(BuildEvent::RunCompleted {
            run_id,
            output_dir: run.plan.output_dir.clone(),
        });

        Ok(BuildReport {
            run_id,
            app_id: run.app.id.clone(),
            output_dir: run.plan.output_dir.clone(),
            staged_configs: staged,
        })
    }

    /// Mark the run aborted and propagate the failure
    fn abort(&self, run: &mut BuildRun, err: BuildError) -> Result<BuildReport, BuildError> {
        let failed_in = run.state.phase;
        run.state.abort();
        error!("Build run for {} aborted: {}", run.app.id, err);
        self.emit(BuildEvent::RunAborted {
            run_id: run.state.run_id,
            phase: failed_in,
            error: err.to_string(),
        });
        Err(err)
    }
}
