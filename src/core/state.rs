//! Run state models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Phase of a single build run
///
/// Runs move strictly forward:
/// `Start -> PathsResolved -> Cleaned -> Packaged -> ConfigsStaged -> Reported`.
/// `Aborted` is reachable from any fatal step and is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Run constructed, nothing done yet
    Start,
    /// Project layout and build plan computed
    PathsResolved,
    /// Stale distribution and work directories removed
    Cleaned,
    /// Packager subprocess exited successfully
    Packaged,
    /// Config files copied next to the executable
    ConfigsStaged,
    /// Final bundle path reported to the invoker
    Reported,
    /// A fatal step aborted the run
    Aborted,
}

impl RunPhase {
    /// Check if the phase is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunPhase::Reported | RunPhase::Aborted)
    }
}

/// State of one build run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Unique run ID
    pub run_id: Uuid,

    /// Current phase
    pub phase: RunPhase,

    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run reached a terminal phase
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            phase: RunPhase::Start,
            started_at: None,
            finished_at: None,
        }
    }

    /// Mark the run as started with its paths resolved
    pub fn start(&mut self) {
        self.started_at = Some(Utc::now());
        self.phase = RunPhase::PathsResolved;
    }

    /// Advance to the next phase
    pub fn advance(&mut self, phase: RunPhase) {
        self.phase = phase;
        if phase.is_terminal() {
            self.finished_at = Some(Utc::now());
        }
    }

    /// Mark the run as aborted
    pub fn abort(&mut self) {
        self.advance(RunPhase::Aborted);
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
