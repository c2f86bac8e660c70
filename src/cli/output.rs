//! CLI output formatting

use crate::core::{plan::BuildPlan, state::RunPhase, AppSpec};
use crate::execution::BuildEvent;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SPINNER: Emoji<'_, '_> = Emoji("⏳ ", "~ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static BROOM: Emoji<'_, '_> = Emoji("🧹 ", "- ");
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "> ");

/// Format a run phase for display
pub fn format_phase(phase: RunPhase) -> String {
    match phase {
        RunPhase::Start => style("START").dim().to_string(),
        RunPhase::PathsResolved => style("PATHS_RESOLVED").cyan().to_string(),
        RunPhase::Cleaned => style("CLEANED").cyan().to_string(),
        RunPhase::Packaged => style("PACKAGED").cyan().to_string(),
        RunPhase::ConfigsStaged => style("CONFIGS_STAGED").cyan().to_string(),
        RunPhase::Reported => style("REPORTED").green().to_string(),
        RunPhase::Aborted => style("ABORTED").red().to_string(),
    }
}

/// Format a build event for display
pub fn format_build_event(event: &BuildEvent) -> String {
    match event {
        BuildEvent::RunStarted { run_id, app_id } => format!(
            "{} Building {} ({})",
            PACKAGE,
            style(app_id).bold(),
            style(&run_id.to_string()[..8]).dim()
        ),
        BuildEvent::StaleRemoved { path } => format!(
            "{} Removed stale {}",
            BROOM,
            style(path.display()).dim()
        ),
        BuildEvent::PackagerStarted { spec_path } => format!(
            "{} Packaging from {}",
            SPINNER,
            style(spec_path.display()).cyan()
        ),
        BuildEvent::PackagerFinished => {
            format!("{} Packager finished", CHECK)
        }
        BuildEvent::ConfigStaged { name } => {
            format!("{} Staged {}", CHECK, style(name).cyan())
        }
        BuildEvent::RunCompleted { output_dir, .. } => format!(
            "{} Bundle ready: {}",
            CHECK,
            style(output_dir.display()).green()
        ),
        BuildEvent::RunAborted { phase, error, .. } => format!(
            "{} Aborted in {}: {}",
            CROSS,
            format_phase(*phase),
            style(error).red()
        ),
    }
}

/// Format one application's plan for display
pub fn format_plan(app: &AppSpec, plan: &BuildPlan) -> String {
    format!(
        "{} {}\n  spec:   {}\n  dist:   {}\n  work:   {}\n  bundle: {}\n  configs: {}",
        INFO,
        style(&app.id).bold(),
        plan.spec_path.display(),
        plan.dist_root.display(),
        plan.work_dir.display(),
        plan.output_dir.display(),
        style(app.configs.join(", ")).dim()
    )
}
