use anyhow::{Context, Result};
use distkit::cli::commands::{AppsCommand, BuildCommand, CleanCommand, PlanCommand};
use distkit::cli::output::*;
use distkit::cli::{Cli, Command};
use distkit::core::{AppSpec, BuildPlan, BuildRun, BundleManifest, ProjectLayout};
use distkit::execution::{cleaner, BuildEngine};
use distkit::packager::subprocess::{DEFAULT_PROGRAM, DEFAULT_TIMEOUT_SECS};
use distkit::SubprocessPackager;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Build(cmd) => run_build(cmd, &cli).await?,
        Command::Plan(cmd) => show_plan(cmd, &cli)?,
        Command::Clean(cmd) => run_clean(cmd, &cli)?,
        Command::Apps(cmd) => list_apps(cmd, &cli)?,
    }

    Ok(())
}

/// Load the manifest named on the command line, or the built-in table
fn load_manifest(cli: &Cli) -> Result<BundleManifest> {
    match &cli.manifest {
        Some(path) => BundleManifest::from_file(path)
            .with_context(|| format!("Failed to load manifest {}", path.display())),
        None => Ok(BundleManifest::builtin()),
    }
}

/// Select the applications a command applies to
fn select_apps(
    manifest: &BundleManifest,
    app: Option<&str>,
    default_all: bool,
) -> Result<Vec<AppSpec>> {
    match app {
        Some(id) => {
            let app = manifest
                .app(id)
                .with_context(|| format!("Unknown application '{}'", id))?;
            Ok(vec![app])
        }
        None if default_all => Ok(manifest.to_apps()),
        None => anyhow::bail!("Specify an application with --app, or use --all"),
    }
}

async fn run_build(cmd: &BuildCommand, cli: &Cli) -> Result<()> {
    let layout = ProjectLayout::resolve(cli.root.as_deref())?;
    let manifest = load_manifest(cli)?;
    let apps = select_apps(&manifest, cmd.app.as_deref(), cmd.all)?;

    let packager_cfg = manifest.packager.as_ref();
    let program = cmd
        .packager
        .clone()
        .or_else(|| packager_cfg.and_then(|p| p.program.clone()))
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
    let timeout_secs = cmd
        .timeout_secs
        .or_else(|| packager_cfg.and_then(|p| p.timeout_secs))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let engine = BuildEngine::new(SubprocessPackager::new(program, timeout_secs));
    engine.add_event_handler(|event| {
        println!("{}", format_build_event(&event));
    });

    let mut reports = Vec::new();
    for app in apps {
        let mut run = BuildRun::new(&layout, app);

        println!();
        match engine.execute(&mut run).await {
            Ok(report) => {
                if cmd.json {
                    reports.push(report);
                } else {
                    // The bundle path is the pipeline's terminal result
                    println!("{}", report.output_dir.display());
                }
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    // One JSON document covering every built app
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

fn show_plan(cmd: &PlanCommand, cli: &Cli) -> Result<()> {
    let layout = ProjectLayout::resolve(cli.root.as_deref())?;
    let manifest = load_manifest(cli)?;
    let apps = select_apps(&manifest, cmd.app.as_deref(), true)?;

    if cmd.json {
        let plans: Vec<serde_json::Value> = apps
            .iter()
            .map(|app| {
                serde_json::json!({
                    "app": app,
                    "plan": BuildPlan::new(&layout, app),
                })
            })
            .collect();
        let data = serde_json::json!({
            "project_root": layout.project_root,
            "source_dir": layout.source_dir,
            "plans": plans,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!(
        "{} Project root: {}",
        INFO,
        style(layout.project_root.display()).bold()
    );
    for app in &apps {
        let plan = BuildPlan::new(&layout, app);
        println!("{}", format_plan(app, &plan));
    }

    Ok(())
}

fn run_clean(cmd: &CleanCommand, cli: &Cli) -> Result<()> {
    let layout = ProjectLayout::resolve(cli.root.as_deref())?;
    let manifest = load_manifest(cli)?;
    let apps = select_apps(&manifest, cmd.app.as_deref(), true)?;

    for app in &apps {
        let plan = BuildPlan::new(&layout, app);
        let removed = cleaner::remove_stale(&plan)?;
        if removed.is_empty() {
            println!("{} {} already clean", INFO, style(&app.id).bold());
        }
        for path in removed {
            println!("{} Removed {}", BROOM, style(path.display()).dim());
        }
    }

    Ok(())
}

fn list_apps(cmd: &AppsCommand, cli: &Cli) -> Result<()> {
    let manifest = load_manifest(cli)?;
    let apps = manifest.to_apps();

    if cmd.json {
        let data = serde_json::json!({ "apps": apps });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    for app in &apps {
        println!(
            "  {} -> {} ({} configs)",
            style(&app.id).bold(),
            style(&app.executable).cyan(),
            app.configs.len()
        );
    }

    Ok(())
}
