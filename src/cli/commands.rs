//! CLI command definitions

use clap::Args;

/// Build one or all application bundles
#[derive(Debug, Args, Clone)]
pub struct BuildCommand {
    /// Application id to build (e.g. "digest", "sync")
    #[arg(short, long)]
    pub app: Option<String>,

    /// Build every application in the manifest
    #[arg(long)]
    pub all: bool,

    /// Packager program to invoke (default "pyinstaller")
    #[arg(long)]
    pub packager: Option<String>,

    /// Packager timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Output the build report in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Show the resolved layout and derived output locations without building
#[derive(Debug, Args, Clone)]
pub struct PlanCommand {
    /// Application id to plan for (all apps when omitted)
    #[arg(short, long)]
    pub app: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Remove stale distribution and work directories
#[derive(Debug, Args, Clone)]
pub struct CleanCommand {
    /// Application id to clean (all apps when omitted)
    #[arg(short, long)]
    pub app: Option<String>,
}

/// List the applications the pipeline knows about
#[derive(Debug, Args, Clone)]
pub struct AppsCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
