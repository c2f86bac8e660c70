//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{AppsCommand, BuildCommand, CleanCommand, PlanCommand};
use std::path::PathBuf;

/// Build-and-stage tool for distributable application bundles
#[derive(Debug, Parser, Clone)]
#[command(name = "distkit")]
#[command(version = "0.1.0")]
#[command(about = "Freezes applications into distributable bundles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root override (defaults to one level above this executable)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Bundle manifest path (defaults to the built-in digest/sync table)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build application bundles
    Build(BuildCommand),

    /// Show resolved paths without building
    Plan(PlanCommand),

    /// Remove stale build output
    Clean(CleanCommand),

    /// List known applications
    Apps(AppsCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;
