use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scoregauge",
    version,
    about = "Score gauge rendering CLI for hosting HTML documents"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Render(RenderCommand),
    Spec(SpecCommand),
    Tier(TierCommand),
    AddField(AddFieldCommand),
}

#[derive(Args)]
pub struct RenderCommand {
    /// Hosting document, or a directory to search for one
    pub path: PathBuf,

    /// Score to visualize, nominally 0-100 (not clamped)
    #[arg(long)]
    pub score: f64,

    /// Target element id; defaults to [render].target, then the built-in id
    #[arg(long)]
    pub target: Option<String>,

    /// Write the mutated document here instead of stdout
    #[arg(long, conflicts_with = "in_place")]
    pub out: Option<PathBuf>,

    /// Rewrite the hosting document itself, recording a rollback manifest
    #[arg(long)]
    pub in_place: bool,
}

#[derive(Args)]
pub struct SpecCommand {
    /// Score to visualize, nominally 0-100 (not clamped)
    #[arg(long)]
    pub score: f64,

    /// Directory whose gauge.toml supplies theme overrides
    #[arg(long)]
    pub config_root: Option<PathBuf>,
}

#[derive(Args)]
pub struct TierCommand {
    /// Score to classify
    #[arg(long)]
    pub score: f64,
}

#[derive(Args)]
pub struct AddFieldCommand {}
