use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vox_config::Variant;

/// Vox: animated 3D point-cloud and sphere visuals.
#[derive(Parser, Debug)]
#[command(name = "vox", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a window and run the visual (default).
    Run {
        /// Variant to start with; defaults to `visual.variant` from config.
        #[arg(long)]
        variant: Option<Variant>,
    },
    /// Render a single frame offscreen and write it as PNG.
    Snapshot(SnapshotArgs),
    /// Print the effective configuration as JSON.
    Config,
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct SnapshotArgs {
    #[arg(long, default_value = "blob")]
    pub variant: Variant,

    /// Seconds since mount at which the frame is taken.
    #[arg(long, default_value_t = 1.0)]
    pub time: f64,

    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    #[arg(long, default_value = "vox.png")]
    pub out: PathBuf,
}

impl Args {
    /// The subcommand to run, `run` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Run { variant: None })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
