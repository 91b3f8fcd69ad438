mod app_state;
mod cli;
mod logging;
mod snapshot;

use std::process::ExitCode;

use cli::Command;
use vox_config::VoxConfig;
use winit::event_loop::EventLoop;

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging so `logging.level` can seed the filter.
    let loaded = vox_config::load_config(args.config.as_deref());
    let configured_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    let (level, bad_level) = logging::resolve_level(args.log_level.as_deref(), configured_level);
    logging::init(level);

    if let Some(e) = bad_level {
        tracing::warn!("Ignoring --log-level: {e}");
    }
    tracing::info!("Vox v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        VoxConfig::default()
    });

    match args.command() {
        Command::Run { variant } => run(config, variant),
        Command::Snapshot(snap) => match snapshot::render(&config, &snap) {
            Ok(path) => {
                println!("{}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Snapshot failed: {e}");
                ExitCode::FAILURE
            }
        },
        Command::Config => {
            println!("{}", vox_config::config_to_json(&config));
            ExitCode::SUCCESS
        }
    }
}

fn run(config: VoxConfig, variant: Option<vox_config::Variant>) -> ExitCode {
    let variant = variant.unwrap_or(config.visual.variant);
    tracing::info!(%variant, "Starting window");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::VoxApp::new(config, variant);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
