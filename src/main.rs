//! Entry point for the portfolio viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse the optional config path from the command line.
//! - Load user configuration (default `conf/config.toml`).
//! - Launch the GUI with the loaded config.

mod app;
mod config;
mod content;
mod theme;

use crate::app::run_app;
use crate::config::{DEFAULT_CONFIG_PATH, load_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config_path = parse_args(env::args().skip(1))?;
    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        path = %config_path.display(),
        level = %config.log_level,
        theme = %config.theme,
        "Starting portfolio viewer"
    );
    info!(
        clearance = config.navigation.header_clearance_px,
        duration_secs = config.navigation.scroll_duration_secs,
        easing = %config.navigation.scroll_easing,
        trailing_margin = config.navigation.trailing_margin_px,
        end_sentinel = ?config.navigation.end_sentinel,
        auto_kill = config.navigation.auto_kill,
        "Active navigation configuration"
    );
    run_app(config, config_path).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<PathBuf> {
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    if args.next().is_some() {
        return Err(anyhow!("Usage: folio-viewer [config-path]"));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    info!("Logging initialized; override level with log_level in the config or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    if env::var_os("RUST_LOG").is_some() {
        info!("RUST_LOG is set; ignoring configured log level");
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
