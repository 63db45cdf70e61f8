//! Configuration loading for the portfolio viewer.
//!
//! Settings live in `conf/config.toml` unless another path is given on the
//! command line. Missing or invalid entries fall back to defaults so the
//! window always opens.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, save_config};
pub use models::{AppConfig, LogLevel, ThemeMode};

pub const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
