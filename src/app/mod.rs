mod layout;
mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::theme::iced_theme;
use iced::{Size, window};
use std::path::PathBuf;

/// Open the portfolio window.
pub fn run_app(config: AppConfig, config_path: PathBuf) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Portfolio", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| iced_theme(app.config.theme))
        .run_with(move || App::bootstrap(config, config_path))
}
