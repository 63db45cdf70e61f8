use super::models::LogLevel;
use folio_core::NavigationConfig;

pub(crate) fn default_font_size() -> u32 {
    18
}

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Info
}

pub(crate) fn default_show_contact_in_nav() -> bool {
    false
}

pub(crate) fn default_navigation() -> NavigationConfig {
    NavigationConfig::default()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}
