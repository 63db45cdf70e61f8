use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use folio_core::NavigationConfig;
use serde::{Deserialize, Serialize};

/// On-disk layout of the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    navigation: NavigationTable,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            font_size: tables.appearance.font_size,
            navigation: tables.navigation.scroll.sanitized(),
            show_contact_in_nav: tables.navigation.show_contact_in_nav,
            window_width: tables.window.width,
            window_height: tables.window.height,
            log_level: tables.logging.log_level,
            key_toggle_theme: tables.keys.theme,
            key_quit: tables.keys.quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                font_size: config.font_size,
            },
            navigation: NavigationTable {
                scroll: config.navigation,
                show_contact_in_nav: config.show_contact_in_nav,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                theme: config.key_toggle_theme.clone(),
                quit: config.key_quit.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_font_size")]
    font_size: u32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            font_size: defaults::default_font_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct NavigationTable {
    #[serde(flatten)]
    scroll: NavigationConfig,
    #[serde(default = "defaults::default_show_contact_in_nav")]
    show_contact_in_nav: bool,
}

impl Default for NavigationTable {
    fn default() -> Self {
        NavigationTable {
            scroll: defaults::default_navigation(),
            show_contact_in_nav: defaults::default_show_contact_in_nav(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_theme")]
    theme: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            theme: defaults::default_key_toggle_theme(),
            quit: defaults::default_key_quit(),
        }
    }
}
