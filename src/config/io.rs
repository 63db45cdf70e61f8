use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str::<ConfigTables>(contents).map(AppConfig::from)
}

pub fn serialize_config(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string(&ConfigTables::from(config))
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let contents = serialize_config(config).context("failed to serialize config")?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), "Saved config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};
    use folio_core::{Easing, EndSentinel};

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert!(!config.show_contact_in_nav);
        assert_eq!(config.navigation.header_clearance_px, 80.0);
    }

    #[test]
    fn reads_nested_tables() {
        let raw = r#"
            [appearance]
            theme = "day"

            [navigation]
            header_clearance_px = 64.0
            scroll_easing = "power2-out"
            end_sentinel = "contact"
            show_contact_in_nav = true

            [logging]
            log_level = "trace"

            [keys]
            quit = "ctrl+q"
        "#;
        let config = parse_config(raw).expect("config parses");
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.navigation.header_clearance_px, 64.0);
        assert_eq!(config.navigation.scroll_easing, Easing::Power2Out);
        assert_eq!(config.navigation.end_sentinel, EndSentinel::Contact);
        assert_eq!(config.navigation.trailing_margin_px, 100.0);
        assert!(config.show_contact_in_nav);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.key_quit, "ctrl+q");
        assert_eq!(config.key_toggle_theme, "t");
    }

    #[test]
    fn out_of_range_navigation_values_are_clamped() {
        let raw = r#"
            [navigation]
            scroll_duration_secs = -3.0
            probe_fraction = 7.0
        "#;
        let config = parse_config(raw).expect("config parses");
        assert!(config.navigation.scroll_duration_secs >= 0.0);
        assert!(config.navigation.probe_fraction <= 1.0);
    }

    #[test]
    fn serialized_config_reads_back() {
        let mut config = AppConfig::default();
        config.theme = ThemeMode::Day;
        config.window_width = 1440.0;
        config.navigation.auto_kill = false;
        let raw = serialize_config(&config).expect("serializes");
        assert!(raw.contains("[navigation]"));
        assert_eq!(parse_config(&raw).expect("parses"), config);
    }

    #[test]
    fn shipped_config_parses() {
        let config = parse_config(include_str!("../../conf/config.toml")).expect("sample parses");
        assert_eq!(config.navigation.end_sentinel, EndSentinel::None);
        assert_eq!(config.navigation.scroll_easing, Easing::Power3InOut);
        assert_eq!(config.window_width, 1280.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "folio-viewer-missing-{}.toml",
            std::process::id()
        ));
        assert_eq!(load_config(&path), AppConfig::default());
    }
}
