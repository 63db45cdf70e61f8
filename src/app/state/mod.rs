mod constants;
mod ui;

use super::layout::build_layout;
use super::messages::Message;
use crate::config::AppConfig;
use folio_core::{ScrollAnimationRegistry, ScrollNavigator, SectionId, SectionLayout, TriggerRange};
use iced::Task;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub(crate) use constants::*;
pub use ui::Route;
pub(in crate::app) use ui::{ImpactCounter, ViewportState, sanitize_extent};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) config_path: PathBuf,
    pub(super) route: Route,
    pub(super) viewport: ViewportState,
    pub(super) layout: SectionLayout,
    pub(super) navigator: ScrollNavigator,
    pub(super) animations: ScrollAnimationRegistry,
    pub(super) impact: ImpactCounter,
}

impl App {
    pub fn bootstrap(mut config: AppConfig, config_path: PathBuf) -> (App, Task<Message>) {
        config.font_size = config.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        let viewport =
            ViewportState::estimated(config.window_width, config.window_height, WINDOW_CHROME_PX);
        let layout = match build_layout(config.font_size, viewport.width, viewport.height) {
            Ok(layout) => layout,
            Err(err) => {
                warn!("Falling back to a single-section layout: {err}");
                SectionLayout::single(SectionId::Home, viewport.height)
            }
        };

        let mut app = App {
            navigator: ScrollNavigator::new(config.navigation),
            config,
            config_path,
            route: Route::Home,
            viewport,
            layout,
            animations: entrance_animations(),
            impact: ImpactCounter::default(),
        };
        app.sample_scroll_position();

        info!(
            sections = app.layout.sections().len(),
            document_end = app.layout.document_end(),
            animations = app.animations.len(),
            "Initialized portfolio page"
        );
        (app, Task::none())
    }

    /// Rebuild the section layout from the current viewport and font size.
    ///
    /// An in-flight programmatic scroll keeps its destination.
    pub(super) fn relayout(&mut self) {
        match build_layout(self.config.font_size, self.viewport.width, self.viewport.height) {
            Ok(layout) => {
                debug!(
                    width = self.viewport.width,
                    height = self.viewport.height,
                    document_end = layout.document_end(),
                    "Recomputed section layout"
                );
                self.layout = layout;
            }
            Err(err) => warn!("Keeping previous section layout: {err}"),
        }
    }

    /// Refresh the active section and scroll-linked animations from the stored offset.
    pub(super) fn sample_scroll_position(&mut self) {
        let scroll_y = self.viewport.scroll_y;
        let height = self.viewport.height;
        self.navigator.sample_scroll(scroll_y, height, &self.layout);
        self.animations.sample(scroll_y, height, &self.layout);
    }

    pub(super) fn active_section(&self) -> Option<SectionId> {
        self.navigator.active_section()
    }

    /// Sections listed in the navbar, in page order.
    pub(super) fn nav_entries(&self) -> Vec<SectionId> {
        self.layout
            .ids()
            .filter(|id| *id != SectionId::Contact || self.config.show_contact_in_nav)
            .collect()
    }
}

fn entrance_animations() -> ScrollAnimationRegistry {
    let mut registry = ScrollAnimationRegistry::new();
    for entrance in ENTRANCE_ANIMATIONS {
        match TriggerRange::parse(entrance.start, entrance.end) {
            Ok(range) => {
                registry.register(entrance.section, range, entrance.easing);
            }
            Err(err) => warn!(
                section = %entrance.section,
                start = entrance.start,
                end = entrance.end,
                "Skipping entrance animation: {err}"
            ),
        }
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_registers_every_entrance_animation() {
        let (app, _task) = App::bootstrap(AppConfig::default(), PathBuf::from("unused.toml"));
        assert_eq!(app.animations.len(), ENTRANCE_ANIMATIONS.len());
        assert_eq!(app.animations.enabled_count(), ENTRANCE_ANIMATIONS.len());
        assert_eq!(app.active_section(), Some(SectionId::Home));
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn contact_is_listed_only_when_enabled() {
        let (app, _task) = App::bootstrap(AppConfig::default(), PathBuf::from("unused.toml"));
        assert!(!app.nav_entries().contains(&SectionId::Contact));

        let config = AppConfig {
            show_contact_in_nav: true,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(config, PathBuf::from("unused.toml"));
        assert_eq!(app.nav_entries(), SectionId::ALL.to_vec());
    }

    #[test]
    fn bootstrap_clamps_font_size() {
        let config = AppConfig {
            font_size: 400,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(config, PathBuf::from("unused.toml"));
        assert_eq!(app.config.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn bootstrap_viewport_leaves_room_for_chrome() {
        let config = AppConfig {
            window_height: 900.0,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(config, PathBuf::from("unused.toml"));
        assert_eq!(app.viewport.height, 900.0 - WINDOW_CHROME_PX);
    }
}
