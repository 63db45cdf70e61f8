use super::super::state::{App, WINDOW_CHROME_PX, sanitize_extent};
use super::Effect;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = %self.config.theme, "Toggled theme");
        effects.push(Effect::SaveConfig);
    }

    /// Track the window size for the next save and relayout from an estimate
    /// until the scrollable reports its real viewport.
    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        _effects: &mut Vec<Effect>,
    ) {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.config.window_width = width;
        self.config.window_height = height;
        self.viewport.width = sanitize_extent(width);
        self.viewport.height = sanitize_extent(height - WINDOW_CHROME_PX);
        debug!(width, height, "Window resized");
        self.relayout();
        self.sample_scroll_position();
    }
}
