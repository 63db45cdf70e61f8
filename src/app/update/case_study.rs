use super::super::layout::impact_span;
use super::super::state::{App, IMPACT_REVEAL_FRACTION, sanitize_extent};
use super::Effect;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_project_scrolled(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        _effects: &mut Vec<Effect>,
    ) {
        self.reveal_impact(offset_y, viewport_height, Instant::now());
    }

    /// Start the impact count-up once enough of its block is on screen.
    pub(super) fn reveal_impact(&mut self, offset_y: f32, viewport_height: f32, now: Instant) {
        let Some(project) = self.route.project() else {
            return;
        };
        let Some((start, height)) =
            impact_span(project, self.config.font_size, self.viewport.width)
        else {
            return;
        };
        let visible_to = sanitize_extent(offset_y) + sanitize_extent(viewport_height);
        if visible_to < start + height * IMPACT_REVEAL_FRACTION {
            return;
        }
        if self.impact.start(now) {
            debug!(slug = project.slug, "Counting up impact figures");
        }
    }

    pub(super) fn advance_impact_counter(&mut self, now: Instant) {
        self.impact.advance(now);
    }
}
