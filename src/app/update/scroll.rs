use super::super::state::{App, RELAYOUT_THRESHOLD_PX, Route, sanitize_extent};
use super::Effect;
use folio_core::scroll_progress;
use std::time::Instant;
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
        _effects: &mut Vec<Effect>,
    ) {
        if self.route != Route::Home {
            return;
        }
        let offset_y = sanitize_extent(offset_y);
        let resized =
            self.viewport
                .size_differs(viewport_width, viewport_height, RELAYOUT_THRESHOLD_PX);

        self.viewport.scroll_y = offset_y;
        self.viewport.width = sanitize_extent(viewport_width);
        self.viewport.height = sanitize_extent(viewport_height);
        self.viewport.content_height = sanitize_extent(content_height);

        if self.navigator.observe_scroll(offset_y, &mut self.animations) {
            debug!(offset_y, "Programmatic scroll handed back to the user");
        }
        if resized {
            self.relayout();
        }
        self.sample_scroll_position();
        trace!(
            offset_y,
            active = ?self.active_section(),
            "Scroll sample"
        );
    }

    /// Advance an in-flight programmatic scroll by one frame.
    pub(super) fn handle_frame(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(step) = self.navigator.tick(now, &mut self.animations) else {
            return;
        };
        self.viewport.scroll_y = step.offset;
        self.sample_scroll_position();
        effects.push(Effect::ScrollTo(step.offset));
    }

    /// Share of the page already scrolled past, in percent.
    pub(in crate::app) fn page_progress(&self) -> f32 {
        let document_end = if self.viewport.content_height > 0.0 {
            self.viewport.content_height
        } else {
            self.layout.document_end()
        };
        scroll_progress(self.viewport.scroll_y, document_end, self.viewport.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use folio_core::{EndSentinel, SectionId};
    use std::path::PathBuf;
    use std::time::Duration;

    fn build_test_app() -> App {
        let config = AppConfig {
            window_width: 1280.0,
            window_height: 960.0,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(config, PathBuf::from("unused.toml"));
        app
    }

    fn scroll(app: &mut App, offset_y: f32) {
        let (width, height) = (app.viewport.width, app.viewport.height);
        let content = app.layout.document_end();
        app.handle_scrolled(offset_y, width, height, content, &mut Vec::new());
    }

    fn start_of(app: &App, id: SectionId) -> f32 {
        app.layout.get(id).expect("section in layout").start_offset
    }

    #[test]
    fn scrolling_into_a_section_highlights_it() {
        let mut app = build_test_app();
        let work_start = start_of(&app, SectionId::Work);
        // The probe sits a third of the viewport below the offset.
        let target = work_start.max(app.viewport.height) + 10.0;
        scroll(&mut app, target);
        assert_eq!(app.active_section(), Some(SectionId::Work));

        scroll(&mut app, 0.0);
        assert_eq!(app.active_section(), Some(SectionId::Home));
    }

    #[test]
    fn scrolling_reveals_entrance_animations() {
        let mut app = build_test_app();
        let before = app.animations.progress_for(SectionId::Projects);
        let projects_start = start_of(&app, SectionId::Projects);
        scroll(&mut app, projects_start);
        assert!(app.animations.progress_for(SectionId::Projects) > before);
        assert_eq!(app.animations.progress_for(SectionId::Work), 1.0);
    }

    #[test]
    fn bottom_of_the_page_reports_the_end_sentinel() {
        for (sentinel, expected) in [
            (EndSentinel::None, None),
            (EndSentinel::Contact, Some(SectionId::Contact)),
        ] {
            let mut config = AppConfig {
                window_width: 1280.0,
                window_height: 960.0,
                show_contact_in_nav: true,
                ..AppConfig::default()
            };
            config.navigation.end_sentinel = sentinel;
            let (mut app, _task) = App::bootstrap(config, PathBuf::from("unused.toml"));

            let bottom = app.layout.max_scroll(app.viewport.height);
            scroll(&mut app, bottom);
            assert_eq!(app.active_section(), expected, "{sentinel:?}");

            let projects_start = start_of(&app, SectionId::Projects);
            scroll(&mut app, projects_start);
            assert_eq!(app.active_section(), Some(SectionId::Projects), "{sentinel:?}");
        }
    }

    #[test]
    fn garbage_offsets_are_treated_as_top() {
        let mut app = build_test_app();
        scroll(&mut app, f32::NAN);
        assert_eq!(app.viewport.scroll_y, 0.0);
        assert_eq!(app.active_section(), Some(SectionId::Home));
        assert_eq!(app.page_progress(), 0.0);
    }

    #[test]
    fn frames_drive_the_page_and_finish_at_the_target() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_navigate_to(SectionId::Education, &mut effects);
        let destination = app.navigator.destination().expect("scroll in flight");

        let mut frame_effects = Vec::new();
        app.handle_frame(Instant::now() + Duration::from_secs(30), &mut frame_effects);

        assert_eq!(frame_effects, vec![Effect::ScrollTo(destination)]);
        assert!(!app.navigator.is_scrolling());
        assert_eq!(app.viewport.scroll_y, destination);
        assert_eq!(app.active_section(), Some(SectionId::Education));
    }

    #[test]
    fn progress_tracks_the_reported_content_height() {
        let mut app = build_test_app();
        let height = app.viewport.height;
        let content = height * 3.0;
        app.handle_scrolled(height, app.viewport.width, height, content, &mut Vec::new());
        assert_eq!(app.page_progress(), 50.0);
    }

    #[test]
    fn frames_without_a_scroll_do_nothing() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_frame(Instant::now(), &mut effects);
        assert!(effects.is_empty());
    }

    #[test]
    fn user_scroll_cancels_programmatic_scroll() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_navigate_to(SectionId::Projects, &mut effects);
        assert_eq!(app.animations.enabled_count(), 0);

        let far = app.layout.document_end();
        scroll(&mut app, far);

        assert!(!app.navigator.is_scrolling());
        assert_eq!(app.animations.enabled_count(), app.animations.len());
    }

    #[test]
    fn resize_relayouts_without_cancelling() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_navigate_to(SectionId::Projects, &mut effects);
        let before = app.layout.document_end();

        let (height, content) = (app.viewport.height, app.layout.document_end());
        app.handle_scrolled(0.0, 520.0, height, content, &mut effects);

        assert!(app.layout.document_end() > before);
        assert!(app.navigator.is_scrolling());
    }
}
