use super::super::state::{App, ImpactCounter, Route};
use super::Effect;
use crate::content::project_by_slug;
use folio_core::SectionId;
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_navigate_to(&mut self, section: SectionId, _effects: &mut Vec<Effect>) {
        if self.route != Route::Home {
            debug!(%section, route = ?self.route, "Section navigation ignored off the home page");
            return;
        }
        let ticket = self.navigator.navigate_to(
            section,
            &self.layout,
            self.viewport.scroll_y,
            self.viewport.height,
            &mut self.animations,
            Instant::now(),
        );
        if let Some(ticket) = ticket {
            info!(
                %section,
                generation = ticket.generation(),
                destination = ?self.navigator.destination(),
                "Navigating to section"
            );
        }
    }

    pub(super) fn handle_open_project(&mut self, slug: &'static str, effects: &mut Vec<Effect>) {
        let Some(project) = project_by_slug(slug) else {
            debug!(slug, "Unknown project; ignoring");
            return;
        };
        if self.navigator.cancel(&mut self.animations) {
            debug!("Cancelled section scroll before leaving the home page");
        }
        info!(slug, name = project.name, "Opening project case study");
        self.route = Route::Project { slug };
        self.impact = ImpactCounter::default();
        // Short case studies show their figures without any scrolling.
        self.reveal_impact(0.0, self.viewport.height, Instant::now());
        effects.push(Effect::ResetProjectScroll);
    }

    /// Return to the home page and bring the project gallery into view.
    pub(super) fn handle_back_to_projects(&mut self, effects: &mut Vec<Effect>) {
        if self.route == Route::Home {
            return;
        }
        self.route = Route::Home;
        self.impact = ImpactCounter::default();
        // The home scrollable is rebuilt from the top.
        self.viewport.scroll_y = 0.0;
        self.sample_scroll_position();
        effects.push(Effect::ScrollTo(0.0));
        self.handle_navigate_to(SectionId::Projects, effects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::PROJECTS;
    use folio_core::{NavPhase, target_offset};
    use std::path::PathBuf;
    use std::time::Duration;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default(), PathBuf::from("unused.toml"));
        app
    }

    fn finish_scroll(app: &mut App) -> Vec<Effect> {
        let mut effects = Vec::new();
        app.handle_frame(Instant::now() + Duration::from_secs(30), &mut effects);
        effects
    }

    #[test]
    fn navigation_suspends_animations_until_the_scroll_lands() {
        let mut app = build_test_app();
        let total = app.animations.len();
        let mut effects = Vec::new();

        app.handle_navigate_to(SectionId::Work, &mut effects);
        assert_eq!(app.navigator.phase(), NavPhase::ScrollingProgrammatically);
        assert_eq!(app.animations.enabled_count(), 0);
        assert_eq!(app.navigator.suspended().len(), total);

        finish_scroll(&mut app);
        assert_eq!(app.navigator.phase(), NavPhase::Idle);
        assert_eq!(app.animations.enabled_count(), total);
        assert!(app.navigator.suspended().is_empty());
    }

    #[test]
    fn later_navigation_wins() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_navigate_to(SectionId::Work, &mut effects);
        app.handle_navigate_to(SectionId::Projects, &mut effects);

        let expected = target_offset(
            SectionId::Projects,
            &app.layout,
            app.viewport.height,
            app.navigator.config(),
        )
        .expect("projects in layout");
        assert_eq!(app.navigator.destination(), Some(expected));

        let effects = finish_scroll(&mut app);
        assert_eq!(effects, vec![Effect::ScrollTo(expected)]);
        assert_eq!(app.animations.enabled_count(), app.animations.len());
    }

    #[test]
    fn opening_a_project_leaves_the_home_page() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_navigate_to(SectionId::Projects, &mut effects);

        app.handle_open_project(PROJECTS[1].slug, &mut effects);

        assert_eq!(app.route, Route::Project { slug: "biki" });
        assert!(!app.navigator.is_scrolling());
        assert_eq!(app.animations.enabled_count(), app.animations.len());
        assert_eq!(effects, vec![Effect::ResetProjectScroll]);
    }

    #[test]
    fn section_navigation_is_ignored_on_project_pages() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_open_project("biki", &mut effects);

        app.handle_navigate_to(SectionId::Work, &mut effects);
        assert!(!app.navigator.is_scrolling());
        assert_eq!(app.animations.enabled_count(), app.animations.len());
    }

    #[test]
    fn unknown_project_is_ignored() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_open_project("does-not-exist", &mut effects);
        assert_eq!(app.route, Route::Home);
        assert!(effects.is_empty());
    }

    #[test]
    fn back_returns_home_and_scrolls_to_projects() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_open_project("uni-info-sa", &mut effects);
        effects.clear();

        app.handle_back_to_projects(&mut effects);

        assert_eq!(app.route, Route::Home);
        assert_eq!(effects, vec![Effect::ScrollTo(0.0)]);
        let ticket = app.navigator.ticket().expect("scroll in flight");
        assert_eq!(ticket.target(), SectionId::Projects);

        finish_scroll(&mut app);
        assert_eq!(app.active_section(), Some(SectionId::Projects));
    }
}
