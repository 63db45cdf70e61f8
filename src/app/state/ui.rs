use super::constants::{IMPACT_COUNT_DURATION, IMPACT_COUNT_EASING};
use crate::content::{Project, project_by_slug};
use folio_core::Tween;
use std::time::Instant;

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Project { slug: &'static str },
}

impl Route {
    pub(in crate::app) fn project(self) -> Option<&'static Project> {
        match self {
            Route::Home => None,
            Route::Project { slug } => project_by_slug(slug),
        }
    }
}

/// Count-up of a case study's impact figures. Runs once per visit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpactCounter {
    tween: Option<Tween>,
    fraction: f32,
}

impl ImpactCounter {
    /// Begin counting; false when the count is running or already finished.
    pub(in crate::app) fn start(&mut self, now: Instant) -> bool {
        if self.tween.is_some() || self.fraction > 0.0 {
            return false;
        }
        self.tween = Some(Tween::new(
            0.0,
            1.0,
            IMPACT_COUNT_DURATION,
            IMPACT_COUNT_EASING,
            now,
        ));
        true
    }

    pub(in crate::app) fn is_running(&self) -> bool {
        self.tween.is_some()
    }

    pub(in crate::app) fn advance(&mut self, now: Instant) {
        let Some(tween) = self.tween else {
            return;
        };
        self.fraction = tween.value_at(now);
        if tween.is_finished(now) {
            self.tween = None;
        }
    }

    /// Value to show for a figure whose final value is `target`.
    pub(in crate::app) fn display(&self, target: u32) -> u32 {
        (target as f32 * self.fraction).floor() as u32
    }
}

/// Last observed geometry of the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub(in crate::app) scroll_y: f32,
    pub(in crate::app) width: f32,
    pub(in crate::app) height: f32,
    pub(in crate::app) content_height: f32,
}

impl ViewportState {
    pub(in crate::app) fn estimated(window_width: f32, window_height: f32, chrome: f32) -> Self {
        ViewportState {
            scroll_y: 0.0,
            width: sanitize_extent(window_width),
            height: sanitize_extent(window_height - chrome),
            content_height: 0.0,
        }
    }

    /// Whether `width`/`height` differ from the stored size by more than `threshold`.
    pub(in crate::app) fn size_differs(&self, width: f32, height: f32, threshold: f32) -> bool {
        (self.width - sanitize_extent(width)).abs() > threshold
            || (self.height - sanitize_extent(height)).abs() > threshold
    }
}

pub(in crate::app) fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
