//! Tunables for active-section tracking and programmatic scrolling.

use crate::easing::Easing;
use crate::section::SectionId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What the tracker reports once the probe enters the trailing margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndSentinel {
    /// No navigation entry is highlighted.
    #[default]
    None,
    /// The contact entry is highlighted.
    Contact,
}

impl EndSentinel {
    pub fn section(self) -> Option<SectionId> {
        match self {
            EndSentinel::None => None,
            EndSentinel::Contact => Some(SectionId::Contact),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Space left above a section's top edge for the fixed navbar.
    #[serde(default = "default_header_clearance_px")]
    pub header_clearance_px: f32,
    #[serde(default = "default_scroll_duration_secs")]
    pub scroll_duration_secs: f32,
    #[serde(default)]
    pub scroll_easing: Easing,
    #[serde(default = "default_trailing_margin_px")]
    pub trailing_margin_px: f32,
    #[serde(default)]
    pub end_sentinel: EndSentinel,
    /// Fraction of the viewport height below `scroll_y` used as the probe.
    #[serde(default = "default_probe_fraction")]
    pub probe_fraction: f32,
    /// Cancel a programmatic scroll when the user scrolls away from it.
    #[serde(default = "default_auto_kill")]
    pub auto_kill: bool,
}

fn default_header_clearance_px() -> f32 {
    80.0
}

fn default_scroll_duration_secs() -> f32 {
    0.8
}

fn default_trailing_margin_px() -> f32 {
    100.0
}

fn default_probe_fraction() -> f32 {
    1.0 / 3.0
}

fn default_auto_kill() -> bool {
    true
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            header_clearance_px: default_header_clearance_px(),
            scroll_duration_secs: default_scroll_duration_secs(),
            scroll_easing: Easing::default(),
            trailing_margin_px: default_trailing_margin_px(),
            end_sentinel: EndSentinel::default(),
            probe_fraction: default_probe_fraction(),
            auto_kill: default_auto_kill(),
        }
    }
}

impl NavigationConfig {
    /// Clamp values read from disk into usable ranges.
    pub fn sanitized(mut self) -> Self {
        let finite_or = |value: f32, fallback: f32| if value.is_finite() { value } else { fallback };
        self.header_clearance_px =
            finite_or(self.header_clearance_px, default_header_clearance_px()).max(0.0);
        self.scroll_duration_secs =
            finite_or(self.scroll_duration_secs, default_scroll_duration_secs()).clamp(0.0, 10.0);
        self.trailing_margin_px =
            finite_or(self.trailing_margin_px, default_trailing_margin_px()).max(0.0);
        self.probe_fraction =
            finite_or(self.probe_fraction, default_probe_fraction()).clamp(0.0, 1.0);
        self
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_secs_f32(self.scroll_duration_secs.max(0.0))
    }
}
