use folio_core::{Easing, SectionId};
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

pub(crate) const NAVBAR_HEIGHT_PX: f32 = 56.0;
pub(crate) const PROGRESS_BAR_HEIGHT_PX: f32 = 3.0;
/// Window height not available to the page scrollable.
pub(crate) const WINDOW_CHROME_PX: f32 = NAVBAR_HEIGHT_PX + PROGRESS_BAR_HEIGHT_PX;
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub(crate) const MIN_FONT_SIZE: u32 = 12;
pub(crate) const MAX_FONT_SIZE: u32 = 32;
/// Viewport size changes below this are treated as jitter.
pub(crate) const RELAYOUT_THRESHOLD_PX: f32 = 0.5;
pub(crate) const IMPACT_COUNT_DURATION: Duration = Duration::from_secs(2);
pub(crate) const IMPACT_COUNT_EASING: Easing = Easing::Power3Out;
/// Share of the impact block that must be on screen before the count starts.
pub(crate) const IMPACT_REVEAL_FRACTION: f32 = 0.5;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
pub(crate) static PROJECT_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("project-scroll"));

/// Scroll-linked entrance animation attached to a section body.
pub(crate) struct EntranceAnimation {
    pub section: SectionId,
    pub start: &'static str,
    pub end: &'static str,
    pub easing: Easing,
}

pub(crate) const ENTRANCE_ANIMATIONS: &[EntranceAnimation] = &[
    EntranceAnimation {
        section: SectionId::Work,
        start: "top bottom",
        end: "top center",
        easing: Easing::Power2Out,
    },
    EntranceAnimation {
        section: SectionId::Education,
        start: "top bottom",
        end: "top center",
        easing: Easing::Power2Out,
    },
    EntranceAnimation {
        section: SectionId::Projects,
        start: "top bottom",
        end: "top center+=100",
        easing: Easing::Power4Out,
    },
    EntranceAnimation {
        section: SectionId::Contact,
        start: "top bottom",
        end: "bottom bottom",
        easing: Easing::Power2Out,
    },
];
