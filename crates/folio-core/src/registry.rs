//! Scroll-linked animation registry.
//!
//! The navigator never reaches into animation internals: it only enumerates
//! handles and flips them on or off through [`AnimationRegistry`]. The
//! concrete [`ScrollAnimationRegistry`] is what the desktop shell uses; tests
//! substitute their own registries to count toggles.

use crate::easing::Easing;
use crate::section::{SectionId, SectionLayout};
use crate::trigger::TriggerRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationKey(pub u32);

/// A registered animation as seen by the navigator.
pub trait AnimationHandle {
    fn key(&self) -> AnimationKey;
    fn is_enabled(&self) -> bool;
    /// Stop sampling scroll position until re-enabled.
    fn disable(&mut self);
    fn enable(&mut self);
}

/// Enumerable set of currently-registered animations.
pub trait AnimationRegistry {
    fn for_each_handle(&mut self, visit: &mut dyn FnMut(&mut dyn AnimationHandle));
}

/// An entrance animation driven by the scroll offset of one section.
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    key: AnimationKey,
    section: SectionId,
    range: TriggerRange,
    easing: Easing,
    enabled: bool,
    progress: f32,
}

impl ScrollAnimation {
    /// Eased progress from the last sample taken while enabled.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    fn sample(&mut self, scroll_y: f32, viewport_height: f32, layout: &SectionLayout) {
        // Sections missing from the current layout keep their last value.
        if let Some(section) = layout.get(self.section) {
            let linear = self.range.progress(scroll_y, viewport_height, section);
            self.progress = self.easing.apply(linear);
        }
    }
}

impl AnimationHandle for ScrollAnimation {
    fn key(&self) -> AnimationKey {
        self.key
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn enable(&mut self) {
        self.enabled = true;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollAnimationRegistry {
    animations: Vec<ScrollAnimation>,
    next_key: u32,
}

impl ScrollAnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        section: SectionId,
        range: TriggerRange,
        easing: Easing,
    ) -> AnimationKey {
        let key = AnimationKey(self.next_key);
        self.next_key = self.next_key.wrapping_add(1);
        self.animations.push(ScrollAnimation {
            key,
            section,
            range,
            easing,
            enabled: true,
            progress: 0.0,
        });
        tracing::trace!(key = key.0, %section, "Registered scroll animation");
        key
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn progress(&self, key: AnimationKey) -> Option<f32> {
        self.animations
            .iter()
            .find(|animation| animation.key == key)
            .map(ScrollAnimation::progress)
    }

    /// Combined progress of every animation attached to `section`; 1.0 when none are.
    pub fn progress_for(&self, section: SectionId) -> f32 {
        self.animations
            .iter()
            .filter(|animation| animation.section == section)
            .map(ScrollAnimation::progress)
            .reduce(f32::min)
            .unwrap_or(1.0)
    }

    pub fn enabled_count(&self) -> usize {
        self.animations.iter().filter(|a| a.enabled).count()
    }

    /// Update every enabled animation from the current scroll offset.
    pub fn sample(&mut self, scroll_y: f32, viewport_height: f32, layout: &SectionLayout) {
        for animation in self.animations.iter_mut().filter(|a| a.enabled) {
            animation.sample(scroll_y, viewport_height, layout);
        }
    }
}

impl AnimationRegistry for ScrollAnimationRegistry {
    fn for_each_handle(&mut self, visit: &mut dyn FnMut(&mut dyn AnimationHandle)) {
        for animation in &mut self.animations {
            visit(animation);
        }
    }
}
