//! Programmatic scroll-to-section with suspended scroll-linked animations.
//!
//! States are `Idle` and `ScrollingProgrammatically`. Entering the scrolling
//! state disables every enabled animation in the registry; leaving it (tween
//! done, completion ticket, cancel, or auto-kill) re-enables exactly the ones
//! that were disabled here. A new navigation while one is in flight replaces
//! the tween and takes over the existing suspension, so the chain ends with a
//! single resume pass.

use crate::config::NavigationConfig;
use crate::registry::{AnimationHandle, AnimationKey, AnimationRegistry};
use crate::section::{SectionId, SectionLayout};
use crate::tracker::compute_active_section;
use crate::tween::Tween;
use std::time::Instant;
use tracing::{debug, trace};

/// Observed offsets this far outside the swept range count as user input.
const AUTO_KILL_TOLERANCE_PX: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPhase {
    #[default]
    Idle,
    ScrollingProgrammatically,
}

/// Identifies one programmatic scroll; stale tickets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTicket {
    generation: u64,
    target: SectionId,
}

impl NavigationTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn target(&self) -> SectionId {
        self.target
    }
}

/// One frame of a programmatic scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub offset: f32,
    pub finished: bool,
}

#[derive(Debug, Clone)]
struct InFlight {
    ticket: NavigationTicket,
    tween: Tween,
    last_commanded: f32,
}

/// Scroll offset that brings `target` under the navbar, clamped to the document.
pub fn target_offset(
    target: SectionId,
    layout: &SectionLayout,
    viewport_height: f32,
    config: &NavigationConfig,
) -> Option<f32> {
    let section = layout.get(target)?;
    if section.id == layout.first().id {
        return Some(0.0);
    }
    let raw = section.start_offset - config.header_clearance_px;
    Some(raw.clamp(0.0, layout.max_scroll(viewport_height)))
}

#[derive(Debug, Clone, Default)]
pub struct ScrollNavigator {
    config: NavigationConfig,
    active_section: Option<SectionId>,
    in_flight: Option<InFlight>,
    suspended: Vec<AnimationKey>,
    generation: u64,
}

impl ScrollNavigator {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config: config.sanitized(),
            active_section: None,
            in_flight: None,
            suspended: Vec::new(),
            generation: 0,
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.active_section
    }

    pub fn phase(&self) -> NavPhase {
        if self.in_flight.is_some() {
            NavPhase::ScrollingProgrammatically
        } else {
            NavPhase::Idle
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn ticket(&self) -> Option<NavigationTicket> {
        self.in_flight.as_ref().map(|flight| flight.ticket)
    }

    /// Final offset of the in-flight scroll.
    pub fn destination(&self) -> Option<f32> {
        self.in_flight.as_ref().map(|flight| flight.tween.to())
    }

    /// Keys of animations currently held disabled by this navigator.
    pub fn suspended(&self) -> &[AnimationKey] {
        &self.suspended
    }

    /// Recompute the highlighted section from a scroll sample.
    pub fn sample_scroll(
        &mut self,
        scroll_y: f32,
        viewport_height: f32,
        layout: &SectionLayout,
    ) -> Option<SectionId> {
        let next = compute_active_section(scroll_y, viewport_height, layout, &self.config);
        if next != self.active_section {
            trace!(
                from = ?self.active_section,
                to = ?next,
                scroll_y,
                "Active section changed"
            );
            self.active_section = next;
        }
        next
    }

    /// Start a programmatic scroll to `target`.
    ///
    /// Returns `None` without touching any state when `target` is not part of
    /// the current layout.
    pub fn navigate_to(
        &mut self,
        target: SectionId,
        layout: &SectionLayout,
        current_scroll: f32,
        viewport_height: f32,
        registry: &mut dyn AnimationRegistry,
        now: Instant,
    ) -> Option<NavigationTicket> {
        let Some(destination) = target_offset(target, layout, viewport_height, &self.config)
        else {
            debug!(section = %target, "Navigation target not in layout; ignoring");
            return None;
        };

        if let Some(previous) = &self.in_flight {
            debug!(
                from = %previous.ticket.target,
                to = %target,
                "Superseding in-flight scroll"
            );
        }

        self.suspend(registry);
        self.generation = self.generation.wrapping_add(1);
        let ticket = NavigationTicket {
            generation: self.generation,
            target,
        };
        let start = if current_scroll.is_finite() {
            current_scroll.max(0.0)
        } else {
            0.0
        };
        self.in_flight = Some(InFlight {
            ticket,
            tween: Tween::new(
                start,
                destination,
                self.config.scroll_duration(),
                self.config.scroll_easing,
                now,
            ),
            last_commanded: start,
        });
        debug!(
            section = %target,
            generation = ticket.generation,
            from = start,
            to = destination,
            suspended = self.suspended.len(),
            "Started programmatic scroll"
        );
        Some(ticket)
    }

    /// Advance the in-flight scroll; the last step resumes animations.
    pub fn tick(&mut self, now: Instant, registry: &mut dyn AnimationRegistry) -> Option<ScrollStep> {
        let flight = self.in_flight.as_mut()?;
        let offset = flight.tween.value_at(now);
        let finished = flight.tween.is_finished(now);
        flight.last_commanded = offset;

        if finished {
            let ticket = flight.ticket;
            self.finish(registry);
            debug!(section = %ticket.target, offset, "Programmatic scroll finished");
        }
        Some(ScrollStep { offset, finished })
    }

    /// Completion signal for a specific scroll. Returns `false` for stale tickets.
    pub fn complete(&mut self, ticket: NavigationTicket, registry: &mut dyn AnimationRegistry) -> bool {
        if self.ticket() != Some(ticket) {
            trace!(generation = ticket.generation, "Ignoring stale completion");
            return false;
        }
        self.finish(registry);
        true
    }

    /// Abort any in-flight scroll. Returns `true` when one was running.
    pub fn cancel(&mut self, registry: &mut dyn AnimationRegistry) -> bool {
        if self.in_flight.is_none() {
            return false;
        }
        debug!("Cancelled programmatic scroll");
        self.finish(registry);
        true
    }

    /// Feed an observed scroll offset back in while a scroll is in flight.
    ///
    /// With auto-kill enabled, an offset outside the range swept so far is
    /// treated as the user taking over and cancels the scroll. Returns `true`
    /// when that happened.
    pub fn observe_scroll(&mut self, offset: f32, registry: &mut dyn AnimationRegistry) -> bool {
        if !self.config.auto_kill || !offset.is_finite() {
            return false;
        }
        let Some(flight) = &self.in_flight else {
            return false;
        };
        let low = flight.tween.from().min(flight.last_commanded) - AUTO_KILL_TOLERANCE_PX;
        let high = flight.tween.from().max(flight.last_commanded) + AUTO_KILL_TOLERANCE_PX;
        if (low..=high).contains(&offset) {
            return false;
        }
        debug!(
            offset,
            expected_low = low,
            expected_high = high,
            "User scroll interrupted programmatic scroll"
        );
        self.finish(registry);
        true
    }

    fn finish(&mut self, registry: &mut dyn AnimationRegistry) {
        self.in_flight = None;
        self.resume(registry);
    }

    fn suspend(&mut self, registry: &mut dyn AnimationRegistry) {
        let suspended = &mut self.suspended;
        registry.for_each_handle(&mut |handle: &mut dyn AnimationHandle| {
            if handle.is_enabled() && !suspended.contains(&handle.key()) {
                handle.disable();
                suspended.push(handle.key());
            }
        });
    }

    fn resume(&mut self, registry: &mut dyn AnimationRegistry) {
        let suspended = std::mem::take(&mut self.suspended);
        if suspended.is_empty() {
            return;
        }
        registry.for_each_handle(&mut |handle: &mut dyn AnimationHandle| {
            if suspended.contains(&handle.key()) {
                handle.enable();
            }
        });
        trace!(count = suspended.len(), "Resumed scroll-linked animations");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct FakeHandle {
        key: AnimationKey,
        enabled: bool,
        enable_calls: usize,
        disable_calls: usize,
    }

    impl AnimationHandle for FakeHandle {
        fn key(&self) -> AnimationKey {
            self.key
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn disable(&mut self) {
            self.enabled = false;
            self.disable_calls += 1;
        }

        fn enable(&mut self) {
            self.enabled = true;
            self.enable_calls += 1;
        }
    }

    #[derive(Default)]
    struct FakeRegistry {
        handles: Vec<FakeHandle>,
    }

    impl FakeRegistry {
        fn with_enabled(count: u32) -> Self {
            let handles = (0..count)
                .map(|i| FakeHandle {
                    key: AnimationKey(i),
                    enabled: true,
                    enable_calls: 0,
                    disable_calls: 0,
                })
                .collect();
            Self { handles }
        }

        fn flags(&self) -> Vec<bool> {
            self.handles.iter().map(|h| h.enabled).collect()
        }
    }

    impl AnimationRegistry for FakeRegistry {
        fn for_each_handle(&mut self, visit: &mut dyn FnMut(&mut dyn AnimationHandle)) {
            for handle in &mut self.handles {
                visit(handle);
            }
        }
    }

    fn layout() -> SectionLayout {
        SectionLayout::from_heights(&[
            (SectionId::Home, 800.0),
            (SectionId::Work, 1200.0),
            (SectionId::Education, 1200.0),
            (SectionId::Projects, 1800.0),
        ])
        .expect("layout")
    }

    fn run_to_end(
        navigator: &mut ScrollNavigator,
        registry: &mut FakeRegistry,
        start: Instant,
    ) -> ScrollStep {
        let mut last = None;
        for frame in 0..=60 {
            match navigator.tick(start + Duration::from_millis(frame * 16), registry) {
                Some(step) => last = Some(step),
                None => break,
            }
        }
        last.expect("at least one frame")
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let mut navigator = ScrollNavigator::new(NavigationConfig::default());
        let mut registry = FakeRegistry::with_enabled(3);
        let before = registry.flags();

        let ticket = navigator.navigate_to(
            SectionId::Contact,
            &layout(),
            0.0,
            900.0,
            &mut registry,
            Instant::now(),
        );

        assert!(ticket.is_none());
        assert_eq!(navigator.phase(), NavPhase::Idle);
        assert_eq!(registry.flags(), before);
        assert!(registry.handles.iter().all(|h| h.disable_calls == 0));
    }

    #[test]
    fn completed_scroll_restores_every_animation() {
        let mut navigator = ScrollNavigator::new(NavigationConfig::default());
        let mut registry = FakeRegistry::with_enabled(4);
        let start = Instant::now();

        navigator
            .navigate_to(SectionId::Education, &layout(), 0.0, 900.0, &mut registry, start)
            .expect("ticket");
        assert_eq!(navigator.phase(), NavPhase::ScrollingProgrammatically);
        assert!(registry.flags().iter().all(|enabled| !enabled));

        let last = run_to_end(&mut navigator, &mut registry, start);
        assert!(last.finished);
        assert_eq!(last.offset, 2000.0 - 80.0);
        assert_eq!(navigator.phase(), NavPhase::Idle);
        assert!(navigator.suspended().is_empty());
        assert!(registry.flags().iter().all(|enabled| *enabled));
    }

    #[test]
    fn animations_disabled_elsewhere_stay_disabled() {
        let mut navigator = ScrollNavigator::new(NavigationConfig::default());
        let mut registry = FakeRegistry::with_enabled(2);
        registry.handles[1].enabled = false;
        let start = Instant::now();

        navigator.navigate_to(SectionId::Work, &layout(), 0.0, 900.0, &mut registry, start);
        run_to_end(&mut navigator, &mut registry, start);

        assert_eq!(registry.flags(), vec![true, false]);
        assert_eq!(registry.handles[1].enable_calls, 0);
    }

    #[test]
    fn interrupted_navigation_resumes_once_and_lands_on_latest_target() {
        let mut navigator = ScrollNavigator::new(NavigationConfig::default());
        let mut registry = FakeRegistry::with_enabled(3);
        let start = Instant::now();
        let layout = layout();

        let first = navigator
            .navigate_to(SectionId::Work, &layout, 0.0, 900.0, &mut registry, start)
            .expect("first ticket");
        let step = navigator
            .tick(start + Duration::from_millis(100), &mut registry)
            .expect("frame");
        assert!(!step.finished);

        let second = navigator
            .navigate_to(
                SectionId::Projects,
                &layout,
                step.offset,
                900.0,
                &mut registry,
                start + Duration::from_millis(100),
            )
            .expect("second ticket");
        assert_ne!(first, second);
        assert!(registry.handles.iter().all(|h| h.enable_calls == 0));
        assert!(registry.handles.iter().all(|h| h.disable_calls == 1));

        // Stale completion of the first scroll must not resume anything.
        assert!(!navigator.complete(first, &mut registry));
        assert!(registry.flags().iter().all(|enabled| !enabled));

        let last = run_to_end(&mut navigator, &mut registry, start + Duration::from_millis(100));
        assert!(last.finished);
        assert_eq!(last.offset, 3200.0 - 80.0);
        assert!(registry.handles.iter().all(|h| h.enable_calls == 1));
        assert!(registry.flags().iter().all(|enabled| *enabled));
    }

    #[test]
    fn complete_with_current_ticket_resumes() {
        let mut navigator = ScrollNavigator::new(NavigationConfig::default());
        let mut registry = FakeRegistry::with_enabled(1);
        let ticket = navigator
            .navigate_to(SectionId::Work, &layout(), 0.0, 900.0, &mut registry, Instant::now())
            .expect("ticket");

        assert!(navigator.complete(ticket, &mut registry));
        assert!(!navigator.complete(ticket, &mut registry));
        assert_eq!(registry.handles[0].enable_calls, 1);
        assert_eq!(navigator.phase(), NavPhase::Idle);
    }

    #[test]
    fn first_section_targets_the_very_top() {
        let layout = layout();
        let config = NavigationConfig::default();
        assert_eq!(target_offset(SectionId::Home, &layout, 900.0, &config), Some(0.0));
        assert_eq!(target_offset(SectionId::Work, &layout, 900.0, &config), Some(720.0));
        // A tall viewport caps the offset at document end minus viewport.
        assert_eq!(target_offset(SectionId::Projects, &layout, 900.0, &config), Some(3120.0));
        assert_eq!(target_offset(SectionId::Projects, &layout, 2500.0, &config), Some(2500.0));
    }

    #[test]
    fn user_scroll_against_the_tween_cancels_it() {
        let mut navigator = ScrollNavigator::new(NavigationConfig::default());
        let mut registry = FakeRegistry::with_enabled(2);
        let start = Instant::now();
        navigator.navigate_to(SectionId::Projects, &layout(), 1000.0, 900.0, &mut registry, start);
        let step = navigator
            .tick(start + Duration::from_millis(300), &mut registry)
            .expect("frame");

        // Echo of our own scroll is fine.
        assert!(!navigator.observe_scroll(step.offset, &mut registry));
        assert!(navigator.is_scrolling());

        // Jumping back above the starting point is the user.
        assert!(navigator.observe_scroll(200.0, &mut registry));
        assert!(!navigator.is_scrolling());
        assert!(registry.flags().iter().all(|enabled| *enabled));
    }

    #[test]
    fn user_scroll_against_an_upward_tween_cancels_it() {
        let mut navigator = ScrollNavigator::new(NavigationConfig::default());
        let mut registry = FakeRegistry::with_enabled(2);
        let start = Instant::now();
        navigator.navigate_to(SectionId::Work, &layout(), 3000.0, 900.0, &mut registry, start);
        let step = navigator
            .tick(start + Duration::from_millis(300), &mut registry)
            .expect("frame");
        assert!(step.offset < 3000.0 && step.offset > 720.0);

        // Anything between the start and the last commanded offset is our own echo.
        assert!(!navigator.observe_scroll(step.offset, &mut registry));
        assert!(!navigator.observe_scroll(3000.0, &mut registry));
        assert!(!navigator.observe_scroll(step.offset - 3.0, &mut registry));
        assert!(navigator.is_scrolling());

        // Wheeling back down past the starting point is the user.
        assert!(navigator.observe_scroll(3100.0, &mut registry));
        assert!(!navigator.is_scrolling());
        assert!(registry.flags().iter().all(|enabled| *enabled));
    }

    #[test]
    fn auto_kill_can_be_disabled() {
        let config = NavigationConfig {
            auto_kill: false,
            ..NavigationConfig::default()
        };
        let mut navigator = ScrollNavigator::new(config);
        let mut registry = FakeRegistry::with_enabled(1);
        navigator.navigate_to(SectionId::Work, &layout(), 0.0, 900.0, &mut registry, Instant::now());

        assert!(!navigator.observe_scroll(4000.0, &mut registry));
        assert!(navigator.is_scrolling());
    }

    #[test]
    fn cancel_resumes_and_is_idempotent() {
        let mut navigator = ScrollNavigator::new(NavigationConfig::default());
        let mut registry = FakeRegistry::with_enabled(2);
        navigator.navigate_to(SectionId::Work, &layout(), 0.0, 900.0, &mut registry, Instant::now());

        assert!(navigator.cancel(&mut registry));
        assert!(!navigator.cancel(&mut registry));
        assert!(registry.handles.iter().all(|h| h.enable_calls == 1));
    }

    #[test]
    fn sampling_updates_active_section_in_any_phase() {
        let mut navigator = ScrollNavigator::new(NavigationConfig::default());
        let mut registry = FakeRegistry::with_enabled(1);
        let layout = layout();

        assert_eq!(navigator.sample_scroll(1500.0, 900.0, &layout), Some(SectionId::Work));
        navigator.navigate_to(SectionId::Projects, &layout, 1500.0, 900.0, &mut registry, Instant::now());
        assert_eq!(
            navigator.sample_scroll(2600.0, 900.0, &layout),
            Some(SectionId::Education)
        );
        assert_eq!(navigator.active_section(), Some(SectionId::Education));
        assert!(registry.flags().iter().all(|enabled| !enabled));
    }
}
