//! Time-based scalar tweens.
//!
//! Drives both programmatic page scrolls and the count-up of impact figures.

use crate::easing::Easing;
use std::time::{Duration, Instant};

/// A single scalar interpolation over wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    started_at: Instant,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing, started_at: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started_at,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    /// Linear progress in `[0, 1]`; a zero duration completes immediately.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
