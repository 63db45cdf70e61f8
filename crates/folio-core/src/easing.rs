//! Named easing curves.
//!
//! The power family follows the usual tweening convention where `powerN`
//! raises progress to the `N + 1` power.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Power1Out,
    Power2Out,
    Power3Out,
    Power4Out,
    Power2InOut,
    #[default]
    Power3InOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto the curve. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Easing::Linear => t,
            Easing::Power1Out => ease_out(t, 2),
            Easing::Power2Out => ease_out(t, 3),
            Easing::Power3Out => ease_out(t, 4),
            Easing::Power4Out => ease_out(t, 5),
            Easing::Power2InOut => ease_in_out(t, 3),
            Easing::Power3InOut => ease_in_out(t, 4),
        }
    }
}

fn ease_out(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

fn ease_in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        (2.0 * t).powi(power) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(power) / 2.0
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Easing::Linear => "none",
            Easing::Power1Out => "power1.out",
            Easing::Power2Out => "power2.out",
            Easing::Power3Out => "power3.out",
            Easing::Power4Out => "power4.out",
            Easing::Power2InOut => "power2.inOut",
            Easing::Power3InOut => "power3.inOut",
        };
        write!(f, "{}", label)
    }
}
