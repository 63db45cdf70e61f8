//! Scroll-synchronized navigation for a single-page portfolio.
//!
//! [`tracker`] derives the highlighted section from the scroll offset,
//! [`navigator`] drives programmatic scrolls while holding scroll-linked
//! animations from [`registry`] suspended, and [`section`] holds the measured
//! layout both of them read.

pub mod config;
pub mod easing;
pub mod error;
pub mod navigator;
pub mod registry;
pub mod section;
pub mod tracker;
pub mod trigger;
pub mod tween;

pub use config::{EndSentinel, NavigationConfig};
pub use easing::Easing;
pub use error::LayoutError;
pub use navigator::{NavPhase, NavigationTicket, ScrollNavigator, ScrollStep, target_offset};
pub use registry::{
    AnimationHandle, AnimationKey, AnimationRegistry, ScrollAnimation, ScrollAnimationRegistry,
};
pub use section::{Section, SectionId, SectionLayout};
pub use tracker::{compute_active_section, scroll_progress};
pub use trigger::{TriggerParseError, TriggerRange};
pub use tween::Tween;
