mod appearance;
mod case_study;
mod core;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    SaveConfig,
    /// Absolute offset for the home page scrollable.
    ScrollTo(f32),
    ResetProjectScroll,
    QuitSafely,
}
