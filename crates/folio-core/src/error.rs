use crate::section::SectionId;

/// Reasons a measured section layout is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("section layout is empty")]
    Empty,
    #[error("first section {id} starts at {start} instead of 0")]
    FirstNotAtOrigin { id: SectionId, start: f32 },
    #[error("section {0} appears more than once")]
    Duplicate(SectionId),
    #[error("section {id} has a non-finite offset")]
    NonFinite { id: SectionId },
    #[error("section {id} ends at {end} before it starts at {start}")]
    Inverted { id: SectionId, start: f32, end: f32 },
    #[error("section {id} starts at {start} but the previous section ends at {previous_end}")]
    Discontiguous {
        id: SectionId,
        start: f32,
        previous_end: f32,
    },
}
