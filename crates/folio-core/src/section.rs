//! Section identifiers and the measured layout of the single-page document.
//!
//! A layout is rebuilt every time the host measures the page (mount, resize,
//! route change). It is validated once when built so the scroll sampler can
//! rely on ordered, contiguous ranges without re-checking on every event.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sub-pixel slack allowed between one section's end and the next start.
const CONTIGUITY_TOLERANCE_PX: f32 = 0.01;

/// Named regions of the page, in their canonical document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Work,
    Education,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Work,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Work => "work",
            SectionId::Education => "education",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown on the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Work => "Work",
            SectionId::Education => "Education",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measured section: `[start_offset, end_offset)` in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub start_offset: f32,
    pub end_offset: f32,
}

impl Section {
    pub fn height(&self) -> f32 {
        self.end_offset - self.start_offset
    }

    pub fn contains(&self, offset: f32) -> bool {
        self.start_offset <= offset && offset < self.end_offset
    }
}

/// Ordered, contiguous, non-overlapping sections starting at offset 0.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    sections: Vec<Section>,
}

impl SectionLayout {
    pub fn new(sections: Vec<Section>) -> Result<Self, LayoutError> {
        let first = sections.first().ok_or(LayoutError::Empty)?;
        if first.start_offset != 0.0 {
            return Err(LayoutError::FirstNotAtOrigin {
                id: first.id,
                start: first.start_offset,
            });
        }

        let mut seen = HashSet::with_capacity(sections.len());
        let mut previous_end: Option<f32> = None;
        for section in &sections {
            if !seen.insert(section.id) {
                return Err(LayoutError::Duplicate(section.id));
            }
            if !section.start_offset.is_finite() || !section.end_offset.is_finite() {
                return Err(LayoutError::NonFinite { id: section.id });
            }
            if section.end_offset < section.start_offset {
                return Err(LayoutError::Inverted {
                    id: section.id,
                    start: section.start_offset,
                    end: section.end_offset,
                });
            }
            if let Some(previous_end) = previous_end {
                if (section.start_offset - previous_end).abs() > CONTIGUITY_TOLERANCE_PX {
                    return Err(LayoutError::Discontiguous {
                        id: section.id,
                        start: section.start_offset,
                        previous_end,
                    });
                }
            }
            previous_end = Some(section.end_offset);
        }

        Ok(Self { sections })
    }

    /// Stack sections of the given heights top to bottom.
    pub fn from_heights(heights: &[(SectionId, f32)]) -> Result<Self, LayoutError> {
        let mut cursor = 0.0_f32;
        let sections = heights
            .iter()
            .map(|&(id, height)| {
                let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
                let section = Section {
                    id,
                    start_offset: cursor,
                    end_offset: cursor + height,
                };
                cursor += height;
                section
            })
            .collect();
        Self::new(sections)
    }

    /// Layout made of one section starting at the origin.
    pub fn single(id: SectionId, height: f32) -> Self {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        Self {
            sections: vec![Section {
                id,
                start_offset: 0.0,
                end_offset: height,
            }],
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    pub fn last(&self) -> &Section {
        &self.sections[self.sections.len() - 1]
    }

    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|section| section.id)
    }

    pub fn document_end(&self) -> f32 {
        self.last().end_offset
    }

    /// Largest scroll offset the viewport can reach.
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.document_end() - viewport_height.max(0.0)).max(0.0)
    }
}
