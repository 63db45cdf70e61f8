//! Scroll trigger ranges for scroll-linked animations.
//!
//! A trigger point is written `"<element edge> <viewport edge>"`, each edge
//! optionally shifted with `+=px` / `-=px`, e.g. `"top bottom"` (element top
//! meets viewport bottom) or `"top center+=100"`. A range pairs a start and an
//! end point and maps the scroll offset onto linear progress between them.

use crate::section::Section;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn fraction(self) -> f32 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePoint {
    pub edge: Edge,
    pub offset_px: f32,
}

impl EdgePoint {
    fn resolve(&self, origin: f32, extent: f32) -> f32 {
        origin + extent * self.edge.fraction() + self.offset_px
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerParseError {
    #[error("trigger point `{0}` needs an element edge and a viewport edge")]
    Arity(String),
    #[error("unknown edge `{0}`")]
    Edge(String),
    #[error("invalid pixel offset `{0}`")]
    Offset(String),
}

impl FromStr for EdgePoint {
    type Err = TriggerParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let (name, offset_px) = if let Some((name, amount)) = raw.split_once("+=") {
            (name, parse_offset(amount)?)
        } else if let Some((name, amount)) = raw.split_once("-=") {
            (name, -parse_offset(amount)?)
        } else {
            (raw, 0.0)
        };
        let edge = match name.trim().to_ascii_lowercase().as_str() {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            _ => return Err(TriggerParseError::Edge(name.to_string())),
        };
        Ok(EdgePoint { edge, offset_px })
    }
}

fn parse_offset(raw: &str) -> Result<f32, TriggerParseError> {
    let trimmed = raw.trim().trim_end_matches("px");
    trimmed
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| TriggerParseError::Offset(raw.to_string()))
}

/// Where on the element meets where on the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    pub element: EdgePoint,
    pub viewport: EdgePoint,
}

impl TriggerPoint {
    /// Scroll offset at which the element point lines up with the viewport point.
    pub fn scroll_position(&self, section: &Section, viewport_height: f32) -> f32 {
        let element = self
            .element
            .resolve(section.start_offset, section.height());
        let viewport = self.viewport.resolve(0.0, viewport_height);
        element - viewport
    }
}

impl FromStr for TriggerPoint {
    type Err = TriggerParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.split_whitespace().collect();
        let [element, viewport] = parts.as_slice() else {
            return Err(TriggerParseError::Arity(raw.to_string()));
        };
        Ok(TriggerPoint {
            element: element.parse()?,
            viewport: viewport.parse()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRange {
    pub start: TriggerPoint,
    pub end: TriggerPoint,
}

impl TriggerRange {
    pub fn parse(start: &str, end: &str) -> Result<Self, TriggerParseError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Linear progress of `scroll_y` through the range, clamped to `[0, 1]`.
    pub fn progress(&self, scroll_y: f32, viewport_height: f32, section: &Section) -> f32 {
        let begin = self.start.scroll_position(section, viewport_height);
        let finish = self.end.scroll_position(section, viewport_height);
        if finish <= begin {
            return if scroll_y >= begin { 1.0 } else { 0.0 };
        }
        ((scroll_y - begin) / (finish - begin)).clamp(0.0, 1.0)
    }
}
