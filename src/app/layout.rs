//! Height estimation for the home page and the case-study pages.
//!
//! The view renders each section (and each case-study block) into a
//! fixed-height clipped container using these numbers, so the estimate is
//! also the measured layout the tracker and navigator read.

use crate::content::{
    CERTIFICATES, CONTACT, JOBS, Narrative, PROFILE, PROJECTS, Project, ProjectLink, STUDIES,
    TECH_STACK,
};
use folio_core::{LayoutError, SectionId, SectionLayout};

pub(super) const SECTION_PADDING_X: f32 = 48.0;
pub(super) const SECTION_PADDING_Y: f32 = 48.0;
pub(super) const BLOCK_SPACING: f32 = 16.0;
pub(super) const LINE_SPACING: f32 = 6.0;
const LINE_HEIGHT: f32 = 1.3;
const HEADING_SCALE: f32 = 1.8;
const HERO_SCALE: f32 = 2.6;
const CARD_MIN_WIDTH: f32 = 300.0;
pub(super) const CARD_PADDING: f32 = 16.0;
pub(super) const CASE_BLOCK_PADDING_Y: f32 = 24.0;
pub(super) const IMPACT_SPACING: f32 = 48.0;
/// Gap between an impact figure and its label.
pub(super) const IMPACT_LABEL_GAP: f32 = 4.0;
/// Average advance of one glyph, in ems.
const GLYPH_WIDTH_EM: f32 = 0.55;

/// Sizes derived from the body font and the viewport.
#[derive(Debug, Clone, Copy)]
pub(super) struct Metrics {
    pub body: f32,
    pub heading: f32,
    pub hero: f32,
    pub content_width: f32,
}

impl Metrics {
    pub fn new(font_size: u32, viewport_width: f32) -> Self {
        let body = font_size.max(1) as f32;
        Metrics {
            body,
            heading: body * HEADING_SCALE,
            hero: body * HERO_SCALE,
            content_width: (viewport_width - 2.0 * SECTION_PADDING_X).max(body * 10.0),
        }
    }

    pub fn card_columns(&self) -> usize {
        ((self.content_width / CARD_MIN_WIDTH).floor() as usize).max(1)
    }

    pub fn card_width(&self) -> f32 {
        let columns = self.card_columns() as f32;
        (self.content_width - BLOCK_SPACING * (columns - 1.0)) / columns
    }

    /// Height of `text` wrapped at `width` and set at `size`.
    fn paragraph(&self, text: &str, size: f32, width: f32) -> f32 {
        let per_line = (width / (size * GLYPH_WIDTH_EM)).floor().max(1.0);
        let lines = (text.chars().count() as f32 / per_line).ceil().max(1.0);
        lines * size * LINE_HEIGHT
    }

    fn line(&self, size: f32) -> f32 {
        size * LINE_HEIGHT
    }

    fn body_paragraph(&self, text: &str) -> f32 {
        self.paragraph(text, self.body, self.content_width)
    }

    /// Stack of blocks separated by `spacing`.
    fn stack(parts: impl IntoIterator<Item = f32>, spacing: f32) -> f32 {
        let mut total = 0.0;
        let mut count = 0usize;
        for part in parts {
            total += part;
            count += 1;
        }
        total + spacing * count.saturating_sub(1) as f32
    }

    fn framed(&self, inner: f32) -> f32 {
        inner + 2.0 * SECTION_PADDING_Y
    }

    fn home(&self, viewport_height: f32) -> f32 {
        let inner = Self::stack(
            [
                self.paragraph(PROFILE.name, self.hero, self.content_width),
                self.line(self.heading * 0.6),
                self.body_paragraph(PROFILE.tagline),
                self.body_paragraph(PROFILE.bio),
                self.line(self.body),
            ],
            BLOCK_SPACING,
        );
        self.framed(inner).max(viewport_height)
    }

    fn job_block(&self, index: usize) -> f32 {
        let Some(job) = JOBS.get(index) else {
            return 0.0;
        };
        let highlights = job
            .highlights
            .iter()
            .map(|h| self.body_paragraph(&bullet_text(h)));
        Self::stack(
            [self.line(self.body * 1.2), self.line(self.body)]
                .into_iter()
                .chain(highlights),
            LINE_SPACING,
        )
    }

    fn work(&self) -> f32 {
        let blocks = (0..JOBS.len()).map(|idx| self.job_block(idx));
        let inner = Self::stack(
            std::iter::once(self.line(self.heading)).chain(blocks),
            BLOCK_SPACING * 2.0,
        );
        self.framed(inner)
    }

    fn education(&self) -> f32 {
        let studies = STUDIES.iter().map(|study| {
            Self::stack(
                [
                    self.line(self.body * 1.2),
                    self.line(self.body),
                    self.body_paragraph(study.detail),
                ],
                LINE_SPACING,
            )
        });
        let certificates = CERTIFICATES.iter().map(|_| self.line(self.body));
        let tech = TECH_STACK
            .iter()
            .map(|group| self.body_paragraph(&tech_line(group.category, group.items)));
        let inner = Self::stack(
            std::iter::once(self.line(self.heading))
                .chain(studies)
                .chain(std::iter::once(self.line(self.body * 1.2)))
                .chain(certificates)
                .chain(std::iter::once(self.line(self.body * 1.2)))
                .chain(tech),
            BLOCK_SPACING,
        );
        self.framed(inner)
    }

    /// Height shared by every project card, sized for the longest tagline.
    pub fn card_height(&self) -> f32 {
        let text_width = (self.card_width() - 2.0 * CARD_PADDING).max(self.body);
        let tagline = PROJECTS
            .iter()
            .map(|project| self.paragraph(project.tagline, self.body, text_width))
            .fold(0.0_f32, f32::max);
        let stack = PROJECTS
            .iter()
            .map(|project| self.paragraph(&project.stack.join(" · "), self.body * 0.8, text_width))
            .fold(0.0_f32, f32::max);
        Self::stack(
            [self.line(self.body * 1.3), tagline, stack],
            LINE_SPACING,
        ) + 2.0 * CARD_PADDING
    }

    fn projects(&self) -> f32 {
        let rows = PROJECTS.len().div_ceil(self.card_columns());
        let cards = (0..rows).map(|_| self.card_height());
        let inner = Self::stack(
            std::iter::once(self.line(self.heading)).chain(cards),
            BLOCK_SPACING,
        );
        self.framed(inner)
    }

    /// The closing section fills a viewport so the page can scroll clear of projects.
    fn contact(&self, viewport_height: f32) -> f32 {
        let links = CONTACT.iter().map(|_| self.line(self.body));
        let inner = Self::stack(
            std::iter::once(self.line(self.heading)).chain(links),
            LINE_SPACING,
        );
        self.framed(inner).max(viewport_height)
    }
}

/// Blocks of a project case study, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CaseStudyBlock {
    Hero,
    Problem,
    Solution,
    Features,
    MoreFeatures,
    Impact,
    TechStack,
    Links,
}

impl Metrics {
    fn case_framed(&self, inner: f32) -> f32 {
        inner + 2.0 * CASE_BLOCK_PADDING_Y
    }

    fn subheading(&self) -> f32 {
        self.line(self.body * 1.2)
    }

    fn bullets<'a>(&'a self, lines: &'a [&'static str]) -> impl Iterator<Item = f32> + 'a {
        lines
            .iter()
            .map(|line| self.body_paragraph(&bullet_text(line)))
    }

    fn narrative(&self, narrative: &Narrative) -> f32 {
        Self::stack(
            [
                self.subheading(),
                self.paragraph(narrative.title, self.heading * 0.8, self.content_width),
                self.body_paragraph(narrative.description),
            ]
            .into_iter()
            .chain(self.bullets(narrative.points)),
            LINE_SPACING,
        )
    }

    /// Width of one impact column when `count` figures share the row.
    pub fn impact_column_width(&self, count: usize) -> f32 {
        let count = count.max(1) as f32;
        ((self.content_width - IMPACT_SPACING * (count - 1.0)) / count).max(self.body)
    }

    fn impact(&self, project: &Project) -> f32 {
        let width = self.impact_column_width(project.impact.len());
        let row = project
            .impact
            .iter()
            .map(|metric| {
                self.line(self.heading)
                    + IMPACT_LABEL_GAP
                    + self.paragraph(metric.label, self.body, width)
            })
            .fold(0.0_f32, f32::max);
        Self::stack([self.subheading(), row], LINE_SPACING)
    }

    fn case_block(&self, project: &Project, block: CaseStudyBlock) -> f32 {
        let inner = match block {
            CaseStudyBlock::Hero => Self::stack(
                [
                    self.paragraph(project.name, self.hero, self.content_width),
                    self.paragraph(project.tagline, self.body * 1.2, self.content_width),
                ],
                BLOCK_SPACING,
            ),
            CaseStudyBlock::Problem => self.narrative(&project.problem),
            CaseStudyBlock::Solution => self.narrative(&project.solution),
            CaseStudyBlock::Features => Self::stack(
                std::iter::once(self.subheading()).chain(project.features.iter().map(|feature| {
                    self.paragraph(feature.title, self.body * 1.1, self.content_width)
                        + self.body_paragraph(feature.description)
                })),
                LINE_SPACING,
            ),
            CaseStudyBlock::MoreFeatures => Self::stack(
                std::iter::once(self.subheading()).chain(self.bullets(project.additional_features)),
                LINE_SPACING,
            ),
            CaseStudyBlock::Impact => self.impact(project),
            CaseStudyBlock::TechStack => Self::stack(
                [
                    self.subheading(),
                    self.body_paragraph(&project.stack.join(" · ")),
                ],
                LINE_SPACING,
            ),
            CaseStudyBlock::Links => Self::stack(
                std::iter::once(self.subheading()).chain(
                    project
                        .links
                        .iter()
                        .map(|link| self.body_paragraph(&link_text(link))),
                ),
                LINE_SPACING,
            ),
        };
        self.case_framed(inner)
    }
}

pub(super) fn bullet_text(line: &str) -> String {
    format!("• {line}")
}

pub(super) fn link_text(link: &ProjectLink) -> String {
    format!("{}: {}", link.kind.label(), link.url)
}

pub(super) fn tech_line(category: &str, items: &[&str]) -> String {
    format!("{category}: {}", items.join(", "))
}

/// Estimated height of every home-page section, top to bottom.
pub(super) fn estimate_section_heights(
    font_size: u32,
    viewport_width: f32,
    viewport_height: f32,
) -> Vec<(SectionId, f32)> {
    let metrics = Metrics::new(font_size, viewport_width);
    vec![
        (SectionId::Home, metrics.home(viewport_height)),
        (SectionId::Work, metrics.work()),
        (SectionId::Education, metrics.education()),
        (SectionId::Projects, metrics.projects()),
        (SectionId::Contact, metrics.contact(viewport_height)),
    ]
}

pub(super) fn build_layout(
    font_size: u32,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<SectionLayout, LayoutError> {
    SectionLayout::from_heights(&estimate_section_heights(
        font_size,
        viewport_width,
        viewport_height,
    ))
}

/// Blocks shown for `project` with their heights. Empty optional blocks are skipped.
pub(super) fn case_study_layout(
    project: &Project,
    font_size: u32,
    viewport_width: f32,
) -> Vec<(CaseStudyBlock, f32)> {
    let metrics = Metrics::new(font_size, viewport_width);
    let mut blocks = vec![
        CaseStudyBlock::Hero,
        CaseStudyBlock::Problem,
        CaseStudyBlock::Solution,
        CaseStudyBlock::Features,
    ];
    if !project.additional_features.is_empty() {
        blocks.push(CaseStudyBlock::MoreFeatures);
    }
    if !project.impact.is_empty() {
        blocks.push(CaseStudyBlock::Impact);
    }
    blocks.push(CaseStudyBlock::TechStack);
    if !project.links.is_empty() {
        blocks.push(CaseStudyBlock::Links);
    }
    blocks
        .into_iter()
        .map(|block| (block, metrics.case_block(project, block)))
        .collect()
}

/// Offset and height of the impact block on the case-study page.
pub(super) fn impact_span(
    project: &Project,
    font_size: u32,
    viewport_width: f32,
) -> Option<(f32, f32)> {
    let mut offset = 0.0;
    for (block, height) in case_study_layout(project, font_size, viewport_width) {
        if block == CaseStudyBlock::Impact {
            return Some((offset, height));
        }
        offset += height;
    }
    None
}
