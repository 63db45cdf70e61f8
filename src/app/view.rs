use super::layout::{
    BLOCK_SPACING, CARD_PADDING, CASE_BLOCK_PADDING_Y, CaseStudyBlock, IMPACT_LABEL_GAP,
    IMPACT_SPACING, LINE_SPACING, Metrics, SECTION_PADDING_X, SECTION_PADDING_Y, bullet_text,
    case_study_layout, link_text, tech_line,
};
use super::messages::Message;
use super::state::{
    App, NAVBAR_HEIGHT_PX, PAGE_SCROLL_ID, PROGRESS_BAR_HEIGHT_PX, PROJECT_SCROLL_ID,
};
use crate::config::ThemeMode;
use crate::content::{
    CERTIFICATES, CONTACT, JOBS, Narrative, PROFILE, PROJECTS, Project, STUDIES, TECH_STACK,
};
use crate::theme::{Palette, brand_color};
use folio_core::SectionId;
use iced::alignment::Vertical;
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, progress_bar, row, scrollable, text,
};
use iced::{Color, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        match self.route.project() {
            Some(project) => self.project_view(project),
            None => self.home_view(),
        }
    }

    fn palette(&self) -> Palette {
        Palette::from(self.config.theme)
    }

    fn metrics(&self) -> Metrics {
        Metrics::new(self.config.font_size, self.viewport.width)
    }

    fn home_view(&self) -> Element<'_, Message> {
        let progress = progress_bar(0.0..=100.0, self.page_progress())
            .height(Length::Fixed(PROGRESS_BAR_HEIGHT_PX));

        let sections = self
            .layout
            .sections()
            .iter()
            .map(|section| {
                container(self.section_body(section.id))
                    .width(Length::Fill)
                    .height(Length::Fixed(section.height()))
                    .padding([SECTION_PADDING_Y, SECTION_PADDING_X])
                    .clip(true)
                    .into()
            })
            .collect::<Vec<Element<'_, Message>>>();

        let page = scrollable(Column::with_children(sections).width(Length::Fill))
            .id(PAGE_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_width: viewport.bounds().width,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .height(Length::Fill);

        column![progress, self.navbar(), page]
            .height(Length::Fill)
            .into()
    }

    fn navbar(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let active = self.active_section();
        let entries = self
            .nav_entries()
            .into_iter()
            .map(|id| {
                let label = text(id.title()).size(self.config.font_size as f32);
                let entry = button(label).on_press(Message::NavigateTo(id));
                if Some(id) == active {
                    entry.style(button::primary).into()
                } else {
                    entry.style(button::text).into()
                }
            })
            .collect::<Vec<Element<'_, Message>>>();

        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };

        let bar = row![
            text(PROFILE.name)
                .size(self.config.font_size as f32 * 1.2)
                .color(palette.accent),
            horizontal_space(),
            Row::with_children(entries).spacing(4),
            button(theme_label)
                .style(button::secondary)
                .on_press(Message::ToggleTheme),
        ]
        .spacing(16)
        .align_y(Vertical::Center);

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(NAVBAR_HEIGHT_PX))
            .padding([0.0, SECTION_PADDING_X])
            .align_y(Vertical::Center)
            .into()
    }

    fn section_body(&self, id: SectionId) -> Element<'_, Message> {
        let palette = self.palette().faded(self.animations.progress_for(id));
        let metrics = self.metrics();
        match id {
            SectionId::Home => self.hero(palette, metrics),
            SectionId::Work => self.work(palette, metrics),
            SectionId::Education => self.education(palette, metrics),
            SectionId::Projects => self.projects(palette, metrics),
            SectionId::Contact => self.contact(palette, metrics),
        }
    }

    fn hero(&self, palette: Palette, metrics: Metrics) -> Element<'_, Message> {
        column![
            text(PROFILE.name).size(metrics.hero).color(palette.text),
            text(PROFILE.role)
                .size(metrics.heading * 0.6)
                .color(palette.accent),
            text(PROFILE.tagline).size(metrics.body).color(palette.text),
            text(PROFILE.bio).size(metrics.body).color(palette.muted),
            text(PROFILE.location)
                .size(metrics.body)
                .color(palette.muted),
        ]
        .spacing(BLOCK_SPACING)
        .into()
    }

    fn work(&self, palette: Palette, metrics: Metrics) -> Element<'_, Message> {
        let mut blocks: Vec<Element<'_, Message>> = vec![heading(SectionId::Work, palette, metrics)];
        for job in JOBS {
            let mut block = column![
                text(job.role).size(metrics.body * 1.2).color(palette.text),
                text(format!("{} · {}", job.company, job.period))
                    .size(metrics.body)
                    .color(palette.accent),
            ]
            .spacing(LINE_SPACING);
            for line in job.highlights {
                block = block.push(bullet(line, palette, metrics));
            }
            blocks.push(block.into());
        }

        Column::with_children(blocks)
            .spacing(BLOCK_SPACING * 2.0)
            .into()
    }

    fn education(&self, palette: Palette, metrics: Metrics) -> Element<'_, Message> {
        let mut blocks: Vec<Element<'_, Message>> =
            vec![heading(SectionId::Education, palette, metrics)];
        for study in STUDIES {
            blocks.push(
                column![
                    text(study.qualification)
                        .size(metrics.body * 1.2)
                        .color(palette.text),
                    text(format!("{} · {}", study.institution, study.period))
                        .size(metrics.body)
                        .color(palette.accent),
                    text(study.detail).size(metrics.body).color(palette.muted),
                ]
                .spacing(LINE_SPACING)
                .into(),
            );
        }

        blocks.push(subheading("Certificates", palette.text, metrics));
        for cert in CERTIFICATES {
            let line = format!("{} · {} ({})", cert.name, cert.issuer, cert.year);
            blocks.push(text(line).size(metrics.body).color(palette.muted).into());
        }

        blocks.push(subheading("Tech Stack", palette.text, metrics));
        for group in TECH_STACK {
            blocks.push(
                text(tech_line(group.category, group.items))
                    .size(metrics.body)
                    .color(palette.muted)
                    .into(),
            );
        }

        Column::with_children(blocks).spacing(BLOCK_SPACING).into()
    }

    fn projects(&self, palette: Palette, metrics: Metrics) -> Element<'_, Message> {
        let card_width = metrics.card_width();
        let card_height = metrics.card_height();
        let mut blocks: Vec<Element<'_, Message>> =
            vec![heading(SectionId::Projects, palette, metrics)];
        for chunk in PROJECTS.chunks(metrics.card_columns()) {
            let cards = chunk
                .iter()
                .map(|project| {
                    project_card(project, palette, metrics)
                        .width(Length::Fixed(card_width))
                        .height(Length::Fixed(card_height))
                        .into()
                })
                .collect::<Vec<Element<'_, Message>>>();
            blocks.push(Row::with_children(cards).spacing(BLOCK_SPACING).into());
        }

        Column::with_children(blocks).spacing(BLOCK_SPACING).into()
    }

    fn contact(&self, palette: Palette, metrics: Metrics) -> Element<'_, Message> {
        let mut blocks: Vec<Element<'_, Message>> =
            vec![heading(SectionId::Contact, palette, metrics)];
        for link in CONTACT {
            let line = format!("{}: {}", link.label, link.value);
            blocks.push(text(line).size(metrics.body).color(palette.muted).into());
        }
        Column::with_children(blocks).spacing(LINE_SPACING).into()
    }

    fn project_view(&self, project: &'static Project) -> Element<'_, Message> {
        let metrics = self.metrics();

        let others = PROJECTS
            .iter()
            .filter(|other| other.slug != project.slug)
            .map(|other| {
                button(text(other.name).size(metrics.body * 0.9))
                    .style(button::text)
                    .on_press(Message::OpenProject(other.slug))
                    .into()
            })
            .collect::<Vec<Element<'_, Message>>>();

        let header = row![
            button(text("← Back").size(metrics.body))
                .style(button::secondary)
                .on_press(Message::BackToProjects),
            horizontal_space(),
            Row::with_children(others).spacing(4),
        ]
        .spacing(16)
        .align_y(Vertical::Center);

        let blocks = case_study_layout(project, self.config.font_size, self.viewport.width)
            .into_iter()
            .map(|(block, height)| {
                container(self.case_study_block(project, block, metrics))
                    .width(Length::Fill)
                    .height(Length::Fixed(height))
                    .padding([CASE_BLOCK_PADDING_Y, SECTION_PADDING_X])
                    .clip(true)
                    .into()
            })
            .collect::<Vec<Element<'_, Message>>>();

        let page = scrollable(Column::with_children(blocks).width(Length::Fill))
            .id(PROJECT_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::ProjectScrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .height(Length::Fill);

        column![
            container(header)
                .width(Length::Fill)
                .height(Length::Fixed(NAVBAR_HEIGHT_PX))
                .padding([0.0, SECTION_PADDING_X])
                .align_y(Vertical::Center),
            page,
        ]
        .height(Length::Fill)
        .into()
    }

    fn case_study_block(
        &self,
        project: &'static Project,
        block: CaseStudyBlock,
        metrics: Metrics,
    ) -> Element<'_, Message> {
        let palette = self.palette();
        let brand = brand_color(project.brand_color);
        match block {
            CaseStudyBlock::Hero => column![
                text(project.name).size(metrics.hero).color(brand),
                text(project.tagline)
                    .size(metrics.body * 1.2)
                    .color(palette.text),
            ]
            .spacing(BLOCK_SPACING)
            .into(),
            CaseStudyBlock::Problem => {
                narrative("Problem", &project.problem, brand, palette, metrics)
            }
            CaseStudyBlock::Solution => {
                narrative("Solution", &project.solution, brand, palette, metrics)
            }
            CaseStudyBlock::Features => {
                let mut blocks: Vec<Element<'_, Message>> =
                    vec![subheading("Key Features", brand, metrics)];
                for feature in project.features {
                    blocks.push(
                        column![
                            text(feature.title)
                                .size(metrics.body * 1.1)
                                .color(palette.text),
                            text(feature.description)
                                .size(metrics.body)
                                .color(palette.muted),
                        ]
                        .into(),
                    );
                }
                Column::with_children(blocks).spacing(LINE_SPACING).into()
            }
            CaseStudyBlock::MoreFeatures => {
                let mut blocks: Vec<Element<'_, Message>> =
                    vec![subheading("More Features", brand, metrics)];
                for feature in project.additional_features {
                    blocks.push(bullet(feature, palette, metrics));
                }
                Column::with_children(blocks).spacing(LINE_SPACING).into()
            }
            CaseStudyBlock::Impact => {
                let mut figures = Row::new().spacing(IMPACT_SPACING).width(Length::Fill);
                let width = metrics.impact_column_width(project.impact.len());
                for metric in project.impact {
                    figures = figures.push(
                        column![
                            text(self.impact.display(metric.value).to_string())
                                .size(metrics.heading)
                                .color(brand),
                            text(metric.label).size(metrics.body).color(palette.muted),
                        ]
                        .spacing(IMPACT_LABEL_GAP)
                        .width(Length::Fixed(width)),
                    );
                }
                column![subheading("Impact", brand, metrics), figures]
                    .spacing(LINE_SPACING)
                    .into()
            }
            CaseStudyBlock::TechStack => column![
                subheading("Tech Stack", brand, metrics),
                text(project.stack.join(" · "))
                    .size(metrics.body)
                    .color(palette.muted),
            ]
            .spacing(LINE_SPACING)
            .into(),
            CaseStudyBlock::Links => {
                let mut blocks: Vec<Element<'_, Message>> =
                    vec![subheading("Links", brand, metrics)];
                for link in project.links {
                    blocks.push(
                        text(link_text(link))
                            .size(metrics.body)
                            .color(palette.accent)
                            .into(),
                    );
                }
                Column::with_children(blocks).spacing(LINE_SPACING).into()
            }
        }
    }
}

fn subheading<'a>(label: &'static str, color: Color, metrics: Metrics) -> Element<'a, Message> {
    text(label).size(metrics.body * 1.2).color(color).into()
}

fn bullet<'a>(line: &str, palette: Palette, metrics: Metrics) -> Element<'a, Message> {
    text(bullet_text(line))
        .size(metrics.body)
        .color(palette.muted)
        .into()
}

fn narrative<'a>(
    label: &'static str,
    story: &'static Narrative,
    brand: Color,
    palette: Palette,
    metrics: Metrics,
) -> Element<'a, Message> {
    let mut blocks: Vec<Element<'a, Message>> = vec![
        subheading(label, brand, metrics),
        text(story.title)
            .size(metrics.heading * 0.8)
            .color(palette.text)
            .into(),
        text(story.description)
            .size(metrics.body)
            .color(palette.muted)
            .into(),
    ];
    for point in story.points {
        blocks.push(bullet(point, palette, metrics));
    }
    Column::with_children(blocks).spacing(LINE_SPACING).into()
}

fn heading<'a>(id: SectionId, palette: Palette, metrics: Metrics) -> Element<'a, Message> {
    text(id.title())
        .size(metrics.heading)
        .color(palette.text)
        .into()
}

fn project_card<'a>(
    project: &'static Project,
    palette: Palette,
    metrics: Metrics,
) -> iced::widget::Button<'a, Message> {
    let brand = brand_color(project.brand_color);
    let content = column![
        text(project.name).size(metrics.body * 1.3).color(brand),
        text(project.tagline).size(metrics.body).color(palette.text),
        text(project.stack.join(" · "))
            .size(metrics.body * 0.8)
            .color(palette.muted),
    ]
    .spacing(LINE_SPACING);

    button(content)
        .padding(CARD_PADDING)
        .style(button::secondary)
        .on_press(Message::OpenProject(project.slug))
}
