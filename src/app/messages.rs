use folio_core::SectionId;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(SectionId),
    Scrolled {
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    },
    Frame(Instant),
    WindowResized {
        width: f32,
        height: f32,
    },
    ProjectScrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    OpenProject(&'static str),
    BackToProjects,
    ToggleTheme,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    SafeQuit,
}
