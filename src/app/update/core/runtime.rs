use super::super::super::messages::Message;
use super::super::super::state::{App, PAGE_SCROLL_ID, PROJECT_SCROLL_ID};
use super::super::Effect;
use crate::config::save_config;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::{info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                self.persist_config();
                Task::none()
            }
            Effect::ScrollTo(y) => {
                scrollable::scroll_to(PAGE_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
            }
            Effect::ResetProjectScroll => scrollable::scroll_to(
                PROJECT_SCROLL_ID.clone(),
                AbsoluteOffset { x: 0.0, y: 0.0 },
            ),
            Effect::QuitSafely => {
                self.navigator.cancel(&mut self.animations);
                self.persist_config();
                info!("Exiting");
                iced::exit()
            }
        }
    }

    fn persist_config(&self) {
        if let Err(err) = save_config(&self.config_path, &self.config) {
            warn!(path = %self.config_path.display(), "Failed to save config: {err:#}");
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status != event::Status::Captured =>
        {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
