use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NavigateTo(section) => self.handle_navigate_to(section, &mut effects),
            Message::Scrolled {
                offset_y,
                viewport_width,
                viewport_height,
                content_height,
            } => self.handle_scrolled(
                offset_y,
                viewport_width,
                viewport_height,
                content_height,
                &mut effects,
            ),
            Message::ProjectScrolled {
                offset_y,
                viewport_height,
            } => self.handle_project_scrolled(offset_y, viewport_height, &mut effects),
            Message::Frame(now) => {
                self.handle_frame(now, &mut effects);
                self.advance_impact_counter(now);
            }
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::OpenProject(slug) => self.handle_open_project(slug, &mut effects),
            Message::BackToProjects => self.handle_back_to_projects(&mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }
}
