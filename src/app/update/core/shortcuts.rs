use super::super::super::messages::Message;
use super::super::super::state::App;
use crate::gallery::Direction;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Lightbox keys. Nothing is bound while the lightbox is closed, and
    /// modified presses pass through.
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        if !self.lightbox_open() || Self::has_command_modifier(modifiers) {
            return None;
        }
        match key.as_ref() {
            Key::Named(key::Named::Escape) => Some(Message::CloseLightbox(None)),
            Key::Named(key::Named::ArrowLeft) => {
                Some(Message::NavigateLightbox(Direction::Previous))
            }
            Key::Named(key::Named::ArrowRight) => Some(Message::NavigateLightbox(Direction::Next)),
            _ => None,
        }
    }

    fn has_command_modifier(modifiers: Modifiers) -> bool {
        modifiers.control() || modifiers.alt() || modifiers.logo()
    }
}
