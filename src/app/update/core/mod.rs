mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use iced::event;
use iced::{Subscription, Task};

impl App {
    pub fn subscription(_app: &App) -> Subscription<Message> {
        event::listen_with(runtime::runtime_event_to_message)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        self.run_effects(effects)
    }

    pub(in crate::app) fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
