//! Control message handlers (press state, taps, animation frames)

use iced::Task;
use iced::time::Instant;

use crate::app::{App, Message};

impl App {
    /// Handle control-related messages
    pub fn handle_control(&mut self, message: &Message, now: Instant) -> Option<Task<Message>> {
        match message {
            Message::PressChanged(pressed) => {
                tracing::debug!("Press state changed: pressed={}", pressed);
                self.press.set_pressed(*pressed, now);
                Some(Task::none())
            }

            Message::Tapped => {
                if self.button.tap(now) {
                    tracing::debug!("Tap cycle started");
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.tick_animations(now);
                Some(Task::none())
            }
        }
    }
}
