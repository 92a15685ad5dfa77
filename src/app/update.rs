//! Message update handlers - thin dispatcher delegating to submodules

mod control;

use iced::Task;
use iced::time::Instant;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();

        if let Some(task) = self.handle_control(&message, now) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
