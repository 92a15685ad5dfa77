//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

pub use message::Message;
pub use state::App;

use crate::features::Settings;

impl App {
    /// Create new application instance
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        tracing::info!(
            "Starting with control width {} ({} theme)",
            settings.control_width(),
            if settings.dark_mode { "dark" } else { "light" }
        );
        (Self::with_settings(settings), Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        "Rebound".to_string()
    }

    /// Frame subscription, active only while something animates
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::time::Instant;

        if self.has_active_animations(Instant::now()) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }
}
