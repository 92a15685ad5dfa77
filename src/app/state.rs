// src/app/state.rs
//! Application state definitions

use iced::time::Instant;

use crate::features::Settings;
use crate::ui::widgets::press_background::CONTENT_PADDING;
use crate::ui::widgets::{AnimatedButton, PressBackground};

/// Main application state
pub struct App {
    /// Preferences loaded at startup
    pub settings: Settings,
    /// Tap animation of the glyph row
    pub button: AnimatedButton,
    /// Press feedback wrapped around the button
    pub press: PressBackground,
}

impl App {
    /// Build state from loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            button: AnimatedButton::new(),
            press: PressBackground::new(),
        }
    }

    /// Outer size of the decorated control
    pub fn control_size(&self) -> f32 {
        self.settings.control_width()
    }

    /// Width of the glyph row inside the press padding
    pub fn glyph_row_width(&self) -> f32 {
        (self.control_size() - 2.0 * CONTENT_PADDING).max(0.0)
    }

    /// Check if any animation is currently active
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.button.is_animating(now) || self.press.is_animating(now)
    }

    /// Advance chained animations and drop finished ones
    /// Call this on every AnimationTick
    pub fn tick_animations(&mut self, now: Instant) {
        self.button.tick(now);
        self.press.cleanup_completed(now);
    }
}
