//! Press background decoration
//!
//! Reusable decoration for any pressable content: a neutral circle fades in
//! behind the content and the whole composite scales down while pressed.
//!
//! | State   | circle opacity | scale |
//! |---------|----------------|-------|
//! | Idle    | 0.0            | 1.0   |
//! | Pressed | 0.3            | 0.86  |
//!
//! The circle appears immediately on press but lingers for one feedback
//! duration after release before fading. The scale follows the raw pressed
//! state without delay in both directions.

use iced::time::{Duration, Instant};
use iced::widget::{Space, container, stack};
use iced::{Background, Border, Element, Length};

use crate::ui::animation::{Curve, Tween};
use crate::ui::primitives::ScaleEffect;
use crate::ui::theme;

/// Duration of every press feedback transition
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(220);
/// Scale of the composite while pressed
pub const PRESSED_SCALE: f32 = 0.86;
/// Circle opacity while pressed
pub const TINT_OPACITY: f32 = 0.3;
/// Space between the circle's edge and the content
pub const CONTENT_PADDING: f32 = 12.0;

/// Press feedback state
#[derive(Debug)]
pub struct PressBackground {
    /// Mirrors the content's pressed state; the tint follows with a lag
    background_visible: bool,
    /// Circle opacity, 0.0 to `TINT_OPACITY`
    background: Tween,
    /// Composite scale, `PRESSED_SCALE` to 1.0
    scale: Tween,
}

impl Default for PressBackground {
    fn default() -> Self {
        Self::new()
    }
}

impl PressBackground {
    pub fn new() -> Self {
        Self {
            background_visible: false,
            background: Tween::new(0.0),
            scale: Tween::new(1.0),
        }
    }

    #[cfg(test)]
    pub fn is_background_visible(&self) -> bool {
        self.background_visible
    }

    /// Follow the content's pressed state
    pub fn set_pressed(&mut self, pressed: bool, now: Instant) {
        if self.background_visible == pressed {
            return;
        }
        self.background_visible = pressed;

        let ease = Curve::ease_out(FEEDBACK_DURATION);
        if pressed {
            self.scale.go(PRESSED_SCALE, ease, now);
            self.background.go(TINT_OPACITY, ease, now);
        } else {
            self.scale.go(1.0, ease, now);
            self.background
                .go_after(0.0, ease, FEEDBACK_DURATION, now);
        }
    }

    /// Circle opacity at `now`
    pub fn background_opacity(&self, now: Instant) -> f32 {
        self.background.value(now).clamp(0.0, TINT_OPACITY)
    }

    /// Composite scale at `now`
    pub fn scale(&self, now: Instant) -> f32 {
        self.scale.value(now).clamp(PRESSED_SCALE, 1.0)
    }

    /// Check if press feedback is still in flight
    pub fn is_animating(&self, now: Instant) -> bool {
        self.background.is_animating(now) || self.scale.is_animating(now)
    }

    /// Settle finished transitions; call on animation frames
    pub fn cleanup_completed(&mut self, now: Instant) {
        self.background.cleanup_completed(now);
        self.scale.cleanup_completed(now);
    }

    /// Decorate `content` inside a `size` x `size` square
    pub fn view<'a, Message: 'a>(
        &self,
        content: impl Into<Element<'a, Message>>,
        size: f32,
        now: Instant,
    ) -> Element<'a, Message> {
        let opacity = self.background_opacity(now);

        let circle = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |theme| container::Style {
                background: Some(Background::Color(theme::with_opacity(
                    theme::text_secondary(theme),
                    opacity,
                ))),
                border: Border::default().rounded(size / 2.0),
                ..Default::default()
            });

        let content = container(content)
            .padding(CONTENT_PADDING)
            .center(Length::Fill);

        let composite = container(stack![circle, content])
            .width(size)
            .height(size);

        ScaleEffect::new(composite, self.scale(now)).into()
    }
}
