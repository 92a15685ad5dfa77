//! Animated play button
//!
//! Three play glyphs in a row. At rest the first glyph is collapsed, so two
//! glyphs fill the width. A tap springs the first glyph in while the last
//! one collapses and fades, then snaps back to rest once the spring has
//! logically completed.
//!
//! ```text
//! rest:       [ ][ ▶ ][ ▶ ]      glyph widths 0, half, half
//! activated:  [ ▶ ][ ▶ ][.]      glyph widths half, half, 0.5
//! ```

use iced::time::{Duration, Instant};
use iced::widget::{Row, container, svg};
use iced::{Alignment, Element, Length};

use crate::ui::animation::{Curve, Tween};
use crate::ui::{icons, theme};

/// Perceptual duration of the entrance spring
pub const BOUNCE_DURATION: Duration = Duration::from_millis(400);
/// Bounce added on top of the bouncy preset
pub const EXTRA_BOUNCE: f32 = 0.2;
/// Duration of the snap back to rest
pub const SNAP_DURATION: Duration = Duration::from_millis(10);

/// Width the trailing glyph shrinks to while activated
const COLLAPSED_WIDTH: f32 = 0.5;

/// Width and opacity of one glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub width: f32,
    pub opacity: f32,
}

impl Glyph {
    const fn new(width: f32, opacity: f32) -> Self {
        Self { width, opacity }
    }

    fn lerp(self, other: Self, progress: f32) -> Self {
        Self {
            width: (self.width + (other.width - self.width) * progress).max(0.0),
            opacity: (self.opacity + (other.opacity - self.opacity) * progress).clamp(0.0, 1.0),
        }
    }
}

/// Glyph layout for a settled `activated` flag, `half` being half the row width
pub fn glyph_layout(activated: bool, half: f32) -> [Glyph; 3] {
    if activated {
        [
            Glyph::new(half, 1.0),
            Glyph::new(half, 1.0),
            Glyph::new(COLLAPSED_WIDTH, 0.0),
        ]
    } else {
        [
            Glyph::new(0.0, 0.0),
            Glyph::new(half, 1.0),
            Glyph::new(half, 1.0),
        ]
    }
}

/// Glyph layout part-way between rest (`0.0`) and activated (`1.0`)
///
/// Progress past `1.0` (spring overshoot) extrapolates; widths never go
/// negative and opacities stay within `[0, 1]`.
pub fn interpolated_layout(half: f32, progress: f32) -> [Glyph; 3] {
    let rest = glyph_layout(false, half);
    let activated = glyph_layout(true, half);
    [
        rest[0].lerp(activated[0], progress),
        rest[1].lerp(activated[1], progress),
        rest[2].lerp(activated[2], progress),
    ]
}

/// Where the button is in its tap cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Rest,
    /// Springing towards the activated layout
    Bouncing,
    /// Snapping back to rest after the spring completed
    SnappingBack,
}

/// Tap animation state
#[derive(Debug)]
pub struct AnimatedButton {
    activated: bool,
    phase: Phase,
    /// 0.0 = rest layout, 1.0 = activated layout
    progress: Tween,
}

impl Default for AnimatedButton {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimatedButton {
    pub fn new() -> Self {
        Self {
            activated: false,
            phase: Phase::Rest,
            progress: Tween::new(0.0),
        }
    }

    #[cfg(test)]
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start a tap cycle
    ///
    /// Taps that arrive while a cycle is still running are ignored, so the
    /// entrance and snap-back animations never interleave. Returns whether
    /// the tap started a cycle.
    pub fn tap(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Rest {
            tracing::debug!("Tap ignored, button is {:?}", self.phase);
            return false;
        }

        self.activated = true;
        self.phase = Phase::Bouncing;
        self.progress
            .go(1.0, Curve::bouncy(BOUNCE_DURATION, EXTRA_BOUNCE), now);
        true
    }

    /// Advance the tap cycle; call on every animation frame
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Bouncing if self.progress.is_complete(now) => {
                self.activated = false;
                self.phase = Phase::SnappingBack;
                self.progress.go(0.0, Curve::linear(SNAP_DURATION), now);
            }
            Phase::SnappingBack if !self.progress.is_animating(now) => {
                self.phase = Phase::Rest;
                self.progress.cleanup_completed(now);
            }
            _ => {}
        }
    }

    /// Check if a tap cycle still needs frames
    pub fn is_animating(&self, now: Instant) -> bool {
        self.phase != Phase::Rest || self.progress.is_animating(now)
    }

    /// Glyph layout at `now` for a row `2 * half` wide
    pub fn glyphs(&self, half: f32, now: Instant) -> [Glyph; 3] {
        interpolated_layout(half, self.progress.value(now))
    }
}

/// Build the glyph row; `width` is the row width the layout was computed for
pub fn view<'a, Message: 'a>(glyphs: [Glyph; 3], width: f32) -> Element<'a, Message> {
    let row = Row::with_children(glyphs.into_iter().map(glyph))
        .spacing(0.0)
        .height(Length::Fill)
        .align_y(Alignment::Center);

    container(row)
        .width(width)
        .height(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn glyph<'a, Message: 'a>(glyph: Glyph) -> Element<'a, Message> {
    svg(svg::Handle::from_memory(icons::PLAY_FILL.as_bytes()))
        .width(glyph.width)
        .height(Length::Fill)
        .style(move |theme, _status| svg::Style {
            color: Some(theme::with_opacity(theme::text_primary(theme), glyph.opacity)),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: f32 = 23.0;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_rest_layout() {
        let [first, second, third] = glyph_layout(false, HALF);
        assert_eq!(first, Glyph::new(0.0, 0.0));
        assert_eq!(second.width, HALF);
        assert_eq!(third, Glyph::new(HALF, 1.0));
    }

    #[test]
    fn test_activated_layout() {
        let [first, second, third] = glyph_layout(true, HALF);
        assert_eq!(first, Glyph::new(HALF, 1.0));
        assert_eq!(second.width, HALF);
        // The trailing glyph collapses to a fixed sliver, not to half
        assert_eq!(third, Glyph::new(0.5, 0.0));
    }

    #[test]
    fn test_interpolation_endpoints_match_layouts() {
        assert_eq!(interpolated_layout(HALF, 0.0), glyph_layout(false, HALF));
        assert_eq!(interpolated_layout(HALF, 1.0), glyph_layout(true, HALF));
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let [first, second, third] = interpolated_layout(HALF, 1.2);
        assert!(first.width > HALF);
        assert_eq!(first.opacity, 1.0);
        assert_eq!(second.width, HALF);
        assert!(third.width >= 0.0);
        assert_eq!(third.opacity, 0.0);

        let [first, _, third] = interpolated_layout(HALF, -0.2);
        assert_eq!(first.width, 0.0);
        assert_eq!(third.opacity, 1.0);
    }

    #[test]
    fn test_new_button_rests() {
        let now = Instant::now();
        let button = AnimatedButton::new();
        assert!(!button.is_activated());
        assert_eq!(button.phase(), Phase::Rest);
        assert!(!button.is_animating(now));
        assert_eq!(button.glyphs(HALF, now), glyph_layout(false, HALF));
    }

    #[test]
    fn test_tap_cycle_returns_to_rest() {
        let t0 = Instant::now();
        let mut button = AnimatedButton::new();

        assert!(button.tap(t0));
        assert!(button.is_activated());
        assert_eq!(button.phase(), Phase::Bouncing);

        // Mid-bounce the first glyph has grown in
        button.tick(t0 + ms(200));
        assert_eq!(button.phase(), Phase::Bouncing);
        assert!(button.glyphs(HALF, t0 + ms(200))[0].width > HALF / 2.0);

        // Spring logically complete: snap back starts
        button.tick(t0 + ms(400));
        assert!(!button.is_activated());
        assert_eq!(button.phase(), Phase::SnappingBack);

        button.tick(t0 + ms(410));
        assert_eq!(button.phase(), Phase::Rest);
        assert!(!button.is_animating(t0 + ms(410)));
        assert_eq!(button.glyphs(HALF, t0 + ms(410)), glyph_layout(false, HALF));
    }

    #[test]
    fn test_frames_at_sixty_hz_complete_cycle() {
        let t0 = Instant::now();
        let mut button = AnimatedButton::new();
        button.tap(t0);

        let mut now = t0;
        for _ in 0..60 {
            now += ms(16);
            button.tick(now);
        }

        assert_eq!(button.phase(), Phase::Rest);
        assert!(!button.is_activated());
        assert_eq!(button.glyphs(HALF, now), glyph_layout(false, HALF));
    }

    #[test]
    fn test_retap_while_animating_is_ignored() {
        let t0 = Instant::now();
        let mut button = AnimatedButton::new();
        button.tap(t0);

        assert!(!button.tap(t0 + ms(100)));
        assert_eq!(button.phase(), Phase::Bouncing);

        button.tick(t0 + ms(400));
        assert!(!button.tap(t0 + ms(405)));
        assert_eq!(button.phase(), Phase::SnappingBack);

        button.tick(t0 + ms(420));
        assert!(button.tap(t0 + ms(430)));
        assert_eq!(button.phase(), Phase::Bouncing);
    }
}
