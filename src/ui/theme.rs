//! Theme colors for Rebound
//! Supports both dark and light modes with a small neutral palette

use iced::color;
use iced::widget::container;
use iced::{Background, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const TEXT_SECONDARY: Color = color!(0xebebf5);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0x3c3c43);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get secondary (neutral) color based on theme
///
/// Used at partial opacity for press feedback tints.
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme; also used for icon glyphs
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Multiply a color's alpha by `opacity`
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Full-window background container
pub fn window_container(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
        assert_ne!(text_secondary(&Theme::Dark), text_secondary(&Theme::Light));
    }

    #[test]
    fn test_with_opacity() {
        let tinted = with_opacity(dark::TEXT_SECONDARY, 0.3);
        assert!((tinted.a - 0.3).abs() < 1e-6);
        assert_eq!(tinted.r, dark::TEXT_SECONDARY.r);

        assert_eq!(with_opacity(Color::WHITE, 2.0).a, 1.0);
        assert_eq!(with_opacity(Color::WHITE, -1.0).a, 0.0);
    }
}
