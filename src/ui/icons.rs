//! SVG icon sources
//!
//! Icons are template images: their fill is replaced by the `svg::Style`
//! color at draw time.

/// Filled play triangle with slightly rounded corners
pub const PLAY_FILL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20.1 24"><path fill="black" d="M0 2.6C0 1.05 1.68 0.09 3.02 0.87L19.02 10.27C20.34 11.04 20.34 12.96 19.02 13.73L3.02 23.13C1.68 23.91 0 22.95 0 21.4Z"/></svg>"#;
