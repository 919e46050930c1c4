//! Opacity emulation for terminals.
//!
//! Terminal cells have no alpha channel, so fading is rendered by mixing an
//! entity's color toward the theme backdrop color.

use ratatui::style::Color;

/// Linearly blend `color` toward `backdrop`.
///
/// `alpha` 1.0 keeps the color, 0.0 disappears into the backdrop. Values
/// outside [0, 1] are clamped. Non-RGB colors pass through unchanged.
pub fn blend(color: Color, alpha: f64, backdrop: Color) -> Color {
    let (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) = (color, backdrop) else {
        return color;
    };
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| (f64::from(bg) + (f64::from(fg) - f64::from(bg)) * alpha) as u8;
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}
