//! Parallax grid layer (stateless).

use mote_core::{Palette, Pointer, Viewport};
use ratatui::widgets::canvas::{Context, Line};

use crate::color;

/// Distance between grid lines in px.
const PITCH: f64 = 50.0;

/// Grid line alpha.
const ALPHA: f64 = 0.15;

/// Fraction of pointer motion the grid follows.
const PARALLAX: f64 = 0.01;

/// Offset of the first grid line on one axis for a pointer coordinate.
pub(crate) fn parallax_offset(pointer_coord: f64) -> f64 {
    (pointer_coord * PARALLAX).rem_euclid(PITCH)
}

/// Stroke the full-viewport grid, shifted slightly with the pointer.
pub fn draw(ctx: &mut Context<'_>, viewport: Viewport, pointer: Pointer, palette: &Palette) {
    let faded = color::blend(palette.grid, ALPHA, palette.backdrop);

    let mut x = parallax_offset(pointer.x);
    while x <= viewport.width {
        ctx.draw(&Line {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: viewport.height,
            color: faded,
        });
        x += PITCH;
    }

    let mut y = parallax_offset(pointer.y);
    while y <= viewport.height {
        ctx.draw(&Line {
            x1: 0.0,
            y1: y,
            x2: viewport.width,
            y2: y,
            color: faded,
        });
        y += PITCH;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_a_hundredth_of_the_pointer() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(100.0), 1.0);
        assert_eq!(parallax_offset(2500.0), 25.0);
    }

    #[test]
    fn offset_wraps_at_the_pitch() {
        assert_eq!(parallax_offset(5000.0), 0.0);
        assert_eq!(parallax_offset(5100.0), 1.0);
    }

    #[test]
    fn offset_is_non_negative_for_the_offscreen_sentinel() {
        let offset = parallax_offset(Pointer::OFFSCREEN.x);
        assert!((0.0..PITCH).contains(&offset));
    }
}
