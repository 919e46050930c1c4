//! Stationary geometric glyphs (stateful layer).
//!
//! Shapes never move after spawn; only their rotation and opacity respond
//! to the pointer. Spawn positions follow a jittered grid so coverage stays
//! roughly even instead of clumping the way a uniform scatter would.

use std::f64::consts::SQRT_2;

use mote_core::{Palette, Pointer, Viewport};
use rand::Rng;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Context, Line};

use crate::color;

/// The six glyph outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Square,
    Hexagon,
    Diamond,
    Circle,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Hexagon,
        ShapeKind::Diamond,
        ShapeKind::Circle,
        ShapeKind::Star,
    ];
}

/// Tuning for the shape layer. Fixed at compile time; tests build variants
/// directly.
#[derive(Debug, Clone, Copy)]
pub struct ShapeSettings {
    /// Population size.
    pub count: usize,
    /// Glyph size range in px (full extent, not radius).
    pub min_size: f64,
    pub max_size: f64,
    /// Band that opacity easing clamps to in both directions.
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Rotation speed in degrees per frame away from the pointer.
    pub base_rotation: f64,
    /// Peak rotation speed in degrees per frame with the pointer on top.
    pub mouse_rotation: f64,
    /// Per-frame opacity steps toward max (near the pointer) and min.
    pub opacity_gain: f64,
    pub opacity_decay: f64,
    /// Distance within which the pointer speeds up rotation.
    pub rotation_radius: f64,
    /// Distance within which the pointer brightens the glyph.
    pub opacity_radius: f64,
    /// Spawn grid dimensions.
    pub grid_cols: usize,
    pub grid_rows: usize,
    /// Fraction of a cell's extent the spawn jitter may cover.
    pub jitter: f64,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            count: 150,
            min_size: 15.0,
            max_size: 40.0,
            min_opacity: 0.05,
            max_opacity: 0.3,
            base_rotation: 0.2,
            mouse_rotation: 2.0,
            opacity_gain: 0.01,
            opacity_decay: 0.008,
            rotation_radius: 200.0,
            opacity_radius: 150.0,
            grid_cols: 15,
            grid_rows: 10,
            jitter: 0.6,
        }
    }
}

/// One decorative glyph.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Center position, immutable after spawn.
    pub x: f64,
    pub y: f64,
    /// Accumulated rotation in degrees, unbounded.
    pub rotation: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: Color,
    pub kind: ShapeKind,
}

/// Seed a full shape population on a jittered grid over the viewport.
pub fn seed<R: Rng>(
    settings: &ShapeSettings,
    viewport: Viewport,
    palette: &Palette,
    rng: &mut R,
) -> Vec<Shape> {
    let cell_w = viewport.width / settings.grid_cols as f64;
    let cell_h = viewport.height / settings.grid_rows as f64;

    (0..settings.count)
        .map(|i| {
            let col = i % settings.grid_cols;
            let row = (i / settings.grid_cols) % settings.grid_rows;
            let jitter_x = rng.gen_range(-0.5..=0.5) * cell_w * settings.jitter;
            let jitter_y = rng.gen_range(-0.5..=0.5) * cell_h * settings.jitter;
            Shape {
                x: (col as f64 + 0.5) * cell_w + jitter_x,
                y: (row as f64 + 0.5) * cell_h + jitter_y,
                rotation: rng.gen_range(0.0..360.0),
                size: rng.gen_range(settings.min_size..=settings.max_size),
                opacity: settings.min_opacity,
                color: palette.colors[rng.gen_range(0..palette.colors.len())],
                kind: ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())],
            }
        })
        .collect()
}

impl Shape {
    /// Advance one frame: spin faster and brighten near the pointer.
    pub fn update(&mut self, settings: &ShapeSettings, pointer: Pointer, interactive: bool) {
        let distance = pointer.distance_to(self.x, self.y);

        if interactive && distance < settings.rotation_radius {
            self.rotation += (settings.rotation_radius - distance) / settings.rotation_radius
                * settings.mouse_rotation;
        } else {
            self.rotation += settings.base_rotation;
        }

        if interactive && distance < settings.opacity_radius {
            self.opacity = (self.opacity + settings.opacity_gain).min(settings.max_opacity);
        } else {
            self.opacity = (self.opacity - settings.opacity_decay).max(settings.min_opacity);
        }
    }

    /// Stroke the outline at the current rotation. No fill.
    pub fn draw(&self, ctx: &mut Context<'_>, palette: &Palette) {
        let faded = color::blend(self.color, self.opacity, palette.backdrop);

        if self.kind == ShapeKind::Circle {
            ctx.draw(&Circle {
                x: self.x,
                y: self.y,
                radius: self.size / 2.0,
                color: faded,
            });
            return;
        }

        let vertices = self.vertices();
        for (i, &(x1, y1)) in vertices.iter().enumerate() {
            let (x2, y2) = vertices[(i + 1) % vertices.len()];
            ctx.draw(&Line {
                x1,
                y1,
                x2,
                y2,
                color: faded,
            });
        }
    }

    /// Outline vertices at the current rotation, centered on the glyph.
    /// Empty for circles, which stroke as a full arc instead.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        let r = self.size / 2.0;
        let at = |angle_deg: f64, radius: f64| {
            let a = (self.rotation + angle_deg).to_radians();
            (self.x + radius * a.cos(), self.y + radius * a.sin())
        };

        match self.kind {
            ShapeKind::Triangle => (0..3).map(|i| at(90.0 + 120.0 * f64::from(i), r)).collect(),
            // Corners sit at the diagonals so the edges stay axis-aligned
            // at rotation zero; the corner radius spans the half-diagonal.
            ShapeKind::Square => (0..4)
                .map(|i| at(45.0 + 90.0 * f64::from(i), r * SQRT_2))
                .collect(),
            ShapeKind::Hexagon => (0..6).map(|i| at(60.0 * f64::from(i), r)).collect(),
            ShapeKind::Diamond => (0..4).map(|i| at(90.0 * f64::from(i), r)).collect(),
            ShapeKind::Star => (0..10)
                .map(|i| {
                    let radius = if i % 2 == 0 { r } else { r * 0.5 };
                    at(90.0 + 36.0 * f64::from(i), radius)
                })
                .collect(),
            ShapeKind::Circle => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mote_core::Theme;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn viewport() -> Viewport {
        Viewport {
            width: 800.0,
            height: 600.0,
        }
    }

    fn palette() -> &'static Palette {
        Theme::Dark.palette()
    }

    #[test]
    fn zero_jitter_puts_the_first_shape_at_its_cell_center() {
        let settings = ShapeSettings {
            count: 1,
            jitter: 0.0,
            ..ShapeSettings::default()
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let shapes = seed(&settings, viewport(), palette(), &mut rng);

        assert!((shapes[0].x - 800.0 / 15.0 / 2.0).abs() < 1e-9);
        assert!((shapes[0].y - 600.0 / 10.0 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn jitter_stays_within_its_cell_fraction() {
        let settings = ShapeSettings::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let shapes = seed(&settings, viewport(), palette(), &mut rng);
        let cell_w = 800.0 / 15.0;
        let cell_h = 600.0 / 10.0;

        assert_eq!(shapes.len(), 150);
        for (i, shape) in shapes.iter().enumerate() {
            let center_x = ((i % 15) as f64 + 0.5) * cell_w;
            let center_y = ((i / 15 % 10) as f64 + 0.5) * cell_h;
            assert!((shape.x - center_x).abs() <= cell_w * 0.3 + 1e-9);
            assert!((shape.y - center_y).abs() <= cell_h * 0.3 + 1e-9);
            assert!((0.0..360.0).contains(&shape.rotation));
            assert!((15.0..=40.0).contains(&shape.size));
            assert_eq!(shape.opacity, settings.min_opacity);
        }
    }

    #[test]
    fn position_never_changes_after_spawn() {
        let settings = ShapeSettings {
            count: 10,
            ..ShapeSettings::default()
        };
        let mut rng = SmallRng::seed_from_u64(3);
        let mut shapes = seed(&settings, viewport(), palette(), &mut rng);
        let spawned: Vec<(f64, f64)> = shapes.iter().map(|s| (s.x, s.y)).collect();

        for frame in 0..100 {
            let pointer = Pointer {
                x: (frame * 31 % 800) as f64,
                y: (frame * 17 % 600) as f64,
            };
            for s in &mut shapes {
                s.update(&settings, pointer, true);
            }
        }
        let after: Vec<(f64, f64)> = shapes.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(spawned, after);
    }

    #[test]
    fn pointer_on_top_rotates_at_the_full_multiplier() {
        let settings = ShapeSettings::default();
        let mut shape = Shape {
            x: 200.0,
            y: 200.0,
            rotation: 10.0,
            size: 20.0,
            opacity: 0.05,
            color: palette().colors[0],
            kind: ShapeKind::Hexagon,
        };

        shape.update(&settings, Pointer { x: 200.0, y: 200.0 }, true);
        assert!((shape.rotation - 12.0).abs() < 1e-9);
    }

    #[test]
    fn distant_pointer_rotates_at_the_base_speed() {
        let settings = ShapeSettings::default();
        let mut shape = Shape {
            x: 200.0,
            y: 200.0,
            rotation: 0.0,
            size: 20.0,
            opacity: 0.05,
            color: palette().colors[0],
            kind: ShapeKind::Square,
        };

        shape.update(&settings, Pointer::OFFSCREEN, true);
        assert!((shape.rotation - 0.2).abs() < 1e-9);

        // Disabling interaction falls back to the base speed even up close.
        shape.update(&settings, Pointer { x: 200.0, y: 200.0 }, false);
        assert!((shape.rotation - 0.4).abs() < 1e-9);
    }

    #[test]
    fn rotation_accumulates_without_bound() {
        let settings = ShapeSettings::default();
        let mut shape = Shape {
            x: 100.0,
            y: 100.0,
            rotation: 359.9,
            size: 20.0,
            opacity: 0.05,
            color: palette().colors[0],
            kind: ShapeKind::Star,
        };

        for _ in 0..10 {
            shape.update(&settings, Pointer { x: 100.0, y: 100.0 }, true);
        }
        assert!(shape.rotation > 360.0);
    }

    #[test]
    fn opacity_stays_banded_through_long_runs() {
        let settings = ShapeSettings::default();
        let mut shape = Shape {
            x: 300.0,
            y: 300.0,
            rotation: 0.0,
            size: 30.0,
            opacity: 0.05,
            color: palette().colors[0],
            kind: ShapeKind::Diamond,
        };

        let near = Pointer { x: 300.0, y: 300.0 };
        for _ in 0..500 {
            shape.update(&settings, near, true);
            assert!((0.05..=0.3).contains(&shape.opacity));
        }
        assert_eq!(shape.opacity, settings.max_opacity);

        for _ in 0..500 {
            shape.update(&settings, Pointer::OFFSCREEN, true);
            assert!((0.05..=0.3).contains(&shape.opacity));
        }
        assert_eq!(shape.opacity, settings.min_opacity);
    }

    #[test]
    fn vertex_counts_match_the_kinds() {
        let mut shape = Shape {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            size: 20.0,
            opacity: 0.3,
            color: palette().colors[0],
            kind: ShapeKind::Triangle,
        };

        let counts = [
            (ShapeKind::Triangle, 3),
            (ShapeKind::Square, 4),
            (ShapeKind::Hexagon, 6),
            (ShapeKind::Diamond, 4),
            (ShapeKind::Circle, 0),
            (ShapeKind::Star, 10),
        ];
        for (kind, expected) in counts {
            shape.kind = kind;
            assert_eq!(shape.vertices().len(), expected);
        }
    }

    #[test]
    fn square_corners_are_axis_aligned_at_rest() {
        let shape = Shape {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            size: 20.0,
            opacity: 0.3,
            color: palette().colors[0],
            kind: ShapeKind::Square,
        };

        for (x, y) in shape.vertices() {
            assert!((x.abs() - 10.0).abs() < 1e-9);
            assert!((y.abs() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn diamond_points_sit_on_the_axes_at_rest() {
        let shape = Shape {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            size: 20.0,
            opacity: 0.3,
            color: palette().colors[0],
            kind: ShapeKind::Diamond,
        };

        for (x, y) in shape.vertices() {
            // One coordinate on the axis, the other at the tip.
            assert!(x.abs() < 1e-9 || y.abs() < 1e-9);
            assert!((x.abs() - 10.0).abs() < 1e-9 || (y.abs() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn star_alternates_outer_and_inner_radii() {
        let shape = Shape {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            size: 20.0,
            opacity: 0.3,
            color: palette().colors[0],
            kind: ShapeKind::Star,
        };

        for (i, (x, y)) in shape.vertices().into_iter().enumerate() {
            let radius = (x * x + y * y).sqrt();
            let expected = if i % 2 == 0 { 10.0 } else { 5.0 };
            assert!((radius - expected).abs() < 1e-9);
        }
    }
}
