//! Scene state: owns the layer populations and reseeds them whenever the
//! viewport or theme changes.

use mote_core::{Pointer, Theme, Viewport};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::Canvas;

use crate::grid;
use crate::particle::{self, Particle, ParticleSettings};
use crate::shape::{self, Shape, ShapeSettings};

/// Backdrop scene state.
///
/// Populations are seeded lazily on the first frame, then replaced
/// wholesale when the rendered area or the theme differs from what they
/// were seeded for. No particle or shape survives a reseed.
#[derive(Debug)]
pub struct Scene {
    particles: Vec<Particle>,
    shapes: Vec<Shape>,
    /// Viewport the current populations were seeded for.
    viewport: Viewport,
    theme: Theme,
    particle_settings: ParticleSettings,
    shape_settings: ShapeSettings,
    rng: SmallRng,
}

impl Scene {
    /// Create an empty scene; populations seed on the first frame.
    pub fn new(theme: Theme) -> Self {
        Self::with_rng(theme, SmallRng::from_entropy())
    }

    /// Create a scene with an explicit random source.
    pub fn with_rng(theme: Theme, rng: SmallRng) -> Self {
        Self {
            particles: Vec::new(),
            shapes: Vec::new(),
            viewport: Viewport::default(),
            theme,
            particle_settings: ParticleSettings::default(),
            shape_settings: ShapeSettings::default(),
            rng,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Viewport the current populations cover.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Switch themes; both populations reseed on the next frame with the
    /// new palette.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            self.theme = theme;
            self.invalidate();
        }
    }

    /// Discard both populations so the next frame seeds fresh ones.
    pub fn invalidate(&mut self) {
        self.viewport = Viewport::default();
    }

    /// Advance both populations one frame and draw all three layers.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, pointer: Pointer, interactive: bool) {
        let viewport = Viewport::from_cells(area.width, area.height);
        if viewport.is_empty() {
            return;
        }
        if viewport != self.viewport {
            self.reseed(viewport);
        }

        self.step(pointer, interactive);

        let palette = self.theme.palette();
        let canvas = Canvas::default()
            .background_color(palette.backdrop)
            .marker(Marker::Braille)
            .x_bounds([0.0, viewport.width])
            .y_bounds([0.0, viewport.height])
            .paint(|ctx| {
                grid::draw(ctx, viewport, pointer, palette);
                ctx.layer();
                for particle in &self.particles {
                    particle.draw(ctx, palette);
                }
                ctx.layer();
                for shape in &self.shapes {
                    shape.draw(ctx, palette);
                }
            });
        frame.render_widget(canvas, area);
    }

    /// Replace both populations wholesale for a new viewport.
    fn reseed(&mut self, viewport: Viewport) {
        let palette = self.theme.palette();
        self.particles = particle::seed(&self.particle_settings, viewport, palette, &mut self.rng);
        self.shapes = shape::seed(&self.shape_settings, viewport, palette, &mut self.rng);
        self.viewport = viewport;
    }

    /// Advance every particle and shape one frame.
    fn step(&mut self, pointer: Pointer, interactive: bool) {
        let palette = self.theme.palette();
        for particle in &mut self.particles {
            particle.update(
                &self.particle_settings,
                self.viewport,
                pointer,
                interactive,
                palette,
                &mut self.rng,
            );
        }
        for shape in &mut self.shapes {
            shape.update(&self.shape_settings, pointer, interactive);
        }
    }

    /// Current particle population.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current shape population.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
