//! Drifting point-light particles (stateful layer).

use mote_core::{Palette, Pointer, Viewport};
use rand::Rng;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Context, Points};

use crate::color;

/// Tuning for the particle layer. Fixed at compile time; tests build
/// variants directly.
#[derive(Debug, Clone, Copy)]
pub struct ParticleSettings {
    /// Population size.
    pub count: usize,
    /// Draw radius range in px, assigned per slot at seed time.
    pub min_size: f64,
    pub max_size: f64,
    /// Band that opacity easing clamps to in both directions.
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Full width of the spawn velocity range on each axis.
    pub speed: f64,
    /// Multiplicative velocity damping applied every frame.
    pub friction: f64,
    /// Lifespan range in frames.
    pub min_life: u32,
    pub max_life: u32,
    /// Distance within which the pointer attracts particles.
    pub influence_radius: f64,
    /// Scale of the attraction impulse.
    pub force_strength: f64,
    /// Per-frame opacity steps toward max (near the pointer) and min.
    pub opacity_gain: f64,
    pub opacity_decay: f64,
    /// Fraction of velocity kept (and inverted) on wall contact.
    pub bounce: f64,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 120,
            min_size: 1.0,
            max_size: 4.0,
            min_opacity: 0.2,
            max_opacity: 1.0,
            speed: 0.5,
            friction: 0.99,
            min_life: 100,
            max_life: 300,
            influence_radius: 150.0,
            force_strength: 0.02,
            opacity_gain: 0.02,
            opacity_decay: 0.01,
            bounce: 0.8,
        }
    }
}

/// One simulated point light.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Draw radius, fixed for the slot's lifetime.
    pub size: f64,
    pub opacity: f64,
    pub color: Color,
    /// Frames remaining until the slot respawns.
    pub life: u32,
    /// Countdown starting value, fixed for the slot's lifetime.
    pub max_life: u32,
}

/// Seed a full particle population for the given viewport.
pub fn seed<R: Rng>(
    settings: &ParticleSettings,
    viewport: Viewport,
    palette: &Palette,
    rng: &mut R,
) -> Vec<Particle> {
    (0..settings.count)
        .map(|_| {
            let max_life = rng.gen_range(settings.min_life..=settings.max_life).max(1);
            let mut particle = Particle {
                x: 0.0,
                y: 0.0,
                vx: 0.0,
                vy: 0.0,
                size: rng.gen_range(settings.min_size..=settings.max_size),
                opacity: settings.min_opacity,
                color: palette.colors[0],
                life: max_life,
                max_life,
            };
            particle.scatter(settings, viewport, palette, rng);
            particle
        })
        .collect()
}

impl Particle {
    /// Assign a fresh random position, velocity, and color. Size, lifespan
    /// range, and current opacity are left alone.
    fn scatter<R: Rng>(
        &mut self,
        settings: &ParticleSettings,
        viewport: Viewport,
        palette: &Palette,
        rng: &mut R,
    ) {
        let half_speed = settings.speed / 2.0;
        self.x = rng.gen_range(0.0..viewport.width);
        self.y = rng.gen_range(0.0..viewport.height);
        self.vx = rng.gen_range(-half_speed..=half_speed);
        self.vy = rng.gen_range(-half_speed..=half_speed);
        self.color = palette.colors[rng.gen_range(0..palette.colors.len())];
    }

    /// Advance one frame: pointer force, integration, wall reflection, and
    /// the lifespan countdown with in-place respawn.
    pub fn update<R: Rng>(
        &mut self,
        settings: &ParticleSettings,
        viewport: Viewport,
        pointer: Pointer,
        interactive: bool,
        palette: &Palette,
        rng: &mut R,
    ) {
        let dx = pointer.x - self.x;
        let dy = pointer.y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if interactive && distance < settings.influence_radius {
            let force = (settings.influence_radius - distance) / settings.influence_radius
                * settings.force_strength;
            // The horizontal offset drives both axes, so the pull skews
            // diagonally when the pointer sits above or below a particle.
            // Intentional; the tests pin this down.
            self.vx += dx * force;
            self.vy += dx * force;
            self.opacity = (self.opacity + settings.opacity_gain).min(settings.max_opacity);
        } else {
            self.opacity = (self.opacity - settings.opacity_decay).max(settings.min_opacity);
        }

        self.x += self.vx;
        self.y += self.vy;
        self.vx *= settings.friction;
        self.vy *= settings.friction;

        // Reflect off the viewport edges, losing a little energy, and clamp
        // so no overshoot survives the frame.
        if self.x < 0.0 || self.x > viewport.width {
            self.vx *= -settings.bounce;
        }
        if self.y < 0.0 || self.y > viewport.height {
            self.vy *= -settings.bounce;
        }
        self.x = self.x.clamp(0.0, viewport.width);
        self.y = self.y.clamp(0.0, viewport.height);

        self.life = self.life.saturating_sub(1);
        if self.life == 0 {
            self.scatter(settings, viewport, palette, rng);
            self.life = self.max_life;
        }
    }

    /// Draw as a filled disc, faded by opacity and remaining life.
    pub fn draw(&self, ctx: &mut Context<'_>, palette: &Palette) {
        let alpha = self.opacity * f64::from(self.life) / f64::from(self.max_life.max(1));
        let faded = color::blend(self.color, alpha, palette.backdrop);

        let span = self.size.ceil() as i32;
        let mut coords = Vec::with_capacity((2 * span + 1).pow(2) as usize);
        for ox in -span..=span {
            for oy in -span..=span {
                if f64::from(ox * ox + oy * oy) <= self.size * self.size {
                    coords.push((self.x + f64::from(ox), self.y + f64::from(oy)));
                }
            }
        }
        ctx.draw(&Points {
            coords: &coords,
            color: faded,
        });
    }
}
