//! Backdrop layer rendering for the mote terminal backdrop.
//!
//! A scene composes three layers drawn in fixed order each frame: a
//! parallax grid that follows the pointer, a population of drifting
//! particles with finite lifespans, and a population of stationary
//! geometric shapes that spin and brighten near the pointer. Both
//! populations are reseeded wholesale whenever the viewport or the theme
//! changes.

mod color;
mod grid;
mod particle;
mod scene;
mod shape;

pub use color::blend;
pub use particle::{Particle, ParticleSettings};
pub use scene::Scene;
pub use shape::{Shape, ShapeKind, ShapeSettings};
