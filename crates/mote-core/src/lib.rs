//! Core types for the mote terminal backdrop.
//!
//! This crate holds the pieces shared between the binary and the scene
//! renderer: color themes with their fixed palettes, and the viewport /
//! pointer geometry the simulation runs in.

mod geometry;
mod theme;

pub use geometry::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Pointer, Viewport};
pub use theme::{Palette, Theme};
