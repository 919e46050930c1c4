//! Configuration loading for mote.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file means defaults; a file that exists but cannot be read or
//! parsed is reported as a startup error. Simulation tuning is deliberately
//! not configurable here, only presentation choices.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use mote_core::Theme;
use serde::{Deserialize, Serialize};

/// User configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color theme for every layer.
    pub theme: ThemeChoice,
    /// Target frames per second for the animation loop.
    pub fps: u32,
    /// Whether the pointer influences particles and shapes.
    pub pointer_effects: bool,
    /// Whether the help line is visible at startup.
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            fps: 30,
            pointer_effects: true,
            show_help: true,
        }
    }
}

/// Theme name as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

impl Config {
    /// Load the config file, or defaults when none exists.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Platform config file location (`<config dir>/mote/config.toml`).
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "mote").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Time each frame gets before the next one is due.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.clamp(1, 240)))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).wrap_err_with(|| format!("invalid config in {}", path.display()))
    }
}
