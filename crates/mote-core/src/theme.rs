//! Color themes and the palettes they select.

use ratatui::style::Color;

/// Active color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Switch between dark and light.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The fixed palette this theme selects.
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Lowercase theme name, as shown in the help line and config file.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// The fixed set of colors available to the backdrop layers.
///
/// `colors` is the pool particles and shapes draw from at spawn; the other
/// fields style the grid and the help overlay. `backdrop` doubles as the
/// reference color that opacity fading blends toward.
#[derive(Debug)]
pub struct Palette {
    /// Spawn colors for particles and shapes.
    pub colors: &'static [Color],
    /// Grid line color.
    pub grid: Color,
    /// Canvas background, and the blend target for faded entities.
    pub backdrop: Color,
    /// Accent color for key hints in the help line.
    pub accent: Color,
}

static DARK: Palette = Palette {
    colors: &[
        Color::Rgb(139, 92, 246),  // violet
        Color::Rgb(34, 211, 238),  // cyan
        Color::Rgb(96, 165, 250),  // blue
        Color::Rgb(244, 114, 182), // pink
        Color::Rgb(52, 211, 153),  // emerald
    ],
    grid: Color::Rgb(71, 85, 105),
    backdrop: Color::Rgb(10, 12, 22),
    accent: Color::Rgb(139, 92, 246),
};

static LIGHT: Palette = Palette {
    colors: &[
        Color::Rgb(109, 40, 217), // deep violet
        Color::Rgb(8, 145, 178),  // teal
        Color::Rgb(29, 78, 216),  // indigo
        Color::Rgb(190, 24, 93),  // rose
        Color::Rgb(4, 120, 87),   // pine
    ],
    grid: Color::Rgb(148, 163, 184),
    backdrop: Color::Rgb(241, 245, 249),
    accent: Color::Rgb(109, 40, 217),
};
