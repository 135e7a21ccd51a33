//! Color themes for the picker

use ratatui::style::Color;

use crate::config::TuiTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub base: Color,     // Background
    pub surface0: Color, // Highlighted row
    pub surface1: Color, // Borders
    pub text: Color,
    pub subtext0: Color, // Placeholder, hints, disabled rows
    pub blue: Color,     // Focus, current row marker
    pub yellow: Color,   // Matched term
    pub red: Color,      // No results
    pub mauve: Color,    // Loading indicator
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    CatppuccinMocha,
    Dracula,
    Nord,
}

impl ThemeVariant {
    pub fn theme(&self) -> Theme {
        match self {
            Self::CatppuccinMocha => CATPPUCCIN_MOCHA,
            Self::Dracula => DRACULA,
            Self::Nord => NORD,
        }
    }

    /// Cycle to the next theme
    pub fn next(&self) -> Self {
        match self {
            Self::CatppuccinMocha => Self::Dracula,
            Self::Dracula => Self::Nord,
            Self::Nord => Self::CatppuccinMocha,
        }
    }
}

impl From<TuiTheme> for ThemeVariant {
    fn from(theme: TuiTheme) -> Self {
        match theme {
            TuiTheme::CatppuccinMocha => Self::CatppuccinMocha,
            TuiTheme::Dracula => Self::Dracula,
            TuiTheme::Nord => Self::Nord,
        }
    }
}

pub const CATPPUCCIN_MOCHA: Theme = Theme {
    name: "Catppuccin Mocha",
    base: Color::Rgb(30, 30, 46),
    surface0: Color::Rgb(49, 50, 68),
    surface1: Color::Rgb(69, 71, 90),
    text: Color::Rgb(205, 214, 244),
    subtext0: Color::Rgb(166, 173, 200),
    blue: Color::Rgb(137, 180, 250),
    yellow: Color::Rgb(249, 226, 175),
    red: Color::Rgb(243, 139, 168),
    mauve: Color::Rgb(203, 166, 247),
};

pub const DRACULA: Theme = Theme {
    name: "Dracula",
    base: Color::Rgb(40, 42, 54),
    surface0: Color::Rgb(68, 71, 90),
    surface1: Color::Rgb(98, 114, 164),
    text: Color::Rgb(248, 248, 242),
    subtext0: Color::Rgb(189, 147, 249),
    blue: Color::Rgb(139, 233, 253),
    yellow: Color::Rgb(241, 250, 140),
    red: Color::Rgb(255, 85, 85),
    mauve: Color::Rgb(189, 147, 249),
};

pub const NORD: Theme = Theme {
    name: "Nord",
    base: Color::Rgb(46, 52, 64),
    surface0: Color::Rgb(59, 66, 82),
    surface1: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    subtext0: Color::Rgb(216, 222, 233),
    blue: Color::Rgb(136, 192, 208),
    yellow: Color::Rgb(235, 203, 139),
    red: Color::Rgb(191, 97, 106),
    mauve: Color::Rgb(180, 142, 173),
};
