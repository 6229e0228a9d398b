use ratatui::style::Color;
use serde::Deserialize;

use super::styles::Styles;

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Get the color palette for this theme
    pub fn palette(&self) -> ColorPalette {
        match self {
            Theme::Light => ColorPalette::light(),
            Theme::Dark => ColorPalette::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Name shown in the status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Açık tema",
            Theme::Dark => "Koyu tema",
        }
    }
}

/// Color palette for theming
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    /// Accent for focus, buttons and the brand badge
    pub primary: Color,
    /// Text drawn on top of `primary`
    pub on_primary: Color,
    pub success: Color,
    pub error: Color,
    /// Secondary text (subtitles, hints)
    pub muted: Color,
    /// Page background
    pub background: Color,
    /// Panel and dialog background
    pub surface: Color,
    /// Input control background
    pub input_bg: Color,
    pub border: Color,
    pub text: Color,
    /// Theme toggle icon
    pub toggle: Color,
}

impl ColorPalette {
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(37, 99, 235), // blue-600
            on_primary: Color::Rgb(255, 255, 255),
            success: Color::Rgb(22, 163, 74), // green-600
            error: Color::Rgb(220, 38, 38), // red-600
            muted: Color::Rgb(75, 85, 99), // gray-600
            background: Color::Rgb(239, 246, 255), // blue-50
            surface: Color::Rgb(255, 255, 255),
            input_bg: Color::Rgb(255, 255, 255),
            border: Color::Rgb(209, 213, 219), // gray-300
            text: Color::Rgb(17, 24, 39), // gray-900
            toggle: Color::Rgb(75, 85, 99),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(96, 165, 250), // blue-400
            on_primary: Color::Rgb(17, 24, 39),
            success: Color::Rgb(74, 222, 128), // green-400
            error: Color::Rgb(248, 113, 113), // red-400
            muted: Color::Rgb(156, 163, 175), // gray-400
            background: Color::Rgb(17, 24, 39), // gray-900
            surface: Color::Rgb(31, 41, 55), // gray-800
            input_bg: Color::Rgb(55, 65, 81), // gray-700
            border: Color::Rgb(75, 85, 99), // gray-600
            text: Color::Rgb(255, 255, 255),
            toggle: Color::Rgb(250, 204, 21), // yellow-400
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

/// Session-wide theme flag and the styles derived from it.
///
/// Components never own styles; they borrow them from the provider on every
/// render, so a toggle restyles the whole screen at once.
#[derive(Clone)]
pub struct ThemeProvider {
    theme: Theme,
    styles: Styles,
}

impl ThemeProvider {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            styles: Styles::from_theme(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.styles = Styles::from_theme(self.theme);
        self.theme
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
