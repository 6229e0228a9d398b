use ratatui::style::{Color, Modifier, Style};

use super::theme::{ColorPalette, Theme};

/// Pre-computed styles for the UI
#[derive(Clone)]
pub struct Styles {
    pub palette: ColorPalette,

    // Surfaces
    pub page: Style,
    pub surface: Style,

    // Text styles
    pub normal_text: Style,
    pub muted_text: Style,
    pub title: Style,
    pub error_text: Style,
    pub success_text: Style,

    // Form controls
    pub label: Style,
    pub label_focused: Style,
    pub input: Style,
    pub input_focused: Style,
    pub placeholder: Style,

    // Borders
    pub border: Style,
    pub border_focused: Style,

    // Buttons
    pub button: Style,
    pub button_focused: Style,

    pub brand_badge: Style,
    pub toggle: Style,
}

impl Styles {
    /// Create styles from a theme
    pub fn from_theme(theme: Theme) -> Self {
        Self::from_palette(theme.palette())
    }

    /// Create styles from a color palette
    pub fn from_palette(palette: ColorPalette) -> Self {
        let surface = Style::default().fg(palette.text).bg(palette.surface);
        Self {
            page: Style::default().fg(palette.text).bg(palette.background),
            surface,

            normal_text: surface,
            muted_text: surface.fg(palette.muted),
            title: surface.fg(palette.text).add_modifier(Modifier::BOLD),
            error_text: surface.fg(palette.error).add_modifier(Modifier::BOLD),
            success_text: surface.fg(palette.success).add_modifier(Modifier::BOLD),

            label: surface.fg(palette.muted),
            label_focused: surface.fg(palette.primary).add_modifier(Modifier::BOLD),
            input: Style::default().fg(palette.text).bg(palette.input_bg),
            input_focused: Style::default()
                .fg(palette.text)
                .bg(palette.input_bg)
                .add_modifier(Modifier::UNDERLINED),
            placeholder: Style::default().fg(palette.muted).bg(palette.input_bg),

            border: surface.fg(palette.border),
            border_focused: surface.fg(palette.primary),

            button: Style::default()
                .fg(palette.on_primary)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
            button_focused: Style::default()
                .fg(palette.on_primary)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),

            brand_badge: Style::default()
                .fg(Color::White)
                .bg(ColorPalette::light().primary)
                .add_modifier(Modifier::BOLD),
            toggle: surface.fg(palette.toggle).add_modifier(Modifier::BOLD),

            palette,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::from_theme(Theme::default())
    }
}
