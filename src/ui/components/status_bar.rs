use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::ThemeProvider;

/// Severity of a status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Warning,
}

/// Status bar component
#[derive(Default)]
pub struct StatusBar {
    message: Option<(StatusKind, String)>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = Some((StatusKind::Error, message.into()));
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.message = Some((StatusKind::Warning, message.into()));
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    #[allow(dead_code)]
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(_, m)| m.as_str())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &ThemeProvider, hints: &str) {
        let styles = theme.styles();

        // Split into left (message or key hints) and right (theme name)
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(12)])
            .split(area);

        let left = match &self.message {
            Some((StatusKind::Error, message)) => Line::from(vec![
                Span::styled("✖ ", styles.error_text),
                Span::styled(message.as_str(), styles.error_text),
            ]),
            Some((StatusKind::Warning, message)) => Line::from(vec![
                Span::styled("! ", styles.label_focused),
                Span::styled(message.as_str(), styles.normal_text),
            ]),
            None => Line::from(Span::styled(hints, styles.muted_text)),
        };
        frame.render_widget(Paragraph::new(left).style(styles.surface), chunks[0]);

        let theme_name = Paragraph::new(Line::from(Span::styled(
            theme.theme().display_name(),
            styles.muted_text,
        )))
        .style(styles.surface)
        .right_aligned();
        frame.render_widget(theme_name, chunks[1]);
    }
}
