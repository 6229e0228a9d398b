//! Confirmation dialog shown after a booking is accepted

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::centered_fixed;
use crate::ui::theme::ThemeProvider;

pub const SUCCESS_TITLE: &str = "Randevunuz Oluşturuldu!";
pub const SUCCESS_MESSAGE: &str =
    "Randevu talebiniz başarıyla alındı. En kısa sürede sizinle iletişime geçeceğiz.";
pub const DISMISS_LABEL: &str = "Tamam";
/// Every key that closes the dialog is listed here
const DISMISS_HINT: &str = "[Enter/Esc/Space] Kapat";

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 11;

/// Stateless success dialog; the caller owns the open flag
pub struct SuccessModal;

impl SuccessModal {
    pub fn dialog_area(area: Rect) -> Rect {
        centered_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, area)
    }

    /// Region of the dismiss button, for mouse hit testing
    pub fn button_area(area: Rect) -> Rect {
        let dialog = Self::dialog_area(area);
        Rect::new(
            dialog.x + 2,
            dialog.y + dialog.height.saturating_sub(3),
            dialog.width.saturating_sub(4),
            1,
        )
    }

    /// Draw the dialog when `is_open`; draws nothing otherwise
    pub fn render(frame: &mut Frame, area: Rect, theme: &ThemeProvider, is_open: bool) {
        if !is_open {
            return;
        }
        let styles = theme.styles();
        let popup_area = Self::dialog_area(area);

        // Clear background
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border_focused)
            .style(styles.surface);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Check mark
                Constraint::Length(2), // Title
                Constraint::Min(2),    // Message
                Constraint::Length(1), // Button
                Constraint::Length(1), // Hint
            ])
            .split(inner);

        let check = Paragraph::new(Line::from(Span::styled("✔", styles.success_text))).centered();
        frame.render_widget(check, chunks[0]);

        let title = Paragraph::new(Line::from(Span::styled(SUCCESS_TITLE, styles.title))).centered();
        frame.render_widget(title, chunks[1]);

        let message = Paragraph::new(Line::from(Span::styled(SUCCESS_MESSAGE, styles.muted_text)))
            .centered()
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[2]);

        let button = Paragraph::new(Line::from(Span::styled(
            format!("{:^width$}", DISMISS_LABEL, width = chunks[3].width as usize),
            styles.button,
        )));
        frame.render_widget(button, chunks[3]);

        let hint = Paragraph::new(Line::from(Span::styled(
            DISMISS_HINT,
            styles.muted_text,
        )))
        .centered();
        frame.render_widget(hint, chunks[4]);
    }
}
