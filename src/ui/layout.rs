use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals at least this wide get the two-column form grid
pub const TWO_COLUMN_MIN_WIDTH: u16 = 80;

/// Calculated layout regions for the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppLayout {
    pub header: Rect,
    pub hero: Rect,
    pub form: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from terminal area
    pub fn calculate(area: Rect) -> Self {
        // Vertical split: header | hero | form | status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header (brand + toggle, bottom border)
                Constraint::Length(3), // Hero text
                Constraint::Min(6),    // Form panel
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Keep the form panel readable on very wide terminals
        let form_width = vertical[2].width.min(110);
        let form_x = vertical[2].x + (vertical[2].width - form_width) / 2;

        Self {
            header: vertical[0],
            hero: vertical[1],
            form: Rect::new(form_x, vertical[2].y, form_width, vertical[2].height),
            status_bar: vertical[3],
        }
    }
}

/// Helper to create a centered rect for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Center a fixed-size box inside `area`, shrinking it if the area is smaller
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = AppLayout::calculate(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.hero.y, 3);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.form.height, 40 - 3 - 3 - 1);
        assert!(layout.form.width >= TWO_COLUMN_MIN_WIDTH);
    }

    #[test]
    fn test_narrow_terminal_single_column() {
        let layout = AppLayout::calculate(Rect::new(0, 0, 60, 30));
        assert!(layout.form.width < TWO_COLUMN_MIN_WIDTH);
    }

    #[test]
    fn test_wide_form_is_centered() {
        let layout = AppLayout::calculate(Rect::new(0, 0, 200, 40));
        assert_eq!(layout.form.width, 110);
        assert_eq!(layout.form.x, 45);
    }

    #[test]
    fn test_centered_fixed_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_fixed(50, 5, area), Rect::new(0, 2, 20, 5));
    }
}
