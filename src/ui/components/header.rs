//! Page header: dealership branding and the theme toggle

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::ThemeProvider;

const TOGGLE_WIDTH: u16 = 22;

/// Static branding plus the theme toggle control
pub struct Header {
    brand: String,
    subtitle: String,
}

impl Header {
    pub fn new(brand: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Clickable region of the theme toggle within the header area
    pub fn toggle_area(area: Rect) -> Rect {
        let width = TOGGLE_WIDTH.min(area.width);
        Rect::new(area.x + area.width - width, area.y, width, 2.min(area.height))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &ThemeProvider, toggle_key: &str) {
        let styles = theme.styles();

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles.border)
            .style(styles.surface);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(7), // Brand badge
                Constraint::Min(10),   // Brand name
                Constraint::Length(TOGGLE_WIDTH),
            ])
            .split(inner);

        let badge = Paragraph::new(vec![
            Line::from(Span::styled("     ", styles.brand_badge)),
            Line::from(Span::styled(" ▄█▄ ", styles.brand_badge)),
        ]);
        frame.render_widget(badge, chunks[0]);

        let brand = Paragraph::new(vec![
            Line::from(Span::styled(&self.brand, styles.title)),
            Line::from(Span::styled(&self.subtitle, styles.muted_text)),
        ]);
        frame.render_widget(brand, chunks[1]);

        // The icon names the theme a press switches to
        let icon = if theme.is_dark() { "☀" } else { "☾" };
        let toggle = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("[ {} ]", icon), styles.toggle),
                Span::styled(" tema", styles.muted_text),
            ]),
            Line::from(Span::styled(toggle_key.to_string(), styles.muted_text)),
        ])
        .right_aligned();
        frame.render_widget(toggle, chunks[2]);
    }
}

/// Page title and introduction above the form
pub fn render_hero(frame: &mut Frame, area: Rect, theme: &ThemeProvider) {
    let styles = theme.styles();
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "Servis Randevusu",
            styles.page.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Peugeot aracınız için profesyonel servis hizmeti alın. \
             Randevunuzu kolayca oluşturun ve uzman ekibimizle buluşun.",
            styles.page.fg(styles.palette.muted),
        )),
    ])
    .style(styles.page)
    .centered()
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

impl Default for Header {
    fn default() -> Self {
        Self::new("PEUGEOT", "Yetkili Servis")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_header(theme: &ThemeProvider) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| Header::default().render(frame, frame.area(), theme, "Ctrl+t"))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_renders_brand_and_toggle() {
        let buffer = render_header(&ThemeProvider::new(Theme::Light));
        assert!(row_text(&buffer, 0).contains("PEUGEOT"));
        assert!(row_text(&buffer, 1).contains("Yetkili Servis"));
        assert!(row_text(&buffer, 0).contains("☾"));
        assert!(row_text(&buffer, 1).contains("Ctrl+t"));
    }

    #[test]
    fn test_toggle_icon_follows_theme() {
        let buffer = render_header(&ThemeProvider::new(Theme::Dark));
        assert!(row_text(&buffer, 0).contains("☀"));
    }

    #[test]
    fn test_hero_uses_page_background() {
        let theme = ThemeProvider::new(Theme::Dark);
        let mut terminal = Terminal::new(TestBackend::new(140, 3)).unwrap();
        terminal
            .draw(|frame| render_hero(frame, frame.area(), &theme))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(row_text(buffer, 0).contains("Servis Randevusu"));
        assert_eq!(buffer.cell((0, 2)).unwrap().bg, Theme::Dark.palette().background);
    }

    #[test]
    fn test_toggle_area() {
        let area = Rect::new(0, 0, 60, 3);
        assert_eq!(Header::toggle_area(area), Rect::new(38, 0, 22, 2));
    }
}
