use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::keybindings::{KeyAction, KeybindingResolver};
use crate::ui::layout::centered_rect;
use crate::ui::theme::ThemeProvider;

/// Help section with title and key bindings
struct HelpSection {
    title: &'static str,
    bindings: Vec<(String, &'static str)>,
}

/// Help overlay listing the active keybindings
pub struct HelpOverlay {
    sections: Vec<HelpSection>,
}

impl HelpOverlay {
    pub fn new() -> Self {
        let mut overlay = Self {
            sections: Vec::new(),
        };
        overlay.update_from_resolver(&KeybindingResolver::new());
        overlay
    }

    /// Rebuild sections so remapped keys show up in the help text
    pub fn update_from_resolver(&mut self, resolver: &KeybindingResolver) {
        // An action whose keys were all taken by other actions shows "-"
        let get_binding = |action: KeyAction| -> String {
            resolver
                .get_binding_display(action)
                .unwrap_or("-")
                .to_string()
        };

        self.sections = vec![
            HelpSection {
                title: "Gezinme",
                bindings: vec![
                    (get_binding(KeyAction::NextField), "Sonraki alan"),
                    (get_binding(KeyAction::PrevField), "Önceki alan"),
                    ("← / →".to_string(), "Seçenek değiştir / imleç"),
                    ("Space".to_string(), "Seçenek değiştir / işaretle"),
                    ("Enter".to_string(), "Gönder (butonda) / yeni satır (notlarda)"),
                ],
            },
            HelpSection {
                title: "Komutlar",
                bindings: vec![
                    (get_binding(KeyAction::Submit), "Randevu oluştur"),
                    (get_binding(KeyAction::ToggleTheme), "Temayı değiştir"),
                    (get_binding(KeyAction::Help), "Bu yardımı aç/kapat"),
                    (get_binding(KeyAction::Quit), "Çıkış"),
                ],
            },
            HelpSection {
                title: "Fare",
                bindings: vec![
                    ("Tıkla".to_string(), "Tema düğmesi / Tamam butonu"),
                ],
            },
        ];
    }

    fn lines<'a>(&'a self, theme: &ThemeProvider) -> Vec<Line<'a>> {
        let styles = theme.styles();
        let mut lines = Vec::new();

        for section in &self.sections {
            lines.push(Line::from(Span::styled(
                format!("━━ {} ━━", section.title),
                styles.title,
            )));
            lines.push(Line::from(""));

            for (key, desc) in &section.bindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:12}", key),
                        styles.label_focused.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, styles.normal_text),
                ]));
            }

            lines.push(Line::from(""));
        }

        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &ThemeProvider) {
        let styles = theme.styles();
        let popup_area = centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(styles.border_focused)
            .style(styles.surface)
            .title(" Yardım - kapatmak için Esc ");

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);
        frame.render_widget(Paragraph::new(self.lines(theme)), inner);
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}
