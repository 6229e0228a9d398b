//! Event handling for keyboard and mouse input

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::keybindings::KeyAction;
use crate::ui::components::{FormEvent, Header, SuccessModal};

use super::{App, AppMode};

impl App {
    pub(super) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Use keybinding resolver to determine action
        let action = self.keybinding_resolver.resolve(code, modifiers);

        // Quit works regardless of mode
        if action == KeyAction::Quit {
            self.should_quit = true;
            return;
        }

        // Handle confirmation mode (modal)
        if self.mode == AppMode::Confirmation {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss();
            }
            return;
        }

        // Handle help mode (modal)
        if self.mode == AppMode::Help {
            if action == KeyAction::Help || matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
                self.mode = AppMode::Editing;
            }
            return;
        }

        // Keep the minimum date current across midnight
        self.form.set_today((self.clock)());

        match action {
            KeyAction::Help => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::Submit => self.submit(),
            KeyAction::NextField => self.form.focus_next(),
            KeyAction::PrevField => self.form.focus_prev(),
            KeyAction::Quit => {}
            KeyAction::None => self.handle_form_key(code, modifiers),
        }
    }

    /// Keys not bound to an action edit the focused control
    fn handle_form_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // AltGr arrives as Ctrl+Alt on some platforms and still types a character
        let shortcut =
            modifiers.contains(KeyModifiers::CONTROL) != modifiers.contains(KeyModifiers::ALT);

        match code {
            KeyCode::Char(_) if shortcut => {}
            KeyCode::Char(c) => self.form.handle_char(c),
            KeyCode::Backspace => self.form.handle_backspace(),
            KeyCode::Delete => self.form.handle_delete(),
            KeyCode::Left => self.form.handle_left(),
            KeyCode::Right => self.form.handle_right(),
            KeyCode::Home => self.form.handle_home(),
            KeyCode::End => self.form.handle_end(),
            KeyCode::Enter => {
                if self.form.handle_enter() == FormEvent::SubmitRequested {
                    self.submit();
                }
            }
            _ => {}
        }
    }

    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Only handle left mouse button down
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        let Some(layout) = self.current_layout else {
            return;
        };
        let position = Position::new(mouse.column, mouse.row);
        let screen = Rect::new(
            0,
            0,
            layout.status_bar.right(),
            layout.status_bar.bottom(),
        );

        match self.mode {
            AppMode::Confirmation => {
                if SuccessModal::button_area(screen).contains(position) {
                    self.dismiss();
                }
            }
            AppMode::Editing => {
                if Header::toggle_area(layout.header).contains(position) {
                    self.toggle_theme();
                }
            }
            AppMode::Help => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn rendered_app() -> App {
        let mut app = App::with_config(Config::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        app
    }

    #[test]
    fn test_click_toggle_switches_theme() {
        let mut app = rendered_app();
        let toggle = Header::toggle_area(app.current_layout.unwrap().header);

        click(&mut app, toggle.x + 1, toggle.y);
        assert_eq!(app.theme(), Theme::Dark);

        click(&mut app, 0, 20);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_click_button_dismisses_confirmation() {
        let mut app = rendered_app();
        app.mode = AppMode::Confirmation;
        let button = SuccessModal::button_area(Rect::new(0, 0, 100, 40));

        click(&mut app, 0, 0);
        assert!(app.is_confirmation_open());

        click(&mut app, button.x + 1, button.y);
        assert!(!app.is_confirmation_open());
    }

    #[test]
    fn test_hinted_keys_dismiss_confirmation() {
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')] {
            let mut app = rendered_app();
            app.mode = AppMode::Confirmation;
            app.handle_key(code, KeyModifiers::NONE);
            assert!(!app.is_confirmation_open(), "{:?} did not dismiss", code);
        }
    }

    #[test]
    fn test_toggle_ignored_while_confirmation_open() {
        let mut app = rendered_app();
        app.mode = AppMode::Confirmation;
        let toggle = Header::toggle_area(app.current_layout.unwrap().header);

        click(&mut app, toggle.x + 1, toggle.y);
        assert_eq!(app.theme(), Theme::Light);
    }
}
