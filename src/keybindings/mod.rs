//! Keybinding configuration and resolution
//!
//! Global shortcuts (quit, help, theme toggle, submit, field navigation) are
//! resolved here; everything else is treated as input for the focused control.

mod resolver;

pub use resolver::{KeyAction, KeybindingResolver};

use crossterm::event::{KeyCode, KeyModifiers};

/// A parsed key binding that can be matched against key events
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Parse a keybinding string into a KeyBinding
    ///
    /// Supported formats:
    /// - Single character: "q", "?"
    /// - Special keys: "Enter", "Esc", "Tab", "BackTab", "F1"-"F12"
    /// - With modifiers: "Ctrl+t", "Alt+x", "Ctrl+Shift+s"
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty keybinding".to_string());
        }

        // A lone "+" is a key, not a separator
        let (modifier_parts, key_part) = match s.rsplit_once('+') {
            Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
            Some((mods, key)) => (mods, key),
            None => ("", s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in modifier_parts.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(format!("unknown modifier: {}", part)),
            }
        }

        let code = Self::parse_key_code(key_part)?;
        Ok(Self { code, modifiers })
    }

    fn parse_key_code(s: &str) -> Result<KeyCode, String> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(KeyCode::Char(c.to_ascii_lowercase()));
        }

        let lower = s.to_lowercase();
        if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            if (1..=12).contains(&n) {
                return Ok(KeyCode::F(n));
            }
        }

        match lower.as_str() {
            "enter" | "return" => Ok(KeyCode::Enter),
            "esc" | "escape" => Ok(KeyCode::Esc),
            "tab" => Ok(KeyCode::Tab),
            "backtab" => Ok(KeyCode::BackTab),
            "backspace" => Ok(KeyCode::Backspace),
            "delete" | "del" => Ok(KeyCode::Delete),
            "home" => Ok(KeyCode::Home),
            "end" => Ok(KeyCode::End),
            "pageup" | "pgup" => Ok(KeyCode::PageUp),
            "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
            "up" => Ok(KeyCode::Up),
            "down" => Ok(KeyCode::Down),
            "left" => Ok(KeyCode::Left),
            "right" => Ok(KeyCode::Right),
            "space" => Ok(KeyCode::Char(' ')),
            _ => Err(format!("unknown key: {}", s)),
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let normalize = |code: KeyCode| match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };

        // Terminals report BackTab with Shift held
        let modifiers = if code == KeyCode::BackTab {
            modifiers.difference(KeyModifiers::SHIFT)
        } else {
            modifiers
        };

        normalize(self.code) == normalize(code) && self.modifiers == modifiers
    }
}

impl std::fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }

        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("F{}", n),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            other => format!("{:?}", other),
        };
        parts.push(key);

        write!(f, "{}", parts.join("+"))
    }
}
