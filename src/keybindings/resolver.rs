//! Keybinding resolution from key events to actions

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use super::KeyBinding;
use crate::config::KeybindingsConfig;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Quit,
    Help,
    ToggleTheme,
    Submit,
    NextField,
    PrevField,

    // No action bound to this key
    None,
}

/// Resolves key events to actions based on configuration
pub struct KeybindingResolver {
    bindings: HashMap<KeyBinding, KeyAction>,
    // Keep track of original binding strings for help display
    binding_display: HashMap<KeyAction, String>,
}

impl KeybindingResolver {
    /// Create a resolver with default keybindings
    pub fn new() -> Self {
        let mut resolver = Self {
            bindings: HashMap::new(),
            binding_display: HashMap::new(),
        };

        resolver.register_default("Ctrl+q", KeyAction::Quit);
        resolver.register_default("Ctrl+c", KeyAction::Quit);
        resolver.register_default("F1", KeyAction::Help);
        resolver.register_default("Ctrl+t", KeyAction::ToggleTheme);
        resolver.register_default("F2", KeyAction::ToggleTheme);
        resolver.register_default("Ctrl+s", KeyAction::Submit);

        // Navigation defaults
        resolver.register_default("Tab", KeyAction::NextField);
        resolver.register_default("Down", KeyAction::NextField);
        resolver.register_default("BackTab", KeyAction::PrevField);
        resolver.register_default("Up", KeyAction::PrevField);

        resolver
    }

    fn register_default(&mut self, key_str: &str, action: KeyAction) {
        if let Ok(binding) = KeyBinding::parse(key_str) {
            self.bindings.insert(binding, action);
            self.binding_display
                .entry(action)
                .or_insert_with(|| key_str.to_string());
        }
    }

    /// Create a resolver from configuration, falling back to defaults
    pub fn from_config(config: Option<&KeybindingsConfig>) -> Self {
        let mut resolver = Self::new();

        if let Some(keybindings) = config {
            for (key, action) in keybindings.entries() {
                resolver.remap_action(key, action);
            }
        }

        resolver
    }

    fn remap_action(&mut self, key_opt: Option<&String>, action: KeyAction) {
        let Some(key_str) = key_opt else {
            return;
        };
        // Invalid syntax keeps the defaults; the config validator reports it
        if let Ok(binding) = KeyBinding::parse(key_str) {
            self.bindings.retain(|_, v| *v != action);
            let displaced = self.bindings.insert(binding, action);
            self.binding_display.insert(action, key_str.clone());
            if let Some(other) = displaced {
                self.refresh_display(other);
            }
        }
    }

    /// Show one of the bindings `action` still has, or none if it lost them all
    fn refresh_display(&mut self, action: KeyAction) {
        let remaining = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(binding, _)| binding.to_string())
            .min();
        match remaining {
            Some(display) => self.binding_display.insert(action, display),
            None => self.binding_display.remove(&action),
        };
    }

    /// Resolve a key event to an action
    pub fn resolve(&self, code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(code, modifiers))
            .map(|(_, action)| *action)
            .unwrap_or(KeyAction::None)
    }

    /// Get the display string for an action's keybinding
    pub fn get_binding_display(&self, action: KeyAction) -> Option<&str> {
        self.binding_display.get(&action).map(|s| s.as_str())
    }
}

impl Default for KeybindingResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let resolver = KeybindingResolver::new();

        assert_eq!(
            resolver.resolve(KeyCode::Char('t'), KeyModifiers::CONTROL),
            KeyAction::ToggleTheme
        );
        assert_eq!(
            resolver.resolve(KeyCode::Char('s'), KeyModifiers::CONTROL),
            KeyAction::Submit
        );
        assert_eq!(
            resolver.resolve(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::NextField
        );
        assert_eq!(
            resolver.resolve(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevField
        );
        // Plain letters belong to the focused control
        assert_eq!(
            resolver.resolve(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::None
        );
    }

    #[test]
    fn test_config_remap() {
        let config = KeybindingsConfig {
            toggle_theme: Some("Alt+d".to_string()),
            help: Some("F10".to_string()),
            ..Default::default()
        };

        let resolver = KeybindingResolver::from_config(Some(&config));

        // Old bindings should no longer work
        assert_eq!(
            resolver.resolve(KeyCode::Char('t'), KeyModifiers::CONTROL),
            KeyAction::None
        );
        assert_eq!(
            resolver.resolve(KeyCode::F(2), KeyModifiers::NONE),
            KeyAction::None
        );

        // New bindings should work
        assert_eq!(
            resolver.resolve(KeyCode::Char('d'), KeyModifiers::ALT),
            KeyAction::ToggleTheme
        );
        assert_eq!(
            resolver.resolve(KeyCode::F(10), KeyModifiers::NONE),
            KeyAction::Help
        );
        assert_eq!(resolver.get_binding_display(KeyAction::Help), Some("F10"));
    }

    #[test]
    fn test_remap_onto_default_key_updates_display() {
        let config = KeybindingsConfig {
            submit: Some("Tab".to_string()),
            ..Default::default()
        };

        let resolver = KeybindingResolver::from_config(Some(&config));
        assert_eq!(
            resolver.resolve(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::Submit
        );
        // NextField keeps Down and must not advertise Tab any more
        assert_eq!(resolver.get_binding_display(KeyAction::NextField), Some("↓"));
        assert_eq!(resolver.get_binding_display(KeyAction::Submit), Some("Tab"));
    }

    #[test]
    fn test_action_losing_every_key_has_no_display() {
        let config = KeybindingsConfig {
            submit: Some("F1".to_string()),
            ..Default::default()
        };

        let resolver = KeybindingResolver::from_config(Some(&config));
        assert_eq!(resolver.get_binding_display(KeyAction::Help), None);
    }

    #[test]
    fn test_invalid_remap_keeps_default() {
        let config = KeybindingsConfig {
            submit: Some("Hyper+s".to_string()),
            ..Default::default()
        };

        let resolver = KeybindingResolver::from_config(Some(&config));
        assert_eq!(
            resolver.resolve(KeyCode::Char('s'), KeyModifiers::CONTROL),
            KeyAction::Submit
        );
        assert_eq!(resolver.get_binding_display(KeyAction::Submit), Some("Ctrl+s"));
    }
}
