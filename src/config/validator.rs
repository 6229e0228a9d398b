//! Configuration validation
//!
//! Problems found here never stop the app; they are reported as warnings and
//! the affected setting falls back to its default.

use std::collections::HashMap;
use std::fmt;

use super::types::Config;
use crate::keybindings::{KeyAction, KeyBinding, KeybindingResolver};

/// Soft validation warnings shown on startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    InvalidKeybindingSyntax { key: String, reason: String },
    DuplicateKeybinding { key: String, actions: Vec<String> },
    OverridesDefault { key: String, action: String, replaced: String },
    EmptyBrand,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::InvalidKeybindingSyntax { key, reason } => {
                write!(f, "Invalid keybinding '{}': {}", key, reason)
            }
            ValidationWarning::DuplicateKeybinding { key, actions } => {
                write!(
                    f,
                    "Key '{}' bound to multiple actions: {}",
                    key,
                    actions.join(", ")
                )
            }
            ValidationWarning::OverridesDefault {
                key,
                action,
                replaced,
            } => write!(
                f,
                "Key '{}' for {} replaces the default binding of {}",
                key, action, replaced
            ),
            ValidationWarning::EmptyBrand => write!(f, "dealer.brand is empty"),
        }
    }
}

/// Configuration validator
pub struct ConfigValidator<'a> {
    config: &'a Config,
    warnings: Vec<ValidationWarning>,
}

impl<'a> ConfigValidator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            warnings: Vec::new(),
        }
    }

    /// Run all validation checks
    pub fn validate(mut self) -> Vec<ValidationWarning> {
        self.check_dealer();
        self.check_keybindings();
        self.warnings
    }

    fn check_dealer(&mut self) {
        if self.config.dealer.brand.trim().is_empty() {
            self.warnings.push(ValidationWarning::EmptyBrand);
        }
    }

    fn check_keybindings(&mut self) {
        let Some(keybindings) = &self.config.keybindings else {
            return;
        };

        let entries = keybindings.entries();
        let configured: Vec<KeyAction> = entries
            .iter()
            .filter(|(key, _)| key.is_some())
            .map(|(_, action)| *action)
            .collect();
        let defaults = KeybindingResolver::new();

        let mut by_binding: HashMap<KeyBinding, Vec<String>> = HashMap::new();
        for (key, action) in entries {
            let Some(key) = key else { continue };
            let action_name = format!("{:?}", action);
            match KeyBinding::parse(key) {
                Ok(binding) => {
                    // Actions that keep their defaults lose this key silently
                    let owner = defaults.resolve(binding.code, binding.modifiers);
                    if owner != KeyAction::None
                        && owner != action
                        && !configured.contains(&owner)
                    {
                        self.warnings.push(ValidationWarning::OverridesDefault {
                            key: binding.to_string(),
                            action: action_name.clone(),
                            replaced: format!("{:?}", owner),
                        });
                    }
                    by_binding.entry(binding).or_default().push(action_name)
                }
                Err(reason) => self
                    .warnings
                    .push(ValidationWarning::InvalidKeybindingSyntax {
                        key: format!("{} = {}", action_name, key),
                        reason,
                    }),
            }
        }

        let mut duplicates: Vec<ValidationWarning> = by_binding
            .into_iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(binding, actions)| ValidationWarning::DuplicateKeybinding {
                key: binding.to_string(),
                actions,
            })
            .collect();
        duplicates.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        self.warnings.extend(duplicates);
    }
}
