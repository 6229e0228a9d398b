use serde::Deserialize;

use crate::keybindings::KeyAction;
use crate::ui::Theme;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Theme at startup: "light" or "dark"
    #[serde(default)]
    pub theme: Theme,

    /// Branding shown in the header
    #[serde(default)]
    pub dealer: DealerConfig,

    /// Custom keybindings
    #[serde(default)]
    pub keybindings: Option<KeybindingsConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dealership branding
#[derive(Debug, Clone, Deserialize)]
pub struct DealerConfig {
    #[serde(default = "default_brand")]
    pub brand: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            subtitle: default_subtitle(),
        }
    }
}

fn default_brand() -> String {
    "PEUGEOT".to_string()
}

fn default_subtitle() -> String {
    "Yetkili Servis".to_string()
}

/// Keybinding configuration for customizing keyboard shortcuts
#[derive(Debug, Clone, Deserialize, Default)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub quit: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub toggle_theme: Option<String>,
    #[serde(default)]
    pub submit: Option<String>,
    #[serde(default)]
    pub next_field: Option<String>,
    #[serde(default)]
    pub prev_field: Option<String>,
}

impl KeybindingsConfig {
    /// Configured key for each remappable action
    pub fn entries(&self) -> [(Option<&String>, KeyAction); 6] {
        [
            (self.quit.as_ref(), KeyAction::Quit),
            (self.help.as_ref(), KeyAction::Help),
            (self.toggle_theme.as_ref(), KeyAction::ToggleTheme),
            (self.submit.as_ref(), KeyAction::Submit),
            (self.next_field.as_ref(), KeyAction::NextField),
            (self.prev_field.as_ref(), KeyAction::PrevField),
        ]
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// Log file path (supports ~)
    #[serde(default = "default_log_file")]
    pub file: String,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_logging_enabled() -> bool {
    true
}

fn default_log_file() -> String {
    "/tmp/service-booking.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: Config = serde_yml::from_str("{}").unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.dealer.brand, "PEUGEOT");
        assert_eq!(config.dealer.subtitle, "Yetkili Servis");
        assert!(config.keybindings.is_none());
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_full_document() {
        let yaml = r#"
theme: dark
dealer:
  brand: ACME MOTORS
keybindings:
  toggle_theme: Alt+d
logging:
  enabled: false
  level: debug
"#;
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.dealer.brand, "ACME MOTORS");
        assert_eq!(config.dealer.subtitle, "Yetkili Servis");
        let keybindings = config.keybindings.unwrap();
        assert_eq!(keybindings.toggle_theme.as_deref(), Some("Alt+d"));
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.file, "/tmp/service-booking.log");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(serde_yml::from_str::<Config>("theme: sepia").is_err());
    }
}
