mod loader;
mod types;
mod validator;

pub use loader::{expand_home, ConfigLoader};
pub use types::{Config, KeybindingsConfig, LoggingConfig};
pub use validator::ConfigValidator;
