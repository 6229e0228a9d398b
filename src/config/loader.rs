use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

const APP_DIR: &str = "service-booking";

/// Configuration file loader
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(config_path: Option<&str>) -> Self {
        Self {
            config_path: config_path.map(PathBuf::from),
        }
    }

    /// Load and parse the configuration file, returning it with the path it
    /// was read from.
    ///
    /// Returns `Ok(None)` when no file was given and none exists in the
    /// standard locations.
    pub fn load(&self) -> Result<Option<(PathBuf, Config)>> {
        let Some(path) = self.find_config_file()? else {
            return Ok(None);
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Some((path, config)))
    }

    /// Search for configuration file in standard locations
    fn find_config_file(&self) -> Result<Option<PathBuf>> {
        // If explicit path provided, use it
        if let Some(path) = &self.config_path {
            let expanded = expand_home(path)?;
            if expanded.exists() {
                return Ok(Some(expanded));
            }
            return Err(anyhow!("Config file not found: {}", path.display()));
        }

        Ok(Self::search_paths().into_iter().find(|p| p.exists()))
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut search_paths = vec![
            PathBuf::from(format!("./{}.yml", APP_DIR)),
            PathBuf::from(format!("./{}.yaml", APP_DIR)),
        ];

        // Add user config directory
        if let Some(config_dir) = dirs::config_dir() {
            search_paths.push(config_dir.join(APP_DIR).join("config.yml"));
            search_paths.push(config_dir.join(APP_DIR).join("config.yaml"));
        }

        // Add system config
        search_paths.push(PathBuf::from("/etc").join(APP_DIR).join("config.yml"));
        search_paths.push(PathBuf::from("/etc").join(APP_DIR).join("config.yaml"));

        search_paths
    }
}

/// Expand ~ to home directory
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if let Some(stripped) = path_str.strip_prefix('~') {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot determine home directory"))?;
        let rest = stripped.strip_prefix('/').unwrap_or(stripped);
        Ok(home.join(rest))
    } else {
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "service-booking-{}-{}.yml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_path() {
        let path = temp_config("explicit", "theme: dark\n");
        let loader = ConfigLoader::new(path.to_str());
        let (source, config) = loader.load().unwrap().unwrap();
        assert_eq!(source, path);
        assert_eq!(config.theme, Theme::Dark);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let loader = ConfigLoader::new(Some("/nonexistent/service-booking.yml"));
        assert!(loader.load().is_err());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let path = temp_config("invalid", "theme: [light\n");
        let loader = ConfigLoader::new(path.to_str());
        let err = loader.load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_expand_home() {
        let plain = expand_home(Path::new("/etc/x.yml")).unwrap();
        assert_eq!(plain, PathBuf::from("/etc/x.yml"));

        if let Some(home) = dirs::home_dir() {
            let expanded = expand_home(Path::new("~/x.yml")).unwrap();
            assert_eq!(expanded, home.join("x.yml"));
        }
    }
}
