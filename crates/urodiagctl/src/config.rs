//! urodiagctl configuration
//!
//! Optional TOML configuration at `<config dir>/urodiag/config.toml`
//! (e.g. ~/.config/urodiag/config.toml on Linux). Every field has a
//! default; a missing or unreadable file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_DIR: &str = "urodiag";
const CONFIG_FILE: &str = "config.toml";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Default dataset file for `summary` and `evaluate`
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: default_color(),
            data_file: None,
        }
    }
}

/// Location of the config file, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config, falling back to defaults when absent or invalid.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Load config from a specific path, falling back to defaults.
pub fn load_from(path: &Path) -> Config {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        // Absent file is the normal case, not worth a warning
        Err(_) => return Config::default(),
    };

    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring invalid config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.color);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let config = load_from(Path::new("/nonexistent/urodiag/config.toml"));
        assert!(config.color);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "color = false\n").unwrap();

        let config = load_from(&path);
        assert!(!config.color);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "color = true\ndata_file = \"/data/diagnosis_cleaned.csv\"\n").unwrap();

        let config = load_from(&path);
        assert_eq!(
            config.data_file.as_deref(),
            Some(Path::new("/data/diagnosis_cleaned.csv"))
        );
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "color = \"loud\"\n").unwrap();

        let config = load_from(&path);
        assert!(config.color);
    }
}
