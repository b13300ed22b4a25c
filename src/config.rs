use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::clipboard::ClipboardBackend;
use crate::keybindings::KeybindingsConfig;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Surface the demo is mounted on: "root" or "inline"
    #[serde(default = "default_mount")]
    pub mount: String,

    #[serde(default)]
    pub clipboard: ClipboardBackend,

    /// Clear the status message this long after a copy. Unset keeps it.
    #[serde(default)]
    pub status_timeout_ms: Option<u64>,

    /// Rows reserved when mounted inline
    #[serde(default = "default_inline_height")]
    pub inline_height: u16,

    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_mount() -> String {
    "root".to_string()
}

fn default_inline_height() -> u16 {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mount: default_mount(),
            clipboard: ClipboardBackend::default(),
            status_timeout_ms: None,
            inline_height: default_inline_height(),
            keybindings: KeybindingsConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        config.keybindings = config.keybindings.merge_with_defaults();

        Ok(config)
    }

    pub fn status_timeout(&self) -> Option<Duration> {
        self.status_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.mount, "root");
        assert_eq!(config.clipboard, ClipboardBackend::System);
        assert_eq!(config.status_timeout(), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("theme"));
        assert!(toml_str.contains("mount = \"root\""));
        assert!(toml_str.contains("clipboard = \"system\""));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
        theme = "dark"
        clipboard = "osc52"
        status_timeout_ms = 2000
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.mount, "root");
        assert_eq!(config.clipboard, ClipboardBackend::Osc52);
        assert_eq!(config.status_timeout(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn test_load_merges_keybindings() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "mount = \"inline\"").unwrap();
        writeln!(file, "[keybindings]").unwrap();
        writeln!(file, "\"<F2>\" = \"copy\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.mount, "inline");
        assert_eq!(config.keybindings.bindings.get("<F2>").map(String::as_str), Some("copy"));
        assert_eq!(config.keybindings.bindings.get("q").map(String::as_str), Some("quit"));
    }

    #[test]
    fn test_load_invalid_file_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "clipboard = \"carrier-pigeon\"").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
