use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::message;

fn default_base_class() -> String {
    message::BASE_CLASS.to_string()
}

fn default_dismiss_ms() -> u64 {
    message::DISMISS_AFTER.as_millis() as u64
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base class token every message carries
    #[serde(default = "default_base_class")]
    pub base_class: String,

    /// How long a message stays on screen, in milliseconds
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u64,

    /// Mirror on-screen messages to the desktop via libnotify
    #[serde(default)]
    pub desktop_notifications: bool,

    /// Show the two sample messages when the TUI starts
    #[serde(default = "default_true")]
    pub startup_demo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_class: default_base_class(),
            dismiss_ms: default_dismiss_ms(),
            desktop_notifications: false,
            startup_demo: true,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("tosuto");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        let config = AppConfig::default();
        let _ = config.save();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(&self.sanitized())?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Dismiss window as a Duration
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_ms)
    }

    /// Clean up invalid values before persisting them.
    ///
    /// The base class must be a single class token: non-empty, no
    /// whitespace, no escape codes.
    fn sanitized(&self) -> Self {
        let mut clean = self.clone();

        let token = clean.base_class.trim().to_string();
        if token.is_empty() || token.contains(char::is_whitespace) || token.contains('\x1b') {
            clean.base_class = default_base_class();
        } else {
            clean.base_class = token;
        }

        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            base_class: "banner".to_string(),
            dismiss_ms: 5000,
            desktop_notifications: true,
            startup_demo: false,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.base_class, deserialized.base_class);
        assert_eq!(config.dismiss_ms, deserialized.dismiss_ms);
        assert_eq!(config.desktop_notifications, deserialized.desktop_notifications);
        assert_eq!(config.startup_demo, deserialized.startup_demo);
    }

    #[test]
    fn defaults_match_the_display_contract() {
        let config = AppConfig::default();
        assert_eq!(config.base_class, "message");
        assert_eq!(config.dismiss_ms, 3000);
        assert_eq!(config.dismiss_after(), Duration::from_millis(3000));
        assert!(config.startup_demo);
        assert!(!config.desktop_notifications);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_class, "message");
        assert_eq!(config.dismiss_ms, 3000);
    }

    #[test]
    fn sanitize_rejects_non_token_base_classes() {
        let mut config = AppConfig::default();

        config.base_class = "  banner  ".to_string();
        assert_eq!(config.sanitized().base_class, "banner");

        config.base_class = "two tokens".to_string();
        assert_eq!(config.sanitized().base_class, "message");

        config.base_class = String::new();
        assert_eq!(config.sanitized().base_class, "message");
    }
}
