//! Application settings read from a TOML file.
//!
//! Every field has a default, so a missing or partial file is fine. A broken
//! file is logged and ignored rather than stopping the app.

use crate::error::StorageError;
use crate::models::AccessibilityPrefs;
use crate::models::session_clock::DEFAULT_SESSION_SECONDS;
use crate::models::swipe::SWIPE_THRESHOLD;
use log::{info, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "FLASHZILLA_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "flashzilla.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub session_seconds: u32,
    pub swipe_threshold: f32,
    pub differentiate_without_color: bool,
    pub reduce_motion: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("flashzilla.sqlite3"),
            session_seconds: DEFAULT_SESSION_SECONDS,
            swipe_threshold: SWIPE_THRESHOLD,
            differentiate_without_color: false,
            reduce_motion: false,
        }
    }
}

impl AppConfig {
    pub fn accessibility_prefs(&self) -> AccessibilityPrefs {
        AccessibilityPrefs {
            differentiate_without_color: self.differentiate_without_color,
            reduce_motion: self.reduce_motion,
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, StorageError> {
        let mut config: Self = toml::from_str(contents)?;
        if config.session_seconds == 0 {
            warn!(
                "session_seconds must be positive, using {}",
                DEFAULT_SESSION_SECONDS
            );
            config.session_seconds = DEFAULT_SESSION_SECONDS;
        }
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, StorageError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Loads from `$FLASHZILLA_CONFIG` or `flashzilla.toml`, falling back to
    /// defaults.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_or_default(&path)
    }

    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_path(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml("session_seconds = 45").unwrap();

        assert_eq!(config.session_seconds, 45);
        assert_eq!(config.swipe_threshold, 100.0);
        assert_eq!(config.database_path, PathBuf::from("flashzilla.sqlite3"));
    }

    #[test]
    fn test_full_file() {
        let config = AppConfig::from_toml(
            r#"
database_path = "/tmp/cards.db"
session_seconds = 300
swipe_threshold = 80.0
reduce_motion = true
"#,
        )
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/cards.db"));
        assert_eq!(config.session_seconds, 300);
        assert_eq!(config.swipe_threshold, 80.0);
        assert!(config.accessibility_prefs().reduce_motion);
        assert!(!config.accessibility_prefs().differentiate_without_color);
    }

    #[test]
    fn test_zero_seconds_falls_back_to_default() {
        let config = AppConfig::from_toml("session_seconds = 0").unwrap();
        assert_eq!(config.session_seconds, DEFAULT_SESSION_SECONDS);
    }

    #[test]
    fn test_negative_seconds_rejected() {
        assert!(AppConfig::from_toml("session_seconds = -5").is_err());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flashzilla.toml");
        std::fs::write(&path, "session_seconds = \"soon\"").unwrap();

        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }
}
