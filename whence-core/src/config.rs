//! TOML configuration with XDG base directory paths.
//!
//! Settings live in `$XDG_CONFIG_HOME/whence/config.toml`. Persisted UI
//! state goes under `$XDG_DATA_HOME/whence/` and logs under
//! `$XDG_STATE_HOME/whence/`. Every field has a default, so a missing or
//! sparse config file is fine.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

fn home() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve one XDG base directory from its env var.
///
/// An unset or empty variable falls back to the conventional location
/// under the home directory, per the XDG basedir rules.
fn xdg_base(var: &str, fallback: &str) -> PathBuf {
    match std::env::var_os(var) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home().join(fallback),
    }
}

/// Top-level settings, one section per concern.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Date display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Startup notice configuration
    #[serde(default)]
    pub notice: NoticeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Date display configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// How often live labels refresh, in milliseconds (0 disables refresh)
    #[serde(default = "DisplayConfig::default_interval")]
    pub update_interval_ms: u64,

    /// Start with absolute dates instead of relative ones
    #[serde(default)]
    pub absolute: bool,

    /// Show the absolute form alongside relative labels
    #[serde(default)]
    pub tooltip: bool,

    /// Include the time of day in absolute dates
    #[serde(default = "DisplayConfig::default_include_time")]
    pub include_time: bool,
}

impl DisplayConfig {
    fn default_interval() -> u64 {
        1000
    }

    fn default_include_time() -> bool {
        true
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: Self::default_interval(),
            absolute: false,
            tooltip: false,
            include_time: Self::default_include_time(),
        }
    }
}

/// Startup notice configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeConfig {
    /// Show the notice bar at all
    #[serde(default = "NoticeConfig::default_enabled")]
    pub enabled: bool,

    /// Stable id; dismissal is remembered per id
    #[serde(default = "NoticeConfig::default_id")]
    pub id: String,

    /// Headline text
    #[serde(default = "NoticeConfig::default_title")]
    pub title: String,

    /// Body text
    #[serde(default = "NoticeConfig::default_body")]
    pub body: String,
}

impl NoticeConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_id() -> String {
        "welcome".to_string()
    }

    fn default_title() -> String {
        "Welcome to whence".to_string()
    }

    fn default_body() -> String {
        "Labels refresh on their own. Press d to dismiss this notice.".to_string()
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            id: Self::default_id(),
            title: Self::default_title(),
            body: Self::default_body(),
        }
    }
}

/// Log file level and retention
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to the log file
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Rotated log files kept on disk before pruning
    #[serde(default = "LoggingConfig::default_max_files")]
    pub max_files: usize,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }

    fn default_max_files() -> usize {
        5
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            max_files: Self::default_max_files(),
        }
    }
}

impl Config {
    /// Read settings from the standard config path, or fall back to
    /// built-in defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Read and validate settings from an explicit file.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("could not read {}: {}", path.display(), e)))?;

        let config: Config = toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("{} is not valid TOML: {}", path.display(), e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the UI cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.display.update_interval_ms > 0 && self.display.update_interval_ms < 100 {
            return Err(Error::Config(
                "display.update_interval_ms must be 0 or at least 100".to_string(),
            ));
        }
        if self.notice.enabled && self.notice.id.is_empty() {
            return Err(Error::Config(
                "notice.id must not be empty when the notice is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// `$XDG_CONFIG_HOME/whence/config.toml`
    pub fn config_path() -> PathBuf {
        xdg_base("XDG_CONFIG_HOME", ".config")
            .join("whence")
            .join("config.toml")
    }

    /// `$XDG_DATA_HOME/whence/`, holding persisted UI state.
    pub fn data_dir() -> PathBuf {
        xdg_base("XDG_DATA_HOME", ".local/share").join("whence")
    }

    /// `$XDG_STATE_HOME/whence/`, holding logs.
    pub fn state_dir() -> PathBuf {
        xdg_base("XDG_STATE_HOME", ".local/state").join("whence")
    }

    /// `$XDG_DATA_HOME/whence/state.toml`
    pub fn store_path() -> PathBuf {
        Self::data_dir().join("state.toml")
    }

    /// `$XDG_STATE_HOME/whence/whence.log`
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("whence.log")
    }

    /// Populate any unset XDG base directory variables with their
    /// conventional values, so path resolution stays stable for the
    /// whole process no matter which component asks first.
    pub fn ensure_xdg_env() {
        let home = home();
        let defaults = [
            ("XDG_CONFIG_HOME", ".config"),
            ("XDG_DATA_HOME", ".local/share"),
            ("XDG_STATE_HOME", ".local/state"),
        ];
        for (var, rel) in defaults {
            if std::env::var_os(var).is_none() {
                std::env::set_var(var, home.join(rel));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_file() {
        let config = Config::default();
        assert_eq!(config.display.update_interval_ms, 1000);
        assert!(!config.display.absolute);
        assert!(config.display.include_time);
        assert!(config.notice.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_parses_every_section() {
        let raw = r#"
[display]
update_interval_ms = 250
absolute = true
tooltip = true

[notice]
enabled = false

[logging]
level = "trace"
max_files = 9
"#;
        let config: Config = toml::from_str(raw).unwrap();

        assert_eq!(config.display.update_interval_ms, 250);
        assert!(config.display.absolute);
        assert!(config.display.tooltip);
        assert!(!config.notice.enabled);
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.max_files, 9);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let raw = r#"
[display]
tooltip = true
"#;
        let config: Config = toml::from_str(raw).unwrap();
        assert!(config.display.tooltip);
        assert_eq!(config.display.update_interval_ms, 1000);
        assert!(config.display.include_time);
        assert_eq!(config.notice.id, "welcome");
    }

    #[test]
    fn test_validation_rejects_tiny_intervals() {
        let config: Config = toml::from_str("[display]\nupdate_interval_ms = 50").unwrap();
        assert!(config.validate().is_err());

        let config: Config = toml::from_str("[display]\nupdate_interval_ms = 0").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_enabled_notice_without_id() {
        let config: Config = toml::from_str("[notice]\nenabled = true\nid = \"\"").unwrap();
        assert!(config.validate().is_err());

        let config: Config = toml::from_str("[notice]\nenabled = false\nid = \"\"").unwrap();
        assert!(config.validate().is_ok());
    }
}
