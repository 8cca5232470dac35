//! Console configuration.
//!
//! Loaded from an optional TOML file; every field has a default and CLI
//! flags override file values.
//!
//! ```toml
//! [service]
//! base_url = "http://127.0.0.1:5000"
//! request_timeout_ms = 10000
//! connect_timeout_ms = 2000
//!
//! [ui]
//! tick_ms = 100
//! notice_ttl_ms = 4000
//! sidebar_expanded = true
//!
//! [logging]
//! level = "info"
//! file = "hq-admin.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use hq_service::HttpSettings;
use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminConfig {
    pub service: ServiceConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Where the hospital service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_ms: 10_000,
            connect_timeout_ms: 2_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Event poll interval; also the redraw cadence.
    pub tick_ms: u64,
    pub notice_ttl_ms: u64,
    pub sidebar_expanded: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            notice_ttl_ms: 4_000,
            sidebar_expanded: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `hq_admin=debug`.
    pub level: String,
    /// Log destination; `None` writes `hq-admin.log` in the temp directory.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AdminConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.service.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid("service.base_url is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "service.base_url must be an http(s) URL, got {url}"
            )));
        }
        if self.service.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "service.request_timeout_ms must be positive".to_string(),
            ));
        }
        if self.service.connect_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "service.connect_timeout_ms must be positive".to_string(),
            ));
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Invalid("ui.tick_ms must be positive".to_string()));
        }
        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            ConfigError::Invalid(format!("logging.level {:?}: {e}", self.logging.level))
        })?;
        Ok(())
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            request_timeout: Duration::from_millis(self.service.request_timeout_ms),
            connect_timeout: Duration::from_millis(self.service.connect_timeout_ms),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.ui.notice_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.http_settings().request_timeout, Duration::from_secs(10));
        assert_eq!(config.http_settings().connect_timeout, Duration::from_secs(2));
        assert_eq!(config.notice_ttl(), Duration::from_secs(4));
        assert!(config.ui.sidebar_expanded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AdminConfig::parse(
            r#"
            [service]
            base_url = "https://queue.example.org"

            [ui]
            sidebar_expanded = false
            "#,
        )
        .unwrap();

        assert_eq!(config.service.base_url, "https://queue.example.org");
        assert_eq!(config.service.request_timeout_ms, 10_000);
        assert!(!config.ui.sidebar_expanded);
        assert_eq!(config.ui.tick_ms, 100);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[logging]\nlevel = \"hq_admin=debug\"\nfile = \"/tmp/hq.log\"\n\n[ui]\nnotice_ttl_ms = 1500"
        )
        .unwrap();

        let config = AdminConfig::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "hq_admin=debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/hq.log")));
        assert_eq!(config.notice_ttl(), Duration::from_millis(1500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AdminConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = AdminConfig::parse("[service]\nbase = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation() {
        let mut config = AdminConfig::default();
        config.service.base_url = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.service.base_url = "ftp://host".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config = AdminConfig::default();
        config.service.request_timeout_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config = AdminConfig::default();
        config.service.connect_timeout_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
