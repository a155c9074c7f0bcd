//! Application configuration, read from a RON file.
//!
//! The file is optional; every field falls back to its default when absent.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use tubegrab_engine::ServiceSettings;
use tubegrab_logging::grab_info;

pub const CONFIG_ENV: &str = "TUBEGRAB_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "./tubegrab.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub metadata_endpoint: String,
    pub artifact_endpoint: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub response_deadline_ms: u64,
    pub log_level: String,
    pub log_to_file: bool,
    /// Hand retrieval links to the system opener instead of only printing them.
    pub open_links: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let service = ServiceSettings::default();
        Self {
            metadata_endpoint: service.metadata_endpoint,
            artifact_endpoint: service.artifact_endpoint,
            connect_timeout_ms: millis(service.connect_timeout),
            request_timeout_ms: millis(service.request_timeout),
            response_deadline_ms: millis(service.response_deadline),
            log_level: "warn".to_string(),
            log_to_file: false,
            open_links: true,
        }
    }
}

impl AppConfig {
    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            metadata_endpoint: self.metadata_endpoint.clone(),
            artifact_endpoint: self.artifact_endpoint.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            response_deadline: Duration::from_millis(self.response_deadline_ms),
        }
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    grab_info!("Loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.service_settings(), ServiceSettings::default());
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tubegrab.ron");
        fs::write(
            &path,
            r#"(
                metadata_endpoint: "https://api.example.com/info",
                response_deadline_ms: 5000,
                log_level: "debug",
            )"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.metadata_endpoint, "https://api.example.com/info");
        assert_eq!(config.artifact_endpoint, AppConfig::default().artifact_endpoint);
        assert_eq!(
            config.service_settings().response_deadline,
            Duration::from_secs(5)
        );
        assert_eq!(config.log_level().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn unparseable_file_names_the_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.ron");
        fs::write(&path, "(metadata_endpoint: 42").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.ron"));
    }

    #[test]
    fn durations_convert_to_millis_without_wrapping() {
        assert_eq!(millis(Duration::from_secs(45)), 45_000);
        assert_eq!(millis(Duration::MAX), u64::MAX);
        assert_eq!(AppConfig::default().response_deadline_ms, 45_000);
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(config.log_level(), Err(ConfigError::LogLevel(_))));
    }
}
