//! Application configuration.
//!
//! Defaults are overridable through the builder methods or the
//! `KAKOMON_*` environment variables read by [`AppConfig::from_env`].

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::settings::SETTINGS_FILE;
use crate::workflow::GENERATE_PATH;

pub const ENV_API_URL: &str = "KAKOMON_API_URL";
pub const ENV_DATA_DIR: &str = "KAKOMON_DATA_DIR";
pub const ENV_CATALOG: &str = "KAKOMON_CATALOG";
pub const ENV_LOG: &str = "KAKOMON_LOG";

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_UPLOAD_ADDR: &str = "127.0.0.1:3100";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration.
///
/// # Example
///
/// ```ignore
/// use kakomon::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_base_url("http://localhost:4000")
///     .with_request_timeout(std::time::Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the web API hosting the generation endpoint.
    pub api_base_url: String,
    /// Directory holding settings, logs and uploads (default `~/.kakomon`).
    pub data_dir: PathBuf,
    /// Optional catalog JSON replacing the built-in sample data.
    pub catalog_path: Option<PathBuf>,
    /// Timeout for a single generation request.
    pub request_timeout: Duration,
    /// How long notices stay on screen.
    pub notice_ttl: Duration,
    /// Bind address of the upload server.
    pub upload_addr: SocketAddr,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_dir: default_data_dir(),
            catalog_path: None,
            request_timeout: Duration::from_secs(60),
            notice_ttl: Duration::from_secs(3),
            upload_addr: SocketAddr::from(([127, 0, 0, 1], 3100)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".kakomon")
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by any `KAKOMON_*` variables that are set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_env(ENV_API_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(dir) = non_empty_env(ENV_DATA_DIR) {
            config = config.with_data_dir(dir);
        }
        if let Some(path) = non_empty_env(ENV_CATALOG) {
            config = config.with_catalog_path(path);
        }
        if let Some(filter) = non_empty_env(ENV_LOG) {
            config.log_filter = filter;
        }
        config
    }

    /// Set the API base URL. A trailing slash is dropped.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    pub fn with_upload_addr(mut self, addr: SocketAddr) -> Self {
        self.upload_addr = addr;
        self
    }

    /// Full URL of the generation endpoint.
    pub fn generation_endpoint(&self) -> String {
        format!("{}{}", self.api_base_url, GENERATE_PATH)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join("kakomon.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(
            config.generation_endpoint(),
            "http://localhost:3000/api/generate-similar"
        );
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.upload_addr.to_string(), DEFAULT_UPLOAD_ADDR);
        assert!(config.data_dir.ends_with(".kakomon"));
    }

    #[test]
    fn test_builder_paths() {
        let config = AppConfig::new()
            .with_api_base_url("https://exams.example.edu/")
            .with_data_dir("/tmp/kk");

        assert_eq!(
            config.generation_endpoint(),
            "https://exams.example.edu/api/generate-similar"
        );
        assert_eq!(config.settings_path(), PathBuf::from("/tmp/kk/settings.json"));
        assert_eq!(config.upload_dir(), PathBuf::from("/tmp/kk/uploads"));
        assert_eq!(config.log_file(), PathBuf::from("/tmp/kk/logs/kakomon.log"));
    }
}
