//! Dashboard configuration.
//!
//! Values are layered: built-in defaults, then environment variables, then
//! command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::cli::RunOptions;
use crate::models::Language;
use crate::websocket::WsClientConfig;

/// Analyzer endpoint used when nothing else is configured.
pub const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8000/ws/analyze";

/// Quiet time after the last edit before it is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

pub const ENV_WS_URL: &str = "SOLIDLENS_WS_URL";
pub const ENV_DEBOUNCE_MS: &str = "SOLIDLENS_DEBOUNCE_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid analyzer URL {0:?}: expected ws:// or wss://")]
    InvalidUrl(String),

    #[error("invalid {var} value {value:?}: expected milliseconds")]
    InvalidDebounce { var: &'static str, value: String },

    #[error("failed to read snippet from {path}: {source}")]
    SnippetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for a dashboard run.
///
/// Use the builder pattern to customize it.
///
/// # Example
///
/// ```ignore
/// use solidlens::startup::DashboardConfig;
///
/// let config = DashboardConfig::default()
///     .with_ws_url("ws://localhost:9000/ws/analyze")
///     .with_debounce(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Analyzer WebSocket endpoint
    pub ws_url: String,
    /// Debounce window for outbound edits
    pub debounce: Duration,
    /// Time allowed for the initial handshake
    pub connect_timeout: Duration,
    /// Language selected at startup
    pub language: Language,
    /// File to preload into the editor
    pub snippet_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ws_url: DEFAULT_WS_URL.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            connect_timeout: WsClientConfig::default().connect_timeout,
            language: Language::default(),
            snippet_path: None,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ws_url(mut self, url: impl Into<String>) -> Self {
        self.ws_url = url.into();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_snippet_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snippet_path = Some(path.into());
        self
    }

    /// Defaults overlaid with `SOLIDLENS_WS_URL` and `SOLIDLENS_DEBOUNCE_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`DashboardConfig::from_env`] with an injected variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_WS_URL).filter(|v| !v.trim().is_empty()) {
            config.ws_url = url.trim().to_string();
        }
        if let Some(value) = lookup(ENV_DEBOUNCE_MS).filter(|v| !v.trim().is_empty()) {
            let ms = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDebounce {
                    var: ENV_DEBOUNCE_MS,
                    value: value.clone(),
                })?;
            config.debounce = Duration::from_millis(ms);
        }
        Ok(config)
    }

    /// Apply command-line overrides on top of this config.
    pub fn apply_cli(mut self, options: &RunOptions) -> Self {
        if let Some(url) = &options.url {
            self.ws_url = url.clone();
        }
        if let Some(ms) = options.debounce_ms {
            self.debounce = Duration::from_millis(ms);
        }
        if let Some(language) = options.language {
            self.language = language;
        }
        if let Some(path) = &options.file {
            self.snippet_path = Some(path.clone());
        }
        self
    }

    /// Check the endpoint scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.ws_url.to_ascii_lowercase();
        if url.starts_with("ws://") || url.starts_with("wss://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidUrl(self.ws_url.clone()))
        }
    }

    /// Read the preload file, if one was configured.
    pub fn load_snippet(&self) -> Result<Option<String>, ConfigError> {
        self.snippet_path
            .as_deref()
            .map(read_snippet)
            .transpose()
    }

    pub fn ws_client_config(&self) -> WsClientConfig {
        WsClientConfig::default()
            .with_url(self.ws_url.clone())
            .with_connect_timeout(self.connect_timeout)
    }
}

fn read_snippet(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::SnippetRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.ws_url, DEFAULT_WS_URL);
        assert_eq!(config.debounce, DEFAULT_DEBOUNCE);
        assert_eq!(config.language, Language::Python);
        assert!(config.snippet_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DashboardConfig::new()
            .with_ws_url("wss://example.test/ws")
            .with_debounce(Duration::from_millis(100))
            .with_language(Language::Java)
            .with_snippet_path("a.py");
        assert_eq!(config.ws_url, "wss://example.test/ws");
        assert_eq!(config.debounce, Duration::from_millis(100));
        assert_eq!(config.language, Language::Java);
        assert_eq!(config.snippet_path, Some(PathBuf::from("a.py")));
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (ENV_WS_URL, "ws://10.0.0.2:8000/ws/analyze"),
            (ENV_DEBOUNCE_MS, " 750 "),
        ]))
        .unwrap();
        assert_eq!(config.ws_url, "ws://10.0.0.2:8000/ws/analyze");
        assert_eq!(config.debounce, Duration::from_millis(750));
    }

    #[test]
    fn test_lookup_ignores_blank_values() {
        let config =
            DashboardConfig::from_lookup(lookup(&[(ENV_WS_URL, "  "), (ENV_DEBOUNCE_MS, "")]))
                .unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_lookup_rejects_bad_debounce() {
        let err = DashboardConfig::from_lookup(lookup(&[(ENV_DEBOUNCE_MS, "fast")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDebounce { .. }));
    }

    #[test]
    fn test_cli_wins_over_env() {
        let options = RunOptions {
            url: Some("ws://cli/ws".to_string()),
            debounce_ms: Some(50),
            file: None,
            language: Some(Language::Cpp),
        };
        let config = DashboardConfig::from_lookup(lookup(&[(ENV_WS_URL, "ws://env/ws")]))
            .unwrap()
            .apply_cli(&options);
        assert_eq!(config.ws_url, "ws://cli/ws");
        assert_eq!(config.debounce, Duration::from_millis(50));
        assert_eq!(config.language, Language::Cpp);
    }

    #[test]
    fn test_validate_rejects_http() {
        let config = DashboardConfig::default().with_ws_url("http://localhost:8000");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_load_snippet_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "def f():\n    return 1\n").unwrap();
        let config = DashboardConfig::default().with_snippet_path(file.path());
        assert_eq!(
            config.load_snippet().unwrap(),
            Some("def f():\n    return 1\n".to_string())
        );
    }

    #[test]
    fn test_load_snippet_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::default().with_snippet_path(dir.path().join("nope.py"));
        assert!(matches!(
            config.load_snippet(),
            Err(ConfigError::SnippetRead { .. })
        ));
    }

    #[test]
    fn test_no_snippet_configured() {
        assert_eq!(DashboardConfig::default().load_snippet().unwrap(), None);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_env() {
        std::env::set_var(ENV_WS_URL, "ws://from-env:1234/ws");
        std::env::remove_var(ENV_DEBOUNCE_MS);
        let config = DashboardConfig::from_env().unwrap();
        std::env::remove_var(ENV_WS_URL);
        assert_eq!(config.ws_url, "ws://from-env:1234/ws");
        assert_eq!(config.debounce, DEFAULT_DEBOUNCE);
    }
}
