//! Configuration system for the SentiForge dashboard.
//!
//! Load server, lexicon and logging settings from TOML or YAML files. Every
//! field has a default, so an empty file (or no file at all) is valid.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use sentiforge_config::DashboardConfig;
//!
//! let config = DashboardConfig::from_toml_str(r#"
//!     [server]
//!     port = 8080
//!
//!     [lexicon]
//!     path = "backend/sentiment_lexicon.csv"
//! "#).unwrap();
//!
//! assert_eq!(config.server.port, 8080);
//! assert_eq!(config.bind_address(), "0.0.0.0:8080");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use sentiforge_config::DashboardConfig;
//!
//! let config = DashboardConfig::load("dashboard.toml").unwrap_or_default();
//! assert_eq!(config.server.port, 5000);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Default lexicon dataset location, relative to the working directory.
pub const DEFAULT_LEXICON_PATH: &str = "data/sentiment_lexicon.csv";

/// Words reported at startup to confirm the lexicon loaded as expected.
pub const DEFAULT_PROBE_WORDS: [&str; 7] = [
    "gloomy",
    "happy",
    "terrible",
    "sad",
    "angry",
    "displeased",
    "annoyed",
];

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DashboardConfig {
    /// HTTP server settings.
    pub server: ServerConfig,

    /// Lexicon dataset and startup diagnostics.
    pub lexicon: LexiconConfig,

    /// Log filter settings.
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, can't be parsed, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks values that parse but can't be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }
        if self.lexicon.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("lexicon.path must not be empty".into()));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Sets the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Sets the lexicon dataset path.
    pub fn with_lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon.path = path.into();
        self
    }

    /// Sets the static asset directory, or disables static serving.
    pub fn with_static_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.server.static_dir = dir;
        self
    }

    /// Returns `host:port` for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// Port to bind.
    pub port: u16,

    /// Directory served for non-API routes; `None` disables it.
    pub static_dir: Option<PathBuf>,

    /// Whether to allow cross-origin requests from any origin.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: Some(PathBuf::from("static")),
            cors: true,
        }
    }
}

/// Lexicon configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LexiconConfig {
    /// CSV dataset with a `word,sentiment,score` header.
    pub path: PathBuf,

    /// Words whose presence is logged after loading.
    pub probe_words: Vec<String>,

    /// Text analyzed once at startup as a smoke test.
    pub self_test: Option<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LEXICON_PATH),
            probe_words: DEFAULT_PROBE_WORDS.iter().map(|w| w.to_string()).collect(),
            self_test: Some("gloomy".to_string()),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sentiforge_core=info,sentiforge_dashboard=info".to_string(),
        }
    }
}
