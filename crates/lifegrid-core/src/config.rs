//! Configuration loading and typed config structures for Lifegrid.
//!
//! The configuration lives in `lifegrid-config.yaml` in the working
//! directory. Every field has a default, so a partial file (or no file at
//! all) is valid.
//!
//! ```yaml
//! server:
//!   host: "0.0.0.0"
//!   port: 8080
//! simulation:
//!   default_max_iterations: 1000
//!   max_iterations_limit: 100000
//!   max_steps: 100000
//! logging:
//!   level: "info"
//!   format: "pretty"
//! ```

use std::path::Path;

use serde::Deserialize;

/// Environment variable overriding `server.host`.
pub const HOST_ENV: &str = "LIFEGRID_HOST";

/// Environment variable overriding `server.port`.
pub const PORT_ENV: &str = "LIFEGRID_PORT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level Lifegrid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LifegridConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Limits applied to simulation requests.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LifegridConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `LIFEGRID_HOST` and `LIFEGRID_PORT` override the listener address
    /// when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string. Environment overrides are
    /// not applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl HttpConfig {
    /// Override host and port from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Override host and port from `lookup`. An unparseable port is
    /// ignored with a warning.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV) {
            self.host = host;
        }
        if let Some(raw) = lookup(PORT_ENV) {
            match raw.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring invalid {PORT_ENV}");
                }
            }
        }
    }

    /// `host:port` string suitable for socket address parsing.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Limits applied to simulation requests made through the board service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Iteration budget for terminal-state searches when the request
    /// names none.
    #[serde(default = "default_max_iterations")]
    pub default_max_iterations: u32,

    /// Largest iteration budget a request may ask for.
    #[serde(default = "default_max_iterations_limit")]
    pub max_iterations_limit: u32,

    /// Largest step count a single advance request may ask for.
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_max_iterations: default_max_iterations(),
            max_iterations_limit: default_max_iterations_limit(),
            max_steps: default_max_steps(),
        }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error). `RUST_LOG`
    /// takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

const fn default_max_iterations() -> u32 {
    lifegrid_engine::DEFAULT_MAX_ITERATIONS.get()
}

const fn default_max_iterations_limit() -> u32 {
    100_000
}

const fn default_max_steps() -> u64 {
    100_000
}

fn default_log_level() -> String {
    String::from("info")
}
