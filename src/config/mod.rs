//! Configuration management for keyconv
//!
//! Supports loading configuration from:
//! - Built-in defaults
//! - Config file (keyconv.toml, or the path given with --config)
//! - Environment variables (KEYCONV_*)
//! - Command line overrides (--scheme)
//!
//! Key material never comes from here. Keys are supplied per invocation.

use crate::crypto::KeyScheme;
use crate::errors::{KeyConvError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix (KEYCONV_CODEC__SCHEME, etc.)
pub const ENV_PREFIX: &str = "KEYCONV";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Codec configuration
    pub codec: CodecConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Security configuration
    pub security: SecurityConfig,
}

/// Codec configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Expected key layout (keypair = 64 bytes, seed = 32 bytes)
    pub scheme: KeyScheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Disable core dumps before handling keys
    pub disable_core_dumps: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            disable_core_dumps: true,
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, None)
    }

    /// Load configuration, reading `KEYCONV_*` variables from `env` instead
    /// of the process environment when given
    fn load_with_env(
        config_path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Start with defaults
        builder = builder.add_source(config::Config::try_from(&Config::default())?);

        // An explicit path must exist; default locations are optional
        if let Some(path) = config_path {
            debug!("Loading config file {:?}", path);
            builder = builder.add_source(config::File::from(path).required(true));
        } else {
            builder = builder
                .add_source(config::File::with_name("keyconv").required(false))
                .add_source(config::File::with_name("/etc/keyconv/config").required(false));
        }

        // Values stay strings; typed fields convert them on deserialize
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        let config: Config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(KeyConvError::ConfigError(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(KeyConvError::ConfigError(format!(
                "Unknown log format '{}' (expected pretty or json)",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Apply command line overrides
    pub fn with_scheme(mut self, scheme: Option<KeyScheme>) -> Self {
        if let Some(scheme) = scheme {
            self.codec.scheme = scheme;
        }
        self
    }
}
