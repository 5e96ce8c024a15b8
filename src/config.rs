//! Configuration management for the user directory
//!
//! Policy limits are read once at startup from an optional `config.toml`,
//! with `USERDIR_*` environment variables layered on top. Any key that is
//! absent falls back to the built-in default.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default number of slots in the directory
pub const DEFAULT_CAPACITY: usize = 15;

/// Substrings no password may contain, compared case-insensitively
pub const DEFAULT_FORBIDDEN_SUBSTRINGS: [&str; 5] =
    ["admin", "pass", "password", "qwerty", "ytrewq"];

/// Directory capacity and credential policy
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Number of slots, fixed for the lifetime of the directory
    pub capacity: usize,

    /// Shortest accepted username, in UTF-16 code units
    pub min_username_length: usize,

    /// Shortest accepted password, in UTF-16 code units
    pub min_password_length: usize,

    /// Decimal digits a password must contain
    pub min_password_digits: usize,

    /// Case-insensitive substrings rejected anywhere in a password
    pub forbidden_substrings: Vec<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            min_username_length: 5,
            min_password_length: 10,
            min_password_digits: 3,
            forbidden_substrings: DEFAULT_FORBIDDEN_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_environment(Self::environment())
    }

    /// `USERDIR_*` variables; `USERDIR_FORBIDDEN_SUBSTRINGS` is comma separated.
    fn environment() -> Environment {
        Environment::with_prefix("USERDIR")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("forbidden_substrings")
    }

    fn load_with_environment(environment: Environment) -> Result<Self, ConfigError> {
        // Installed layout first, then the working directory
        let config_paths = ["user-directory/config", "config"];

        let mut builder = Config::builder();
        for config_path in &config_paths {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }

        let settings = builder.add_source(environment).build()?;

        Self::from_settings(settings)
    }

    /// Load configuration from a single file. A missing file yields defaults.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let mut config: DirectoryConfig = settings.try_deserialize()?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Forbidden substrings are matched against a lowercased password,
    /// so they are stored lowercased too.
    fn normalize(&mut self) {
        for forbidden in &mut self.forbidden_substrings {
            *forbidden = forbidden.to_lowercase();
        }
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Message(
                "capacity must be greater than 0".into(),
            ));
        }

        if self.min_username_length == 0 {
            return Err(ConfigError::Message(
                "min_username_length must be greater than 0".into(),
            ));
        }

        if self.min_password_length == 0 {
            return Err(ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        // An empty entry is a substring of every password
        if self.forbidden_substrings.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::Message(
                "forbidden_substrings cannot contain an empty string".into(),
            ));
        }

        Ok(())
    }
}
