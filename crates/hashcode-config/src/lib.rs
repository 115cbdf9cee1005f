//! Configuration for the hashcode demonstration.
//!
//! Load demo settings from TOML or YAML files to change the compared
//! contacts, the selector field list, logging and menu behavior without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use hashcode_config::DemoConfig;
//!
//! let config = DemoConfig::from_toml_str(r#"
//!     [contacts.second]
//!     name = "Gerda"
//!     age = 64
//!
//!     [selector]
//!     fields = ["age", "name"]
//! "#).unwrap();
//!
//! assert_eq!(config.contacts.first.name, "Gerhard");
//! assert_eq!(config.contacts.second.name, "Gerda");
//! assert_eq!(config.selector.fields, vec!["age", "name"]);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use hashcode_config::DemoConfig;
//!
//! let config = DemoConfig::load("hashcode.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

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

/// Main demo configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DemoConfig {
    /// Menu behavior.
    #[serde(default)]
    pub menu: MenuConfig,

    /// Log filtering.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// The two contacts compared by every demonstration.
    #[serde(default)]
    pub contacts: ContactPairConfig,

    /// Field names used by the selector demonstration.
    #[serde(default)]
    pub selector: SelectorConfig,
}

impl DemoConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as
    /// TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, cannot be parsed, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
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

    /// Checks the selector field list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the list is empty or names a
    /// field twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selector.fields.is_empty() {
            return Err(ConfigError::Invalid(
                "selector.fields must name at least one field".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in &self.selector.fields {
            if !seen.insert(field.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "selector.fields names `{}` more than once",
                    field
                )));
            }
        }
        Ok(())
    }

    /// Sets the two compared contacts.
    pub fn with_contacts(mut self, first: ContactConfig, second: ContactConfig) -> Self {
        self.contacts = ContactPairConfig { first, second };
        self
    }

    /// Sets the selector field names.
    pub fn with_selector_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selector.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether the screen is cleared before the menu is drawn.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.menu.clear_screen = clear;
        self
    }

    /// Sets whether a demonstration waits for a key before returning.
    pub fn with_pause_after_demo(mut self, pause: bool) -> Self {
        self.menu.pause_after_demo = pause;
        self
    }

    /// Sets the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = filter.into();
        self
    }
}

/// Menu behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MenuConfig {
    /// Clear the terminal before drawing the menu.
    pub clear_screen: bool,

    /// Wait for a key press after a demonstration.
    pub pause_after_demo: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            clear_screen: true,
            pause_after_demo: true,
        }
    }
}

/// Log filtering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "hashcode=warn".to_string(),
        }
    }
}

/// One contact's field values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ContactConfig {
    pub name: String,
    pub age: i32,
}

impl ContactConfig {
    /// Creates a new contact configuration.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        ContactConfig {
            name: name.into(),
            age,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig::new("Gerhard", 64)
    }
}

/// The pair of contacts a demonstration compares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ContactPairConfig {
    pub first: ContactConfig,
    pub second: ContactConfig,
}

/// Selector demonstration settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SelectorConfig {
    /// Field names, in hashing order.
    pub fields: Vec<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            fields: vec!["name".to_string(), "age".to_string()],
        }
    }
}
