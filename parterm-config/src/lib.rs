//! Partermai Configuration
//!
//! Typed settings for the partermai modes. Nothing here reads the
//! environment or looks for a file on its own: a configuration file is
//! only loaded when the caller hands over an explicit path.
//!
//! - [`config`] - Loading with fallback to defaults
//! - [`types`] - Data structures for UI, editor and shell settings
//! - [`defaults`] - Built-in values
//! - [`parser`] - TOML parsing and validation
//! - [`writer`] - Serializing a config back to TOML

pub mod config;
pub mod defaults;
pub mod parser;
pub mod types;
pub mod writer;

pub use types::{Config, EditorConfig, ShellConfig, UiConfig};

/// Errors that can occur during config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
