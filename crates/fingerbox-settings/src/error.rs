//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration loading,
//! saving and validation.

use std::io;
use thiserror::Error;

use fingerbox_camtools::ParameterError;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The configuration file could not be saved.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// A configuration validation error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The box defaults are outside the accepted ranges.
    #[error("Invalid box defaults: {0}")]
    BoxDefaults(#[from] ParameterError),

    /// No platform configuration directory could be determined.
    #[error("No configuration directory available on this platform")]
    NoConfigDirectory,
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
