//! Fingerbox Settings Crate
//!
//! Handles persisted configuration: default box parameters and export options.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
