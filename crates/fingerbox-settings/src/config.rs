//! Configuration and settings management for Fingerbox
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is platform specific.
//!
//! Configuration is organized into logical sections:
//! - Box defaults (dimensions, material, joints)
//! - Export preferences (stroke width, output directory)

use std::path::{Path, PathBuf};

use fingerbox_camtools::{BoxParameters, SvgOptions};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// File name used inside the platform configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Export preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Stroke width of exported cut lines in mm
    pub stroke_width: f64,
    /// Directory the CLI writes into when neither `--output` nor
    /// `--output-dir` is given. Unset means print to stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            stroke_width: SvgOptions::default().stroke_width,
            output_directory: None,
        }
    }
}

impl ExportSettings {
    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            stroke_width: self.stroke_width,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Parameters used when nothing is given on the command line
    pub box_defaults: BoxParameters,
    /// Export preferences
    pub export: ExportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )
        .into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/fingerbox/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("fingerbox").join(CONFIG_FILE_NAME))
            .ok_or_else(|| ConfigError::NoConfigDirectory.into())
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.box_defaults
            .validate()
            .map_err(ConfigError::BoxDefaults)?;

        if self.export.stroke_width.is_nan() || self.export.stroke_width <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "export.stroke_width".to_string(),
                reason: "must be > 0".to_string(),
            });
        }

        Ok(())
    }
}
