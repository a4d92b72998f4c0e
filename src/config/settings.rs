//! TOML-based configuration for the colspec CLI.
//!
//! Example configuration:
//! ```toml
//! [output]
//! format = "json"   # text, json, or debug
//! pretty = true
//!
//! [diagnostics]
//! color = false
//! source_name = "annotation"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "COLSPEC_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// How parse results are printed.
    pub output: OutputSettings,

    /// How parse errors are reported.
    pub diagnostics: DiagnosticSettings,
}

/// Output format for parse results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical annotation text.
    #[default]
    Text,
    /// JSON arrays of `{ field_name, ascending_order }` objects.
    Json,
    /// Rust debug representation.
    Debug,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

/// Diagnostic rendering configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DiagnosticSettings {
    /// Use colors in error reports.
    pub color: bool,

    /// Name shown for the annotation text in error reports.
    pub source_name: String,
}

impl Default for DiagnosticSettings {
    fn default() -> Self {
        Self {
            color: true,
            source_name: "annotation".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `COLSPEC_CONFIG`
    /// 2. `./colspec.toml`
    /// 3. `~/.config/colspec/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("colspec.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("colspec").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }
}
