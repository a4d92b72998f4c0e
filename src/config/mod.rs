//! Configuration module for colspec.
//!
//! Handles settings for output formatting and diagnostic rendering.

mod settings;

pub use settings::{
    DiagnosticSettings, OutputFormat, OutputSettings, Settings, SettingsError, CONFIG_ENV_VAR,
};
