//! Error types for YAML configuration.

use paperswitch_core::ColorParseError;
use paperswitch_widgets::PaperSwitchError;
use thiserror::Error;

/// Error loading or applying a switch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// A color field is not a valid hex color
    #[error("Invalid color for '{field}': {source}")]
    InvalidColor {
        /// Field name
        field: String,
        /// Parse failure
        #[source]
        source: ColorParseError,
    },
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
    /// The switch rejected the resulting configuration
    #[error(transparent)]
    Switch(#[from] PaperSwitchError),
}
