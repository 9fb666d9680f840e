//! Error types for the fallible edges of the engine.
//!
//! Gesture processing itself never fails; anomalies there degrade to keeping
//! the last valid geometry. Only host configuration and the persisted
//! settings file can produce errors.

use thiserror::Error;

/// Errors raised when validating host-supplied gesture configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A minimum dimension is negative or not a number
    #[error("Invalid minimum size: {width}x{height} (must be finite and >= 0)")]
    InvalidMinSize { width: f32, height: f32 },

    /// A maximum dimension is not a number or is below the minimum
    #[error("Maximum size {max_width}x{max_height} is below minimum {min_width}x{min_height}")]
    MaxBelowMin {
        min_width: f32,
        min_height: f32,
        max_width: f32,
        max_height: f32,
    },

    /// The initial size is not strictly positive
    #[error("Invalid initial size: {width}x{height} (must be finite and > 0)")]
    InvalidInitialSize { width: f32, height: f32 },

    /// The initial position is not finite
    #[error("Invalid initial position: ({x}, {y})")]
    InvalidInitialPosition { x: f32, y: f32 },
}

/// Result type alias for configuration validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading, saving or watching engine settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic save failed while moving the temp file into place
    #[error("Failed to persist settings: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// File watcher error from notify
    #[error("Watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// No platform config directory could be determined
    #[error("No config directory available on this platform")]
    NoConfigDir,

    /// Settings parsed but hold unusable values
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

impl From<ConfigError> for SettingsError {
    fn from(err: ConfigError) -> Self {
        SettingsError::Invalid(err.to_string())
    }
}
