use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DurationError {
    // Input errors
    #[error("Invalid duration magnitude: {input:?}")]
    InvalidMagnitude { input: String },

    #[error("Invalid bounds: min ({min}) is greater than max ({max})")]
    InvalidBounds { min: u64, max: u64 },

    // Unit table errors
    #[error("Invalid unit table: {reason}")]
    InvalidUnitTable { reason: String },

    #[error("No unit matched {seconds} seconds. The unit table is missing its sentinel")]
    NoMatchingUnit { seconds: u64 },

    // Configuration errors
    #[error("Config file not found at {path}. A template has been created - edit it and restart.")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid config: {message}")]
    ConfigInvalid { message: String },

    #[error("Failed to parse config file: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    // IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DurationError>;
