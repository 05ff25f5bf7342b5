// File: src/error.rs
//! Error types for the transcoding engine.
//!
//! [`ValidationError`] describes bad *content* and is handed back as data.
//! [`TranscodeError`] describes a structurally invalid *request*.

use thiserror::Error;

/// Malformed content for a codec. The display text is what end users see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Number-mode encoders accept only whole, non-negative integers.
    #[error("Please enter a valid, whole, non-negative number!")]
    InvalidNumber,

    #[error("Please enter a valid binary string")]
    InvalidBinary,

    #[error("Please enter a valid hex string")]
    InvalidHex,
}

/// The outcome of running a codec over one input.
pub type ConversionResult = std::result::Result<String, ValidationError>;

/// Dispatcher misuse. Callers log these; they are never translation output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscodeError {
    #[error("Unknown encoding: {0}")]
    UnknownScheme(String),

    #[error("Unknown conversion type '{sub_mode}' for encoding '{scheme}'")]
    UnknownSubMode { scheme: String, sub_mode: String },

    #[error("No encoder available for {scheme}:{sub_mode}")]
    NoEncoder { scheme: String, sub_mode: String },

    #[error("No decoder available for {scheme}:{sub_mode}")]
    NoDecoder { scheme: String, sub_mode: String },

    /// The request exceeds the configured input cap.
    #[error("Input of {actual} characters exceeds the limit of {limit}")]
    InputTooLong { limit: usize, actual: usize },

    #[error("Unknown direction '{0}', expected 'encode' or 'decode'")]
    UnknownDirection(String),
}

/// A convenience `Result` alias for dispatcher operations.
pub type Result<T> = std::result::Result<T, TranscodeError>;

/// Failures while loading or saving the engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not replace config file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
