// src/core/types.rs
use crate::error::TranscodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plain text into the scheme's symbols.
    Encode,
    /// Scheme symbols back into plain text.
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encode"),
            Direction::Decode => f.write_str("decode"),
        }
    }
}

impl FromStr for Direction {
    type Err = TranscodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encode" => Ok(Direction::Encode),
            "decode" => Ok(Direction::Decode),
            _ => Err(TranscodeError::UnknownDirection(s.to_string())),
        }
    }
}

/// One call into the engine. Transient; nothing about it is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub scheme: String,
    pub sub_mode: String,
    pub direction: Direction,
    pub text: String,
}

impl ConversionRequest {
    pub fn new(
        scheme: impl Into<String>,
        sub_mode: impl Into<String>,
        direction: Direction,
        text: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            sub_mode: sub_mode.into(),
            direction,
            text: text.into(),
        }
    }

    pub fn encode(scheme: impl Into<String>, sub_mode: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(scheme, sub_mode, Direction::Encode, text)
    }

    pub fn decode(scheme: impl Into<String>, sub_mode: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(scheme, sub_mode, Direction::Decode, text)
    }
}
