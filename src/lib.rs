// src/lib.rs

pub mod c_api;
pub mod codecs;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;

pub use crate::config::TranscoderConfig;
pub use crate::core::engine::Transcoder;
pub use crate::core::registry::{SchemeDescriptor, SchemeRegistry, SubModeDescriptor};
pub use crate::core::substitution::MatchStrategy;
pub use crate::core::types::{ConversionRequest, Direction};
pub use crate::error::{ConfigError, ConversionResult, TranscodeError, ValidationError};
