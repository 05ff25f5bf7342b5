use crate::config::TranscoderConfig;
use crate::core::registry::{SchemeDescriptor, SchemeRegistry};
use crate::core::types::{ConversionRequest, Direction};
use crate::error::{ConversionResult, Result, TranscodeError};
use log::debug;

// The engine owns the registry and the settings it was built from. It holds
// no per-request state, so one instance can be shared across threads.
pub struct Transcoder {
    registry: SchemeRegistry,
    config: TranscoderConfig,
}

impl Transcoder {
    pub fn new(config: TranscoderConfig) -> Self {
        let registry = SchemeRegistry::with_defaults(&config);
        Self { registry, config }
    }

    /// Wraps a registry built by hand.
    pub fn with_registry(registry: SchemeRegistry, config: TranscoderConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &SchemeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TranscoderConfig {
        &self.config
    }

    /// Runs one request.
    ///
    /// The outer `Result` reports a bad request (unknown scheme, missing
    /// decoder, oversized input). The inner one is the codec's answer,
    /// which may itself be a validation message for the user.
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        let limit = self.config.max_input_chars;
        if limit > 0 {
            let actual = request.text.chars().count();
            if actual > limit {
                return Err(TranscodeError::InputTooLong { limit, actual });
            }
        }

        let sub_mode = self.registry.get_converter(&request.scheme, &request.sub_mode)?;
        debug!(
            "{} {}:{} ({} chars)",
            request.direction,
            request.scheme,
            request.sub_mode,
            request.text.len()
        );

        match request.direction {
            Direction::Encode => {
                if request.text.trim().is_empty() {
                    return Ok(Ok(String::new()));
                }
                Ok(sub_mode.encoder().encode(&request.text))
            }
            Direction::Decode => {
                let decoder = self.registry.get_decoder(&request.scheme, &request.sub_mode)?;
                if request.text.trim().is_empty() {
                    return Ok(Ok(String::new()));
                }
                Ok(decoder.decode(&request.text))
            }
        }
    }

    pub fn supports_decoding(&self, scheme: &str, sub_mode: &str) -> bool {
        self.registry.supports_decoding(scheme, sub_mode)
    }

    pub fn list_schemes(&self) -> Vec<SchemeDescriptor> {
        self.registry.list_schemes()
    }
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new(TranscoderConfig::default())
    }
}
