// File: src/core/registry.rs
use crate::codecs::{
    BinaryNumberCodec, BinaryTextCodec, Braille1Codec, Braille2Codec, ContractionsEncoder, Decoder,
    Encoder, HexNumberCodec, HexTextCodec, MorseCodec,
};
use crate::config::TranscoderConfig;
use crate::error::{Result, TranscodeError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One variant within a scheme, e.g. `binary:number`.
pub struct SubMode {
    id: &'static str,
    encode_label: &'static str,
    decode_label: &'static str,
    encoder: Arc<dyn Encoder>,
    decoder: Option<Arc<dyn Decoder>>,
}

impl SubMode {
    /// A sub-mode whose codec converts both ways.
    pub fn reversible<C>(id: &'static str, labels: (&'static str, &'static str), codec: C) -> Self
    where
        C: Encoder + Decoder + 'static,
    {
        let codec = Arc::new(codec);
        Self {
            id,
            encode_label: labels.0,
            decode_label: labels.1,
            encoder: codec.clone(),
            decoder: Some(codec),
        }
    }

    /// A sub-mode with no reverse conversion.
    pub fn one_way<E>(id: &'static str, encode_label: &'static str, encoder: E) -> Self
    where
        E: Encoder + 'static,
    {
        Self {
            id,
            encode_label,
            decode_label: "One-way only",
            encoder: Arc::new(encoder),
            decoder: None,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// The capability flag: whether a decoder is registered.
    pub fn decodable(&self) -> bool {
        self.decoder.is_some()
    }

    pub fn encoder(&self) -> &dyn Encoder {
        self.encoder.as_ref()
    }

    pub fn decoder(&self) -> Option<&dyn Decoder> {
        self.decoder.as_deref()
    }
}

/// A top-level encoding family and its sub-modes.
pub struct Scheme {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    sub_modes: Vec<SubMode>,
}

impl Scheme {
    pub fn new(id: &'static str, title: &'static str, description: &'static str) -> Self {
        Self { id, title, description, sub_modes: Vec::new() }
    }

    pub fn with_sub_mode(mut self, sub_mode: SubMode) -> Self {
        self.sub_modes.push(sub_mode);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn sub_modes(&self) -> &[SubMode] {
        &self.sub_modes
    }

    /// The sub-mode used when a caller does not name one: `text` if the
    /// scheme has it, otherwise the first registered.
    pub fn default_sub_mode(&self) -> Option<&SubMode> {
        self.sub_modes
            .iter()
            .find(|m| m.id == "text")
            .or_else(|| self.sub_modes.first())
    }
}

/// Serializable view of a scheme, for selection menus and `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub sub_modes: Vec<SubModeDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubModeDescriptor {
    pub id: String,
    pub decodable: bool,
    pub encode_label: String,
    pub decode_label: String,
}

/// Maps (scheme, sub-mode) to codecs. Built once; read-only afterwards.
pub struct SchemeRegistry {
    schemes: Vec<Scheme>,
}

impl SchemeRegistry {
    pub fn new() -> Self {
        Self { schemes: Vec::new() }
    }

    pub fn register(&mut self, scheme: Scheme) {
        debug!(
            "registering scheme '{}' with sub-modes {:?}",
            scheme.id,
            scheme.sub_modes.iter().map(|m| m.id).collect::<Vec<_>>()
        );
        self.schemes.retain(|s| s.id != scheme.id);
        self.schemes.push(scheme);
    }

    /// Morse, binary, hex and Braille with their standard sub-modes.
    pub fn with_defaults(config: &TranscoderConfig) -> Self {
        let mut registry = Self::new();

        registry.register(
            Scheme::new(
                "morse",
                "Morse Code Converter",
                "Convert text to Morse code and back. Type in either field for real-time conversion.",
            )
            .with_sub_mode(SubMode::reversible("text", ("Text → Morse", "Morse → Text"), MorseCodec::new())),
        );

        registry.register(
            Scheme::new(
                "binary",
                "Binary Converter",
                "Convert numbers or text to binary and back. Choose your conversion type above.",
            )
            .with_sub_mode(SubMode::reversible("text", ("Text → Binary", "Binary → Text"), BinaryTextCodec))
            .with_sub_mode(SubMode::reversible(
                "number",
                ("Decimal → Binary", "Binary → Decimal"),
                BinaryNumberCodec,
            )),
        );

        registry.register(
            Scheme::new(
                "hex",
                "Hexadecimal Converter",
                "Convert numbers or text to hexadecimal and back. Choose your conversion type above.",
            )
            .with_sub_mode(SubMode::reversible("text", ("Text → Hex", "Hex → Text"), HexTextCodec))
            .with_sub_mode(SubMode::reversible("number", ("Decimal → Hex", "Hex → Decimal"), HexNumberCodec)),
        );

        registry.register(
            Scheme::new(
                "braille",
                "Braille Converter",
                "Convert text to Braille patterns. Choose your Braille format above.",
            )
            .with_sub_mode(SubMode::reversible(
                "braille1",
                ("Text → Braille", "Braille → Text"),
                Braille1Codec::new(),
            ))
            .with_sub_mode(SubMode::reversible(
                "braille2",
                ("Text → Braille", "Braille → Text"),
                Braille2Codec::new(),
            ))
            .with_sub_mode(SubMode::one_way(
                "braille2_contractions",
                "Text → Braille",
                ContractionsEncoder::with_strategy(config.contraction_strategy),
            )),
        );

        registry
    }

    pub fn scheme(&self, scheme: &str) -> Result<&Scheme> {
        self.schemes
            .iter()
            .find(|s| s.id == scheme)
            .ok_or_else(|| TranscodeError::UnknownScheme(scheme.to_string()))
    }

    pub fn get_converter(&self, scheme: &str, sub_mode: &str) -> Result<&SubMode> {
        self.scheme(scheme)?
            .sub_modes
            .iter()
            .find(|m| m.id == sub_mode)
            .ok_or_else(|| TranscodeError::UnknownSubMode {
                scheme: scheme.to_string(),
                sub_mode: sub_mode.to_string(),
            })
    }

    pub fn get_encoder(&self, scheme: &str, sub_mode: &str) -> Result<&dyn Encoder> {
        // Every sub-mode carries an encoder; the error exists for symmetry
        // with `get_decoder` and for registries built by hand.
        Ok(self.get_converter(scheme, sub_mode)?.encoder())
    }

    pub fn get_decoder(&self, scheme: &str, sub_mode: &str) -> Result<&dyn Decoder> {
        self.get_converter(scheme, sub_mode)?
            .decoder()
            .ok_or_else(|| TranscodeError::NoDecoder {
                scheme: scheme.to_string(),
                sub_mode: sub_mode.to_string(),
            })
    }

    /// `false` for one-way sub-modes and for any lookup failure.
    pub fn supports_decoding(&self, scheme: &str, sub_mode: &str) -> bool {
        self.get_converter(scheme, sub_mode)
            .map(SubMode::decodable)
            .unwrap_or(false)
    }

    pub fn list_schemes(&self) -> Vec<SchemeDescriptor> {
        self.schemes
            .iter()
            .map(|scheme| SchemeDescriptor {
                id: scheme.id.to_string(),
                title: scheme.title.to_string(),
                description: scheme.description.to_string(),
                sub_modes: scheme
                    .sub_modes
                    .iter()
                    .map(|m| SubModeDescriptor {
                        id: m.id.to_string(),
                        decodable: m.decodable(),
                        encode_label: m.encode_label.to_string(),
                        decode_label: m.decode_label.to_string(),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::with_defaults(&TranscoderConfig::default())
    }
}
