// File: src/codecs/mod.rs
//! One module per scheme variant. Codecs never fail on content with a
//! panic; bad content comes back as a [`ValidationError`](crate::error::ValidationError).

pub mod binary;
pub mod braille1;
pub mod braille2;
pub mod contractions;
pub mod hex;
pub mod morse;
pub(crate) mod numeric;

use crate::error::ConversionResult;

/// Turns plain text into a scheme's representation.
pub trait Encoder: Send + Sync {
    fn encode(&self, input: &str) -> ConversionResult;
}

/// Turns a scheme's representation back into plain text.
pub trait Decoder: Send + Sync {
    fn decode(&self, input: &str) -> ConversionResult;
}

pub use binary::{BinaryNumberCodec, BinaryTextCodec};
pub use braille1::Braille1Codec;
pub use braille2::Braille2Codec;
pub use contractions::ContractionsEncoder;
pub use hex::{HexNumberCodec, HexTextCodec};
pub use morse::MorseCodec;
