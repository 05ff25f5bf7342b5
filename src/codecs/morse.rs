// File: src/codecs/morse.rs
use crate::codecs::{Decoder, Encoder};
use crate::core::symbols::{ReverseTable, SymbolTable};
use crate::core::tables::MORSE;
use crate::error::ConversionResult;

const LETTER_SEPARATOR: &str = " ";
const WORD_SEPARATOR: &str = "  ";

/// Morse code over letters, digits and spaces. Case is not representable.
pub struct MorseCodec {
    forward: SymbolTable,
    reverse: ReverseTable,
}

impl MorseCodec {
    pub fn new() -> Self {
        let forward = SymbolTable::from_entries("morse", MORSE);
        let reverse = forward.reverse();
        Self { forward, reverse }
    }

    /// Each character becomes one token; tokens are joined by a single space.
    /// A space encodes to itself, so word gaps come out as three spaces.
    pub fn text_to_morse(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| self.forward.lookup_or_empty(c))
            .collect::<Vec<_>>()
            .join(LETTER_SEPARATOR)
    }

    /// Two or more spaces end a word, one space ends a letter.
    /// Unknown tokens vanish.
    pub fn morse_to_text(&self, morse: &str) -> String {
        morse
            .trim()
            .split(WORD_SEPARATOR)
            .map(|word| {
                word.split(LETTER_SEPARATOR)
                    .filter_map(|code| self.reverse.lookup(code))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for MorseCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for MorseCodec {
    fn encode(&self, input: &str) -> ConversionResult {
        Ok(self.text_to_morse(input))
    }
}

impl Decoder for MorseCodec {
    fn decode(&self, input: &str) -> ConversionResult {
        Ok(self.morse_to_text(input))
    }
}
