// File: src/codecs/braille1.rs
use crate::codecs::{Decoder, Encoder};
use crate::core::symbols::{ReverseTable, SymbolTable};
use crate::core::tables::BRAILLE1;
use crate::error::ConversionResult;

/// Grade-1 Braille: one cell per letter or digit, no capital or numeric
/// indicators. Anything outside a-z, 0-9 and space is dropped.
pub struct Braille1Codec {
    forward: SymbolTable,
    reverse: ReverseTable,
}

impl Braille1Codec {
    pub fn new() -> Self {
        let forward = SymbolTable::from_entries("braille1", BRAILLE1);
        let reverse = forward.reverse();
        Self { forward, reverse }
    }

    pub fn text_to_braille(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| self.forward.lookup_or_empty(c))
            .collect()
    }

    /// Digits and letters share no cells here, so each cell decodes alone.
    pub fn braille_to_text(&self, braille: &str) -> String {
        let mut buf = [0u8; 4];
        braille
            .chars()
            .filter_map(|c| self.reverse.lookup(c.encode_utf8(&mut buf)))
            .collect()
    }
}

impl Default for Braille1Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for Braille1Codec {
    fn encode(&self, input: &str) -> ConversionResult {
        Ok(self.text_to_braille(input))
    }
}

impl Decoder for Braille1Codec {
    fn decode(&self, input: &str) -> ConversionResult {
        Ok(self.braille_to_text(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_one_cell_per_character() {
        let codec = Braille1Codec::new();
        let hello = codec.text_to_braille("hello");
        assert_eq!(hello, "⠓⠑⠇⠇⠕");
        assert_eq!(hello.chars().count(), 5);
        assert_eq!(codec.text_to_braille("world"), "⠺⠕⠗⠇⠙");
        assert_eq!(codec.text_to_braille("123"), "⠂⠆⠒");
        assert_eq!(codec.text_to_braille(" "), " ");
        assert_eq!(codec.text_to_braille(""), "");
        assert_eq!(codec.text_to_braille("This is a test"), "⠞⠓⠊⠎ ⠊⠎ ⠁ ⠞⠑⠎⠞");
    }

    #[test]
    fn punctuation_is_dropped() {
        let codec = Braille1Codec::new();
        assert_eq!(codec.text_to_braille("hi, you!"), "⠓⠊ ⠽⠕⠥");
    }

    #[test]
    fn decodes_lowercase() {
        let codec = Braille1Codec::new();
        assert_eq!(codec.braille_to_text("⠓⠑⠇⠇⠕"), "hello");
        assert_eq!(codec.braille_to_text("⠂⠆⠒"), "123");
        assert_eq!(codec.braille_to_text(" "), " ");
        assert_eq!(codec.braille_to_text(""), "");
        assert_eq!(codec.braille_to_text("⠞⠓⠊⠎ ⠊⠎ ⠁ ⠞⠑⠎⠞"), "this is a test");
        assert_eq!(codec.braille_to_text("⠓x⠊"), "hi");
    }
}
