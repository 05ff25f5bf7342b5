// File: src/codecs/hex.rs
use crate::codecs::numeric::{code_point, parse_radix, parse_whole_number};
use crate::codecs::{Decoder, Encoder};
use crate::error::{ConversionResult, ValidationError};

/// One or more groups of hex digits separated by whitespace.
///
/// Interior separators are accepted so that `text_to_hex` output, which is
/// space-joined, decodes again.
fn is_hex_string(s: &str) -> bool {
    let mut groups = s.split_whitespace().peekable();
    groups.peek().is_some() && groups.all(|g| g.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Uppercase hex without padding: `255` becomes `FF`.
pub fn decimal_to_hex(number: u128) -> String {
    format!("{:X}", number)
}

/// Hex digits (groups joined) to a decimal string.
pub fn hex_to_decimal(hex: &str) -> ConversionResult {
    if !is_hex_string(hex) {
        return Err(ValidationError::InvalidHex);
    }
    let digits: String = hex.split_whitespace().collect();
    parse_radix(&digits, 16, ValidationError::InvalidHex).map(|n| n.to_string())
}

/// Each code point in uppercase hex, space separated.
pub fn text_to_hex(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-separated hex groups back to characters. Groups that do not
/// name a character are skipped.
pub fn hex_to_text(hex: &str) -> ConversionResult {
    if !is_hex_string(hex) {
        return Err(ValidationError::InvalidHex);
    }
    Ok(hex
        .split_whitespace()
        .filter_map(|group| code_point(group, 16))
        .collect())
}

/// The `hex:text` sub-mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexTextCodec;

impl Encoder for HexTextCodec {
    fn encode(&self, input: &str) -> ConversionResult {
        Ok(text_to_hex(input))
    }
}

impl Decoder for HexTextCodec {
    fn decode(&self, input: &str) -> ConversionResult {
        hex_to_text(input)
    }
}

/// The `hex:number` sub-mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexNumberCodec;

impl Encoder for HexNumberCodec {
    fn encode(&self, input: &str) -> ConversionResult {
        parse_whole_number(input).map(decimal_to_hex)
    }
}

impl Decoder for HexNumberCodec {
    fn decode(&self, input: &str) -> ConversionResult {
        hex_to_decimal(input)
    }
}
