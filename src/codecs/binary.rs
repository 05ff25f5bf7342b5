// File: src/codecs/binary.rs
use crate::codecs::numeric::{code_point, parse_radix, parse_whole_number, strip_spaces};
use crate::codecs::{Decoder, Encoder};
use crate::error::{ConversionResult, ValidationError};

const BYTE_BITS: usize = 8;

fn is_binary_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'0' || b == b'1')
}

/// Non-negative integer to binary, zero-padded to whole bytes and grouped
/// eight digits at a time: `10` becomes `00001010`.
pub fn decimal_to_binary(number: u128) -> String {
    let bits = format!("{:b}", number);
    let width = bits.len().div_ceil(BYTE_BITS) * BYTE_BITS;
    let padded = format!("{:0>width$}", bits, width = width);
    padded
        .as_bytes()
        .chunks(BYTE_BITS)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Binary digits (spaces ignored) to a decimal string.
pub fn binary_to_decimal(binary: &str) -> ConversionResult {
    let digits = strip_spaces(binary);
    if !is_binary_string(&digits) {
        return Err(ValidationError::InvalidBinary);
    }
    parse_radix(&digits, 2, ValidationError::InvalidBinary).map(|n| n.to_string())
}

/// Each code point as at least eight binary digits, space separated.
pub fn text_to_binary(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:08b}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space-separated binary groups back to characters. Groups that do not
/// name a character are skipped.
pub fn binary_to_text(binary: &str) -> ConversionResult {
    if !is_binary_string(&strip_spaces(binary)) {
        return Err(ValidationError::InvalidBinary);
    }
    Ok(binary
        .split(' ')
        .filter(|group| !group.is_empty())
        .filter_map(|group| code_point(group, 2))
        .collect())
}

/// The `binary:text` sub-mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryTextCodec;

impl Encoder for BinaryTextCodec {
    fn encode(&self, input: &str) -> ConversionResult {
        Ok(text_to_binary(input))
    }
}

impl Decoder for BinaryTextCodec {
    fn decode(&self, input: &str) -> ConversionResult {
        binary_to_text(input)
    }
}

/// The `binary:number` sub-mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryNumberCodec;

impl Encoder for BinaryNumberCodec {
    fn encode(&self, input: &str) -> ConversionResult {
        parse_whole_number(input).map(decimal_to_binary)
    }
}

impl Decoder for BinaryNumberCodec {
    fn decode(&self, input: &str) -> ConversionResult {
        binary_to_decimal(input)
    }
}
