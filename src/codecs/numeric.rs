// File: src/codecs/numeric.rs
//! Shared parsing for the number sub-modes of the binary and hex codecs.

use crate::error::ValidationError;

/// Parses a whole, non-negative decimal number. Surrounding whitespace is
/// ignored; signs, fractions, exponents and overflow are rejected.
pub(crate) fn parse_whole_number(input: &str) -> Result<u128, ValidationError> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidNumber);
    }
    digits.parse::<u128>().map_err(|_| ValidationError::InvalidNumber)
}

/// Removes ASCII spaces, the only separator the encoders emit.
pub(crate) fn strip_spaces(input: &str) -> String {
    input.trim().chars().filter(|&c| c != ' ').collect()
}

/// Parses `digits` in `radix`, mapping every failure, including values too
/// wide for `u128`, to `error`.
pub(crate) fn parse_radix(digits: &str, radix: u32, error: ValidationError) -> Result<u128, ValidationError> {
    if digits.is_empty() {
        return Err(error);
    }
    u128::from_str_radix(digits, radix).map_err(|_| error)
}

/// Decodes one code point group; values that are not a `char` yield `None`.
pub(crate) fn code_point(group: &str, radix: u32) -> Option<char> {
    u32::from_str_radix(group, radix).ok().and_then(char::from_u32)
}
