//! Hexadecimal conversion for `i32` values and UTF-8 text.

use super::{CodecError, parse_bit_pattern, utf8};

/// Render `value` in uppercase hex without leading zeros.
///
/// Negative values show their two's-complement pattern, so `-1` renders as
/// `FFFFFFFF`.
pub fn int_to_hex(value: i32) -> String {
    format!("{:X}", value)
}

/// Parse up to eight hex digits (either case) into an `i32`.
///
/// # Errors
/// Returns a parse-kind [`CodecError`] on empty input, a sign, a non-hex
/// character, or more than 32 significant bits.
pub fn hex_to_int(input: &str) -> Result<i32, CodecError> {
    parse_bit_pattern(input, 16)
}

/// Encode the UTF-8 bytes of `text` as two uppercase hex digits per byte.
pub fn to_hex(text: &str) -> String {
    hex::encode_upper(text.as_bytes())
}

/// Decode pairs of hex digits into bytes and interpret them as UTF-8.
///
/// # Errors
/// Returns [`CodecError::InvalidHex`] for odd length or non-hex characters,
/// and [`CodecError::InvalidUtf8`] when the bytes are not text.
pub fn from_hex_to_string(input: &str) -> Result<String, CodecError> {
    let bytes = hex::decode(input).map_err(|e| {
        log::debug!("Rejected hex input {:?}: {}", input, e);
        CodecError::from(e)
    })?;
    utf8(bytes)
}
