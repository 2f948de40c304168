//! Conversions between UTF-8 text and its Base64, hexadecimal and binary
//! representations, plus `i32` to hex/binary digit strings.
//!
//! Every function here is pure: no state, no I/O, safe to call from any
//! thread. Text is always handled as its UTF-8 bytes.
//!
//! Integers are fixed to `i32`. Negative values are rendered as their
//! two's-complement bit pattern (`-1` is `FFFFFFFF`), and the parsers
//! accept that pattern back, so both directions round-trip over the whole
//! `i32` range.

mod b64;
mod binary;
mod error;
mod hexadecimal;

pub use b64::{from_base64, to_base64};
pub use binary::{
    binary_to_int, from_binary_to_string, from_binary_to_string_strict, int_to_binary, to_binary,
};
pub use error::{CodecError, ErrorKind};
pub use hexadecimal::{from_hex_to_string, hex_to_int, int_to_hex, to_hex};

/// Textual encodings a UTF-8 string can be converted to and from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base64,
    Hex,
    Binary,
}

impl Encoding {
    /// Encode `text` in this encoding.
    pub fn encode(self, text: &str) -> String {
        match self {
            Encoding::Base64 => to_base64(text),
            Encoding::Hex => to_hex(text),
            Encoding::Binary => to_binary(text),
        }
    }

    /// Decode `input` from this encoding back into text.
    ///
    /// Binary input with trailing bits beyond the last full byte is
    /// truncated; see [`Encoding::decode_strict`] for the rejecting variant.
    pub fn decode(self, input: &str) -> Result<String, CodecError> {
        match self {
            Encoding::Base64 => from_base64(input),
            Encoding::Hex => from_hex_to_string(input),
            Encoding::Binary => from_binary_to_string(input),
        }
    }

    /// Like [`Encoding::decode`], but binary input must be byte-aligned.
    pub fn decode_strict(self, input: &str) -> Result<String, CodecError> {
        match self {
            Encoding::Binary => from_binary_to_string_strict(input),
            other => other.decode(input),
        }
    }
}

/// Parse up to 32 bits worth of digits and reinterpret them as an `i32`.
///
/// Surrounding ASCII whitespace is ignored. Signs are rejected because the
/// digit string is a bit pattern, not a signed magnitude.
fn parse_bit_pattern(input: &str, radix: u32) -> Result<i32, CodecError> {
    let digits = input.trim_matches(|c: char| c.is_ascii_whitespace());

    let malformed = |reason| CodecError::MalformedNumber {
        input: input.to_string(),
        radix,
        reason,
    };

    if digits.is_empty() {
        return Err(malformed("empty input"));
    }
    if digits.starts_with(['+', '-']) {
        return Err(malformed("signs are not allowed"));
    }

    let bits = u32::from_str_radix(digits, radix).map_err(|source| {
        log::debug!("Rejected base-{} digits {:?}: {}", radix, input, source);
        CodecError::InvalidNumber {
            input: input.to_string(),
            radix,
            source,
        }
    })?;

    // Two's-complement reinterpretation, not a numeric conversion.
    Ok(bits as i32)
}

/// Interpret decoded bytes as UTF-8 text.
fn utf8(bytes: Vec<u8>) -> Result<String, CodecError> {
    String::from_utf8(bytes).map_err(|e| {
        log::debug!("Decoded bytes are not UTF-8: {}", e);
        CodecError::from(e)
    })
}
