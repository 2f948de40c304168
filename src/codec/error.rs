//! Error types for codec operations.

use std::num::ParseIntError;
use std::string::FromUtf8Error;

/// Broad category of a codec failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input does not fit the digit alphabet of the target base, or overflows `i32`.
    Parse,
    /// Decoded bytes are not valid Base64 or not valid UTF-8.
    Decode,
}

/// Errors that can occur while converting between encodings.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("'{input}' is not a valid base-{radix} number: {source}")]
    InvalidNumber {
        /// The rejected digits, as given by the caller
        input: String,
        /// Radix the digits were parsed in
        radix: u32,
        source: ParseIntError,
    },

    #[error("'{input}' is not a valid base-{radix} number: {reason}")]
    MalformedNumber {
        /// The rejected digits, as given by the caller
        input: String,
        /// Radix the digits were parsed in
        radix: u32,
        /// What was wrong with it
        reason: &'static str,
    },

    #[error("invalid binary digit group '{group}' at offset {offset}")]
    InvalidBinaryGroup {
        /// The offending 8-character group
        group: String,
        /// Index of the group's first character in the input
        offset: usize,
    },

    #[error("binary input length {len} is not a multiple of 8")]
    UnalignedBinary {
        /// Length of the rejected input in characters
        len: usize,
    },
}

impl CodecError {
    /// Classify the error as a parse or decode failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidBase64(_) | CodecError::InvalidUtf8(_) => ErrorKind::Decode,
            CodecError::InvalidHex(_)
            | CodecError::InvalidNumber { .. }
            | CodecError::MalformedNumber { .. }
            | CodecError::InvalidBinaryGroup { .. }
            | CodecError::UnalignedBinary { .. } => ErrorKind::Parse,
        }
    }
}
