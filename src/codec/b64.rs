//! Base64 text conversion (standard alphabet, padded).

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{CodecError, utf8};

/// Encode the UTF-8 bytes of `text` as padded standard Base64.
pub fn to_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode padded standard Base64 and interpret the bytes as UTF-8.
///
/// # Errors
/// Returns [`CodecError::InvalidBase64`] for bad length, padding or
/// characters, and [`CodecError::InvalidUtf8`] when the payload is not text.
pub fn from_base64(input: &str) -> Result<String, CodecError> {
    let bytes = STANDARD.decode(input).map_err(|e| {
        log::debug!("Rejected base64 input {:?}: {}", input, e);
        CodecError::from(e)
    })?;
    utf8(bytes)
}
