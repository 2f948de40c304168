//! CLI enum types for encodings and integer bases.

use clap::ValueEnum;

use crate::codec::Encoding;

/// Text encoding selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextEncoding {
    Base64,
    Hex,
    Binary,
}

impl From<TextEncoding> for Encoding {
    fn from(e: TextEncoding) -> Self {
        match e {
            TextEncoding::Base64 => Encoding::Base64,
            TextEncoding::Hex => Encoding::Hex,
            TextEncoding::Binary => Encoding::Binary,
        }
    }
}

/// Digit base for integer conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IntBase {
    Hex,
    Binary,
}

impl IntBase {
    /// Render `value` in this base.
    pub fn format(self, value: i32) -> String {
        match self {
            IntBase::Hex => crate::codec::int_to_hex(value),
            IntBase::Binary => crate::codec::int_to_binary(value),
        }
    }

    /// Parse digits in this base.
    pub fn parse(self, digits: &str) -> Result<i32, crate::codec::CodecError> {
        match self {
            IntBase::Hex => crate::codec::hex_to_int(digits),
            IntBase::Binary => crate::codec::binary_to_int(digits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_encoding_to_encoding() {
        assert_eq!(Encoding::from(TextEncoding::Base64), Encoding::Base64);
        assert_eq!(Encoding::from(TextEncoding::Hex), Encoding::Hex);
        assert_eq!(Encoding::from(TextEncoding::Binary), Encoding::Binary);
    }

    #[test]
    fn test_int_base_format_and_parse() {
        assert_eq!(IntBase::Hex.format(255), "FF");
        assert_eq!(IntBase::Binary.format(5), "101");
        assert_eq!(IntBase::Hex.parse("ff").unwrap(), 255);
        assert_eq!(IntBase::Binary.parse("101").unwrap(), 5);
    }
}
