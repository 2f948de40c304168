//! Binary digit string conversion for `i32` values and UTF-8 text.

use super::{CodecError, parse_bit_pattern, utf8};

const BITS_PER_BYTE: usize = 8;

/// Render `value` in base 2 without leading zeros (`"0"` for zero).
///
/// Negative values show all 32 bits of their two's-complement pattern.
pub fn int_to_binary(value: i32) -> String {
    format!("{:b}", value)
}

/// Parse up to 32 binary digits into an `i32`.
///
/// # Errors
/// Returns a parse-kind [`CodecError`] on empty input, a sign, a digit
/// other than `0`/`1`, or more than 32 significant bits.
pub fn binary_to_int(input: &str) -> Result<i32, CodecError> {
    parse_bit_pattern(input, 2)
}

/// Encode the UTF-8 bytes of `text` as eight binary digits per byte.
pub fn to_binary(text: &str) -> String {
    text.bytes().map(|b| format!("{:08b}", b)).collect()
}

/// Decode groups of eight binary digits into bytes and interpret them as
/// UTF-8.
///
/// Groups are counted in characters. Characters after the last complete
/// group are ignored, so `"010000011"` decodes the same as `"01000001"`.
///
/// # Errors
/// Returns [`CodecError::InvalidBinaryGroup`] when a complete group holds
/// anything but `0`/`1`, and [`CodecError::InvalidUtf8`] when the bytes are
/// not text.
pub fn from_binary_to_string(input: &str) -> Result<String, CodecError> {
    let digits: Vec<char> = input.chars().collect();
    let whole = digits.len() - digits.len() % BITS_PER_BYTE;
    if whole != digits.len() {
        log::debug!(
            "Discarding {} trailing binary digit(s)",
            digits.len() - whole
        );
    }
    decode_groups(&digits[..whole])
}

/// Like [`from_binary_to_string`], but rejects input whose character count
/// is not a multiple of eight.
///
/// # Errors
/// Returns [`CodecError::UnalignedBinary`] for trailing digits, otherwise
/// the same errors as [`from_binary_to_string`].
pub fn from_binary_to_string_strict(input: &str) -> Result<String, CodecError> {
    let digits: Vec<char> = input.chars().collect();
    if digits.len() % BITS_PER_BYTE != 0 {
        return Err(CodecError::UnalignedBinary { len: digits.len() });
    }
    decode_groups(&digits)
}

fn decode_groups(digits: &[char]) -> Result<String, CodecError> {
    let bytes = digits
        .chunks_exact(BITS_PER_BYTE)
        .enumerate()
        .map(|(i, group)| group_to_byte(group, i * BITS_PER_BYTE))
        .collect::<Result<Vec<u8>, _>>()?;
    utf8(bytes)
}

fn group_to_byte(group: &[char], offset: usize) -> Result<u8, CodecError> {
    group.iter().try_fold(0u8, |acc, &digit| match digit {
        '0' => Ok(acc << 1),
        '1' => Ok((acc << 1) | 1),
        _ => Err(CodecError::InvalidBinaryGroup {
            group: group.iter().collect(),
            offset,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_to_binary() {
        assert_eq!(int_to_binary(0), "0");
        assert_eq!(int_to_binary(5), "101");
        assert_eq!(int_to_binary(-1), "1".repeat(32));
    }

    #[test]
    fn test_binary_to_int() {
        assert_eq!(binary_to_int("101").unwrap(), 5);
        assert_eq!(binary_to_int(&"1".repeat(32)).unwrap(), -1);
    }

    #[test]
    fn test_binary_to_int_overflow() {
        let err = binary_to_int(&format!("1{}", "0".repeat(32))).unwrap_err();
        assert!(matches!(err, CodecError::InvalidNumber { radix: 2, .. }));
    }

    #[test]
    fn test_binary_to_int_rejects_digit_two() {
        assert!(binary_to_int("102").is_err());
    }

    #[test]
    fn test_to_binary_pads_each_byte() {
        assert_eq!(to_binary("\n"), "00001010");
        assert_eq!(to_binary("é"), "1100001110101001");
    }

    #[test]
    fn test_from_binary_to_string_truncates() {
        assert_eq!(from_binary_to_string("0100000101000010").unwrap(), "AB");
        assert_eq!(from_binary_to_string("0100000110").unwrap(), "A");
        assert_eq!(from_binary_to_string("0101").unwrap(), "");
    }

    #[test]
    fn test_from_binary_to_string_ignores_garbage_in_remainder() {
        assert_eq!(from_binary_to_string("01000001xyz").unwrap(), "A");
    }

    #[test]
    fn test_from_binary_to_string_counts_characters() {
        assert_eq!(from_binary_to_string("01000001ééé").unwrap(), "A");
        assert_eq!(from_binary_to_string("01000001éééé").unwrap(), "A");
        assert_eq!(from_binary_to_string("01000001éééééee").unwrap(), "A");
    }

    #[test]
    fn test_non_ascii_complete_group_reports_character_offset() {
        let err = from_binary_to_string("01000001éééééééé").unwrap_err();
        match err {
            CodecError::InvalidBinaryGroup { group, offset } => {
                assert_eq!(group, "éééééééé");
                assert_eq!(offset, 8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_measures_length_in_characters() {
        let err = from_binary_to_string_strict("01000001éé").unwrap_err();
        assert!(matches!(err, CodecError::UnalignedBinary { len: 10 }));
    }

    #[test]
    fn test_from_binary_to_string_invalid_group() {
        let err = from_binary_to_string("0100000101x00010").unwrap_err();
        match err {
            CodecError::InvalidBinaryGroup { group, offset } => {
                assert_eq!(group, "01x00010");
                assert_eq!(offset, 8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_rejects_unaligned() {
        let err = from_binary_to_string_strict("010000011").unwrap_err();
        assert!(matches!(err, CodecError::UnalignedBinary { len: 9 }));
        assert_eq!(from_binary_to_string_strict("01000001").unwrap(), "A");
    }
}
