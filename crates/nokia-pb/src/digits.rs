//! # Packed phone digits
//!
//! Phone numbers are stored as BCD-style nibbles, two digits per byte.
//! Values 0 through 9 are the plain decimal digits, 10 is `*` and 15
//! pads out an odd-length number.

use displaydoc::Display;
use thiserror::Error;

/// Unknown digit value {0}
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub struct DigitError(pub u8);

/// Decode a single packed digit value.
///
/// Returns `None` for the padding value 15, which marks the unused
/// half of the final byte of an odd-length number.
///
/// The mapping of 11 to `#` is a guess that has not been verified
/// against a real handset; it is kept as-is rather than rejected.
pub fn decode_digit(value: u8) -> Result<Option<char>, DigitError> {
    match value {
        0..=9 => Ok(Some((b'0' + value) as char)),
        10 => Ok(Some('*')),
        11 => Ok(Some('#')), // just a guess
        15 => Ok(None),
        _ => Err(DigitError(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_digit, DigitError};

    #[test]
    fn test_decimal_digits() {
        for value in 0..=9 {
            let expected = char::from_digit(value as u32, 10);
            assert_eq!(decode_digit(value).unwrap(), expected);
        }
    }

    #[test]
    fn test_special_digits() {
        assert_eq!(decode_digit(10).unwrap(), Some('*'));
        assert_eq!(decode_digit(11).unwrap(), Some('#'));
    }

    #[test]
    fn test_padding() {
        assert_eq!(decode_digit(15).unwrap(), None);
    }

    #[test]
    fn test_unknown_values() {
        for value in [12, 13, 14] {
            assert_eq!(decode_digit(value), Err(DigitError(value)));
        }
    }
}
