//! Decimal digit strings: parsing, zero detection, and formatting.

use crate::constants::MAX_OPERAND_DIGITS;
use crate::error::MulError;

/// An operand's decimal digits, most significant first.
///
/// Produced once from input text and never mutated. Leading zeros from the
/// input are kept; the pipeline's trim step canonicalizes the output side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitString {
    digits: Vec<u8>,
}

impl DigitString {
    /// Parse an ASCII token into digit values.
    ///
    /// Rejects empty tokens, non-digit bytes, and tokens longer than
    /// [`MAX_OPERAND_DIGITS`].
    pub fn parse(token: &str) -> Result<Self, MulError> {
        if token.is_empty() {
            return Err(MulError::MalformedInput("empty operand".into()));
        }
        if token.len() > MAX_OPERAND_DIGITS {
            return Err(MulError::InputTooLarge {
                len: token.len(),
                max: MAX_OPERAND_DIGITS,
            });
        }

        let mut digits = Vec::with_capacity(token.len());
        for byte in token.bytes() {
            if !byte.is_ascii_digit() {
                return Err(MulError::MalformedInput(format!(
                    "invalid character {:?} in operand",
                    char::from(byte)
                )));
            }
            digits.push(byte - b'0');
        }
        Ok(Self { digits })
    }

    /// Number of digits, including any leading zeros from the input.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True when every digit is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// The digit values, most significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

/// Render little-endian result digits as a decimal string.
///
/// Expects trimmed input: no most-significant zeros unless the value is the
/// lone digit zero.
#[must_use]
pub fn to_decimal_string(little_endian: &[u8]) -> String {
    little_endian
        .iter()
        .rev()
        .map(|&d| char::from(b'0' + d))
        .collect()
}
