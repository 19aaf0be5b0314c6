//! Code Normalization - Raw Input to Encodable Code
//!
//! Produces a new value; the raw input is never mutated.
//! A `NormalizedCode` always satisfies its symbology's length and checksum rules.

use serde::Serialize;

use crate::checksum::{check_digit, Digit};
use crate::encoding::code128;
use crate::error::CodeError;
use crate::symbology::{ChecksummedSymbology, Symbology};

/// Longest Code-128 input accepted
pub const MAX_CODE128_LEN: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedCode {
    symbology: Symbology,
    value: String,
}

impl NormalizedCode {
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// Decimal digits of a UPC-A or EAN-13 code
    pub(crate) fn digits(&self) -> Vec<Digit> {
        self.value.bytes().map(|b| b - b'0').collect()
    }
}

/// Validate `raw` for `symbology`, completing the check digit where allowed
pub fn normalize(raw: &str, symbology: Symbology) -> Result<NormalizedCode, CodeError> {
    let value = match symbology.checksummed() {
        Some(checksummed) => normalize_digits(raw, checksummed)?,
        None => normalize_code128(raw)?,
    };
    Ok(NormalizedCode { symbology, value })
}

fn normalize_digits(raw: &str, symbology: ChecksummedSymbology) -> Result<String, CodeError> {
    let mut digits: Vec<Digit> = Vec::with_capacity(symbology.full_len());

    for (position, character) in raw.chars().enumerate() {
        if let Some(d) = character.to_digit(10) {
            digits.push(d as Digit);
        } else if character.is_ascii_whitespace() || character.is_ascii_punctuation() {
            // formatting, e.g. "0 36000 29145 2" or "036000-291452"
            continue;
        } else {
            return Err(CodeError::UnsupportedCharacter { character, position });
        }
    }

    match digits.len() {
        n if n == symbology.payload_len() => {
            let check = check_digit(&digits, symbology);
            digits.push(check);
        }
        n if n == symbology.full_len() => {
            let actual = digits[n - 1];
            let expected = check_digit(&digits[..n - 1], symbology);
            if expected != actual {
                return Err(CodeError::ChecksumMismatch { expected, actual });
            }
        }
        actual => {
            return Err(CodeError::InvalidLength {
                symbology: symbology.into(),
                expected: symbology.length_hint(),
                actual,
            });
        }
    }

    Ok(digits.iter().map(|d| char::from(b'0' + d)).collect())
}

fn normalize_code128(raw: &str) -> Result<String, CodeError> {
    for (position, character) in raw.chars().enumerate() {
        if !code128::is_supported(character) {
            return Err(CodeError::UnsupportedCharacter { character, position });
        }
    }

    // all characters are ASCII past this point
    let len = raw.len();
    if len == 0 || len > MAX_CODE128_LEN {
        return Err(CodeError::InvalidLength {
            symbology: Symbology::Code128,
            expected: "1 to 80 characters",
            actual: len,
        });
    }

    Ok(raw.to_string())
}
