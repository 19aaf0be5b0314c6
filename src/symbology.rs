//! Symbology - Closed Set of Implemented Variants
//!
//! Each variant owns its length constraints and its encoder.
//! Adding a symbology means adding a variant here and a table under `encoding`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbology {
    #[serde(rename = "upc-a", alias = "upca", alias = "upc")]
    UpcA,
    #[serde(rename = "ean-13", alias = "ean13")]
    Ean13,
    #[serde(rename = "code-128", alias = "code128")]
    Code128,
}

/// Symbologies with a mandatory trailing mod-10 check digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksummedSymbology {
    UpcA,
    Ean13,
}

impl Symbology {
    pub const ALL: [Symbology; 3] = [Symbology::UpcA, Symbology::Ean13, Symbology::Code128];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpcA => "upc-a",
            Self::Ean13 => "ean-13",
            Self::Code128 => "code-128",
        }
    }

    pub fn checksummed(&self) -> Option<ChecksummedSymbology> {
        match self {
            Self::UpcA => Some(ChecksummedSymbology::UpcA),
            Self::Ean13 => Some(ChecksummedSymbology::Ean13),
            Self::Code128 => None,
        }
    }
}

impl ChecksummedSymbology {
    /// Digit count of a complete code, check digit included
    pub fn full_len(&self) -> usize {
        match self {
            Self::UpcA => 12,
            Self::Ean13 => 13,
        }
    }

    /// Digit count the check digit is computed over
    pub fn payload_len(&self) -> usize {
        self.full_len() - 1
    }

    pub fn length_hint(&self) -> &'static str {
        match self {
            Self::UpcA => "11 or 12 digits",
            Self::Ean13 => "12 or 13 digits",
        }
    }
}

impl From<ChecksummedSymbology> for Symbology {
    fn from(value: ChecksummedSymbology) -> Self {
        match value {
            ChecksummedSymbology::UpcA => Symbology::UpcA,
            ChecksummedSymbology::Ean13 => Symbology::Ean13,
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbology {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upc-a" | "upca" | "upc" => Ok(Self::UpcA),
            "ean-13" | "ean13" => Ok(Self::Ean13),
            "code-128" | "code128" => Ok(Self::Code128),
            _ => Err(CodeError::UnsupportedSymbology(s.to_string())),
        }
    }
}
