//! Error Taxonomy - Terminal, Local, Structured
//!
//! Every failure carries enough detail to correct the input.
//! Nothing here retries or degrades to a partial barcode.

use thiserror::Error;

use crate::symbology::Symbology;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("Invalid length for {symbology}: expected {expected}, got {actual}")]
    InvalidLength {
        symbology: Symbology,
        expected: &'static str,
        actual: usize,
    },

    #[error("Unsupported character {character:?} at position {position}")]
    UnsupportedCharacter { character: char, position: usize },

    #[error("Checksum mismatch: expected check digit {expected}, got {actual}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("Unsupported symbology: {0}")]
    UnsupportedSymbology(String),

    #[error("Invalid render options: {0}")]
    InvalidRenderOptions(String),
}

impl CodeError {
    /// Stable machine-readable kind, used by callers that branch on the failure
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "invalid_length",
            Self::UnsupportedCharacter { .. } => "unsupported_character",
            Self::ChecksumMismatch { .. } => "checksum_mismatch",
            Self::UnsupportedSymbology(_) => "unsupported_symbology",
            Self::InvalidRenderOptions(_) => "invalid_render_options",
        }
    }
}
