//! Symbology Encoding - Normalized Code to Bar Pattern
//!
//! One encoder per symbology, selected by exhaustive match.
//! Encoders never fail: `NormalizedCode` already carries every invariant they need.

pub mod code128;
pub mod ean;
pub mod tables;

use serde::{Serialize, Serializer};
use std::fmt;

use crate::normalize::NormalizedCode;
use crate::symbology::Symbology;

/// Ordered modules, `true` = ink, `false` = space
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BarPattern {
    modules: Vec<bool>,
}

impl BarPattern {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { modules: Vec::with_capacity(capacity) }
    }

    /// Parse a `1`/`0` string
    pub fn from_binary(s: &str) -> Option<Self> {
        s.chars()
            .map(|c| match c {
                '1' => Some(true),
                '0' => Some(false),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(|modules| Self { modules })
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn ink_modules(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    /// Append the low `width` bits of `bits`, most significant first
    pub(crate) fn push_bits(&mut self, bits: u16, width: usize) {
        for shift in (0..width).rev() {
            self.modules.push((bits >> shift) & 1 == 1);
        }
    }

    /// Append alternating runs, starting with a bar
    pub(crate) fn push_widths(&mut self, widths: &[u8]) {
        for (i, &w) in widths.iter().enumerate() {
            let ink = i % 2 == 0;
            self.modules.extend(std::iter::repeat(ink).take(usize::from(w)));
        }
    }

    pub fn to_binary(&self) -> String {
        self.modules.iter().map(|&m| if m { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for BarPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary())
    }
}

impl Serialize for BarPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_binary())
    }
}

/// Encode a normalized code with its own symbology's encoder
pub fn encode(code: &NormalizedCode) -> BarPattern {
    match code.symbology() {
        Symbology::UpcA => ean::encode_upc_a(&code.digits()),
        Symbology::Ean13 => ean::encode_ean_13(&code.digits()),
        Symbology::Code128 => code128::encode(code.as_str()),
    }
}
