//! UPC-A and EAN-13 Encoders
//!
//! Both are 95 modules: 3 start + 42 left + 5 center + 42 right + 3 end.
//! UPC-A is all-L on the left; EAN-13 picks L/G per digit from its first digit.

use super::tables::{
    left_pattern, right_pattern, Parity, CENTER_GUARD, CENTER_GUARD_MODULES, DIGIT_MODULES,
    EAN13_PARITY, EDGE_GUARD, EDGE_GUARD_MODULES,
};
use super::BarPattern;
use crate::checksum::Digit;

/// Module count of every UPC-A and EAN-13 pattern
pub const EAN_MODULES: usize =
    2 * EDGE_GUARD_MODULES + CENTER_GUARD_MODULES + 12 * DIGIT_MODULES;

/// `digits` is a complete 12-digit UPC-A code
pub(crate) fn encode_upc_a(digits: &[Digit]) -> BarPattern {
    debug_assert_eq!(digits.len(), 12);
    let (left, right) = digits.split_at(6);
    let left = left.iter().map(|&d| left_pattern(d, Parity::L));
    assemble(left, right)
}

/// `digits` is a complete 13-digit EAN-13 code
pub(crate) fn encode_ean_13(digits: &[Digit]) -> BarPattern {
    debug_assert_eq!(digits.len(), 13);
    let parity = EAN13_PARITY[usize::from(digits[0])];
    let (left, right) = digits[1..].split_at(6);
    let left = left.iter().zip(parity).map(|(&d, p)| left_pattern(d, p));
    assemble(left, right)
}

fn assemble(left: impl Iterator<Item = u16>, right: &[Digit]) -> BarPattern {
    let mut pattern = BarPattern::with_capacity(EAN_MODULES);
    pattern.push_bits(EDGE_GUARD, EDGE_GUARD_MODULES);
    for bits in left {
        pattern.push_bits(bits, DIGIT_MODULES);
    }
    pattern.push_bits(CENTER_GUARD, CENTER_GUARD_MODULES);
    for &d in right {
        pattern.push_bits(right_pattern(d), DIGIT_MODULES);
    }
    pattern.push_bits(EDGE_GUARD, EDGE_GUARD_MODULES);
    pattern
}
