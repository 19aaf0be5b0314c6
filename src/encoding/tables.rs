//! Lookup Tables - Immutable, Shared, Never Mutated
//!
//! UPC/EAN digit patterns are 7-module bit strings, most significant bit first.
//! Code-128 patterns are bar/space widths, starting with a bar.

use crate::checksum::Digit;

/// Parity of a left-half digit in EAN-13
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Odd parity, "set A"
    L,
    /// Even parity, "set B"
    G,
}

use self::Parity::{G, L};

pub const DIGIT_MODULES: usize = 7;

/// Start and end guard, `101`
pub const EDGE_GUARD: u16 = 0b101;
pub const EDGE_GUARD_MODULES: usize = 3;

/// Center guard, `01010`
pub const CENTER_GUARD: u16 = 0b01010;
pub const CENTER_GUARD_MODULES: usize = 5;

/// Left-hand odd parity (L) patterns
pub const LEFT_ODD: [u16; 10] = [
    0b0001101, // 0
    0b0011001, // 1
    0b0010011, // 2
    0b0111101, // 3
    0b0100011, // 4
    0b0110001, // 5
    0b0101111, // 6
    0b0111011, // 7
    0b0110111, // 8
    0b0001011, // 9
];

/// Left-hand even parity (G) patterns
pub const LEFT_EVEN: [u16; 10] = [
    0b0100111, // 0
    0b0110011, // 1
    0b0011011, // 2
    0b0100001, // 3
    0b0011101, // 4
    0b0111001, // 5
    0b0000101, // 6
    0b0010001, // 7
    0b0001001, // 8
    0b0010111, // 9
];

/// Right-hand (R) patterns: the bitwise complement of L
pub const RIGHT: [u16; 10] = complement(LEFT_ODD);

const fn complement(table: [u16; 10]) -> [u16; 10] {
    let mut out = [0; 10];
    let mut i = 0;
    while i < 10 {
        out[i] = !table[i] & 0b111_1111;
        i += 1;
    }
    out
}

/// EAN-13 parity of digits 2..=7, keyed by the first (implicit) digit
pub const EAN13_PARITY: [[Parity; 6]; 10] = [
    [L, L, L, L, L, L], // 0
    [L, L, G, L, G, G], // 1
    [L, L, G, G, L, G], // 2
    [L, L, G, G, G, L], // 3
    [L, G, L, L, G, G], // 4
    [L, G, G, L, L, G], // 5
    [L, G, G, G, L, L], // 6
    [L, G, L, G, L, G], // 7
    [L, G, L, G, G, L], // 8
    [L, G, G, L, G, L], // 9
];

pub fn left_pattern(digit: Digit, parity: Parity) -> u16 {
    match parity {
        L => LEFT_ODD[usize::from(digit)],
        G => LEFT_EVEN[usize::from(digit)],
    }
}

pub fn right_pattern(digit: Digit) -> u16 {
    RIGHT[usize::from(digit)]
}

/// Modules per Code-128 symbol character
pub const CODE128_SYMBOL_MODULES: usize = 11;

/// Code-128 symbol values 0..=105, widths bar/space/bar/space/bar/space
pub const CODE128_PATTERNS: [[u8; 6]; 106] = [
    [2, 1, 2, 2, 2, 2], // 0
    [2, 2, 2, 1, 2, 2],
    [2, 2, 2, 2, 2, 1],
    [1, 2, 1, 2, 2, 3],
    [1, 2, 1, 3, 2, 2],
    [1, 3, 1, 2, 2, 2],
    [1, 2, 2, 2, 1, 3],
    [1, 2, 2, 3, 1, 2],
    [1, 3, 2, 2, 1, 2],
    [2, 2, 1, 2, 1, 3],
    [2, 2, 1, 3, 1, 2], // 10
    [2, 3, 1, 2, 1, 2],
    [1, 1, 2, 2, 3, 2],
    [1, 2, 2, 1, 3, 2],
    [1, 2, 2, 2, 3, 1],
    [1, 1, 3, 2, 2, 2],
    [1, 2, 3, 1, 2, 2],
    [1, 2, 3, 2, 2, 1],
    [2, 2, 3, 2, 1, 1],
    [2, 2, 1, 1, 3, 2],
    [2, 2, 1, 2, 3, 1], // 20
    [2, 1, 3, 2, 1, 2],
    [2, 2, 3, 1, 1, 2],
    [3, 1, 2, 1, 3, 1],
    [3, 1, 1, 2, 2, 2],
    [3, 2, 1, 1, 2, 2],
    [3, 2, 1, 2, 2, 1],
    [3, 1, 2, 2, 1, 2],
    [3, 2, 2, 1, 1, 2],
    [3, 2, 2, 2, 1, 1],
    [2, 1, 2, 1, 2, 3], // 30
    [2, 1, 2, 3, 2, 1],
    [2, 3, 2, 1, 2, 1],
    [1, 1, 1, 3, 2, 3],
    [1, 3, 1, 1, 2, 3],
    [1, 3, 1, 3, 2, 1],
    [1, 1, 2, 3, 1, 3],
    [1, 3, 2, 1, 1, 3],
    [1, 3, 2, 3, 1, 1],
    [2, 1, 1, 3, 1, 3],
    [2, 3, 1, 1, 1, 3], // 40
    [2, 3, 1, 3, 1, 1],
    [1, 1, 2, 1, 3, 3],
    [1, 1, 2, 3, 3, 1],
    [1, 3, 2, 1, 3, 1],
    [1, 1, 3, 1, 2, 3],
    [1, 1, 3, 3, 2, 1],
    [1, 3, 3, 1, 2, 1],
    [3, 1, 3, 1, 2, 1],
    [2, 1, 1, 3, 3, 1],
    [2, 3, 1, 1, 3, 1], // 50
    [2, 1, 3, 1, 1, 3],
    [2, 1, 3, 3, 1, 1],
    [2, 1, 3, 1, 3, 1],
    [3, 1, 1, 1, 2, 3],
    [3, 1, 1, 3, 2, 1],
    [3, 3, 1, 1, 2, 1],
    [3, 1, 2, 1, 1, 3],
    [3, 1, 2, 3, 1, 1],
    [3, 3, 2, 1, 1, 1],
    [3, 1, 4, 1, 1, 1], // 60
    [2, 2, 1, 4, 1, 1],
    [4, 3, 1, 1, 1, 1],
    [1, 1, 1, 2, 2, 4],
    [1, 1, 1, 4, 2, 2],
    [1, 2, 1, 1, 2, 4],
    [1, 2, 1, 4, 2, 1],
    [1, 4, 1, 1, 2, 2],
    [1, 4, 1, 2, 2, 1],
    [1, 1, 2, 2, 1, 4],
    [1, 1, 2, 4, 1, 2], // 70
    [1, 2, 2, 1, 1, 4],
    [1, 2, 2, 4, 1, 1],
    [1, 4, 2, 1, 1, 2],
    [1, 4, 2, 2, 1, 1],
    [2, 4, 1, 2, 1, 1],
    [2, 2, 1, 1, 1, 4],
    [4, 1, 3, 1, 1, 1],
    [2, 4, 1, 1, 1, 2],
    [1, 3, 4, 1, 1, 1],
    [1, 1, 1, 2, 4, 2], // 80
    [1, 2, 1, 1, 4, 2],
    [1, 2, 1, 2, 4, 1],
    [1, 1, 4, 2, 1, 2],
    [1, 2, 4, 1, 1, 2],
    [1, 2, 4, 2, 1, 1],
    [4, 1, 1, 2, 1, 2],
    [4, 2, 1, 1, 1, 2],
    [4, 2, 1, 2, 1, 1],
    [2, 1, 2, 1, 4, 1],
    [2, 1, 4, 1, 2, 1], // 90
    [4, 1, 2, 1, 2, 1],
    [1, 1, 1, 1, 4, 3],
    [1, 1, 1, 3, 4, 1],
    [1, 3, 1, 1, 4, 1],
    [1, 1, 4, 1, 1, 3],
    [1, 1, 4, 3, 1, 1],
    [4, 1, 1, 1, 1, 3],
    [4, 1, 1, 3, 1, 1],
    [1, 1, 3, 1, 4, 1],
    [1, 1, 4, 1, 3, 1], // 100
    [3, 1, 1, 1, 4, 1],
    [4, 1, 1, 1, 3, 1],
    [2, 1, 1, 4, 1, 2], // Start A
    [2, 1, 1, 2, 1, 4], // Start B
    [2, 1, 1, 2, 3, 2], // Start C
];

/// Stop pattern, including the trailing 2-module termination bar
pub const CODE128_STOP: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];
pub const CODE128_STOP_MODULES: usize = 13;

pub const CODE128_START_B: u8 = 104;
