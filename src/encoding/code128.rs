//! Code-128 Encoder - Code Set B Subset
//!
//! Printable ASCII only, no set switching, no FNC characters.
//! Layout: Start B, one symbol per character, mod-103 check symbol, stop.

use super::tables::{
    CODE128_PATTERNS, CODE128_START_B, CODE128_STOP, CODE128_STOP_MODULES,
    CODE128_SYMBOL_MODULES,
};
use super::BarPattern;

const MODULO: u32 = 103;

/// True for characters in the supported Code Set B subset (space through `~`)
pub fn is_supported(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Code Set B symbol value of `c`
pub fn value_of(c: char) -> Option<u8> {
    is_supported(c).then(|| c as u8 - b' ')
}

/// `(start + Σ value_i × (i + 1)) mod 103`
pub fn checksum(values: &[u8]) -> u8 {
    let sum = values
        .iter()
        .enumerate()
        .fold(u32::from(CODE128_START_B), |acc, (i, &v)| {
            acc + u32::from(v) * (i as u32 + 1)
        });
    (sum % MODULO) as u8
}

/// Module count for a text of `len` characters
pub fn modules_for(len: usize) -> usize {
    (len + 2) * CODE128_SYMBOL_MODULES + CODE128_STOP_MODULES
}

/// `text` has already been checked against [`is_supported`]
pub(crate) fn encode(text: &str) -> BarPattern {
    let values: Vec<u8> = text.chars().filter_map(value_of).collect();
    debug_assert_eq!(values.len(), text.chars().count());

    let mut pattern = BarPattern::with_capacity(modules_for(values.len()));
    pattern.push_widths(&CODE128_PATTERNS[usize::from(CODE128_START_B)]);
    for &v in &values {
        pattern.push_widths(&CODE128_PATTERNS[usize::from(v)]);
    }
    pattern.push_widths(&CODE128_PATTERNS[usize::from(checksum(&values))]);
    pattern.push_widths(&CODE128_STOP);
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(s: &str) -> Vec<u8> {
        s.chars().map(|c| value_of(c).unwrap()).collect()
    }

    #[test]
    fn test_values() {
        assert_eq!(value_of(' '), Some(0));
        assert_eq!(value_of('0'), Some(16));
        assert_eq!(value_of('A'), Some(33));
        assert_eq!(value_of('~'), Some(94));
        assert_eq!(value_of('\u{7f}'), None);
        assert_eq!(value_of('é'), None);
    }

    #[test]
    fn test_checksum_reference() {
        // "Wikipedia" in Code Set B has check symbol 88
        assert_eq!(checksum(&values("Wikipedia")), 88);
    }

    #[test]
    fn test_checksum_position_weighted() {
        // swapping characters changes the check symbol
        assert_ne!(checksum(&values("AB")), checksum(&values("BA")));
        assert_eq!(checksum(&[]), 104 % 103);
    }

    #[test]
    fn test_layout() {
        let s = encode("A").to_binary();
        assert_eq!(s.len(), modules_for(1));
        // Start B
        assert_eq!(&s[..11], "11010010000");
        // "A" is value 33: 1,1,1,3,2,3
        assert_eq!(&s[11..22], "10100011000");
        // stop
        assert_eq!(&s[s.len() - 13..], "1100011101011");
    }

    #[test]
    fn test_length_formula() {
        assert_eq!(encode("Wikipedia").len(), 11 * 9 + 35);
        assert_eq!(modules_for(0), 35);
    }
}
