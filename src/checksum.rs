//! Check Digit Calculation - UPC-A and EAN-13
//!
//! The two weightings are mirror images of each other:
//! UPC-A weights even 0-based positions by 3, EAN-13 weights odd positions by 3.
//! Code-128 has its own mod-103 checksum, folded into its encoder.

use crate::symbology::ChecksummedSymbology;

/// A single decimal digit, 0..=9
pub type Digit = u8;

fn weight(position: usize, symbology: ChecksummedSymbology) -> u32 {
    let even = position % 2 == 0;
    match (symbology, even) {
        (ChecksummedSymbology::UpcA, true) | (ChecksummedSymbology::Ean13, false) => 3,
        _ => 1,
    }
}

/// Weighted sum of `digits` under the symbology's rule.
///
/// For a complete code (check digit included) the sum is a multiple of 10.
pub fn weighted_sum(digits: &[Digit], symbology: ChecksummedSymbology) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * weight(i, symbology))
        .sum()
}

/// Check digit for the payload digits (11 for UPC-A, 12 for EAN-13)
pub fn check_digit(code: &[Digit], symbology: ChecksummedSymbology) -> Digit {
    let sum = weighted_sum(code, symbology);
    ((10 - (sum % 10)) % 10) as Digit
}

/// True when the last digit of a complete code matches its computed check digit
pub fn has_valid_check_digit(code: &[Digit], symbology: ChecksummedSymbology) -> bool {
    match code.split_last() {
        Some((&last, payload)) if code.len() == symbology.full_len() => {
            check_digit(payload, symbology) == last
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<Digit> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_upc_a_reference_vector() {
        assert_eq!(check_digit(&digits("03600029145"), ChecksummedSymbology::UpcA), 2);
    }

    #[test]
    fn test_ean_13_reference_vector() {
        assert_eq!(check_digit(&digits("400638133393"), ChecksummedSymbology::Ean13), 1);
    }

    #[test]
    fn test_swapped_weighting_changes_result() {
        // A transposed weighting table must not go unnoticed
        let upc = digits("03600029145");
        assert_ne!(
            check_digit(&upc, ChecksummedSymbology::UpcA),
            check_digit(&upc, ChecksummedSymbology::Ean13)
        );
        assert_eq!(check_digit(&upc, ChecksummedSymbology::Ean13), 8);

        let ean = digits("400638133393");
        assert_ne!(
            check_digit(&ean, ChecksummedSymbology::Ean13),
            check_digit(&ean, ChecksummedSymbology::UpcA)
        );
    }

    #[test]
    fn test_upc_a_as_ean_13_with_leading_zero() {
        // A UPC-A code is the EAN-13 code with a leading 0; both rules agree there
        let upc = digits("03600029145");
        let mut ean = vec![0];
        ean.extend(&upc);
        assert_eq!(
            check_digit(&upc, ChecksummedSymbology::UpcA),
            check_digit(&ean, ChecksummedSymbology::Ean13)
        );
    }

    #[test]
    fn test_zero_sum_gives_zero() {
        assert_eq!(check_digit(&[0; 11], ChecksummedSymbology::UpcA), 0);
        assert_eq!(check_digit(&[0; 12], ChecksummedSymbology::Ean13), 0);
    }

    #[test]
    fn test_complete_code_sums_to_multiple_of_ten() {
        let full = digits("036000291452");
        assert_eq!(weighted_sum(&full, ChecksummedSymbology::UpcA) % 10, 0);
        assert!(has_valid_check_digit(&full, ChecksummedSymbology::UpcA));

        let full = digits("4006381333931");
        assert_eq!(weighted_sum(&full, ChecksummedSymbology::Ean13) % 10, 0);
        assert!(has_valid_check_digit(&full, ChecksummedSymbology::Ean13));
    }

    #[test]
    fn test_wrong_length_is_never_valid() {
        assert!(!has_valid_check_digit(&digits("03600029145"), ChecksummedSymbology::UpcA));
        assert!(!has_valid_check_digit(&[], ChecksummedSymbology::Ean13));
    }
}
