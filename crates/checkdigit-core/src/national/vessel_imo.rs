//! IMO ship identification number: six digits followed by one check digit.
//!
//! The six payload digits are weighted 7 down to 2 from the left and the
//! check digit is the last digit of the sum.

use crate::alphabet::{CharMap, NUMERIC};
use crate::weighted::{CheckRule, WeightedModulus};
use crate::weighting::Weighting;

/// IMO number, exactly 7 digits.
pub static VESSEL_IMO: WeightedModulus = WeightedModulus::new(
    10,
    CharMap::Alphabet(NUMERIC),
    Weighting::CycleRight {
        lead: &[2, 3, 4, 5, 6, 7],
        cycle: &[],
    },
    CheckRule::Remainder,
)
.code_length(7);

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::error::CheckDigitError;
    use crate::routine::CheckDigit;

    #[test]
    fn registered_vessels() {
        for code in ["0000012", "9074729", "9176187", "7946356", "9999993"] {
            assert!(VESSEL_IMO.is_valid(code), "{code} should be valid");
        }
    }

    #[test]
    fn malformed_numbers() {
        for code in ["0000011", "7732-18-5", "IMO0000012", " 9999993", "9999993 "] {
            assert!(!VESSEL_IMO.is_valid(code), "{code:?} should be invalid");
        }
    }

    #[test]
    fn calculates_check_digit() {
        assert_eq!(VESSEL_IMO.calculate("907472").expect("valid payload"), "9");
    }

    #[test]
    fn length_is_fixed() {
        assert_eq!(
            VESSEL_IMO.verify("90747290"),
            Err(CheckDigitError::InvalidCodeLength {
                length: 8,
                expected: 7
            })
        );
        assert_eq!(
            VESSEL_IMO.calculate("9074729"),
            Err(CheckDigitError::InvalidCodeLength {
                length: 7,
                expected: 6
            })
        );
    }
}
