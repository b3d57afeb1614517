//! Check digit of German vehicle identification (FIN) and driving licence
//! numbers.
//!
//! Letters are transliterated to digits in three runs (`A`–`I`, `J`–`R`,
//! `S`–`Z`), so several letters share a value. Umlauts count as their base
//! letter. Weights run 4 … 10, 1, 2, 3 from the right; a check value of 10 is
//! written `X`.

use crate::alphabet::{CharMap, NUMERIC_PLUS_X};
use crate::weighted::{CheckRule, WeightedModulus};
use crate::weighting::Weighting;

static TRANSLITERATION: [(char, u32); 29] = [
    ('A', 1),
    ('B', 2),
    ('C', 3),
    ('D', 4),
    ('E', 5),
    ('F', 6),
    ('G', 7),
    ('H', 8),
    ('I', 9),
    ('J', 1),
    ('K', 2),
    ('L', 3),
    ('M', 4),
    ('N', 5),
    ('O', 6),
    ('P', 7),
    ('Q', 8),
    ('R', 9),
    ('S', 2),
    ('T', 3),
    ('U', 4),
    ('V', 5),
    ('W', 6),
    ('X', 7),
    ('Y', 8),
    ('Z', 9),
    ('Ä', 1),
    ('Ö', 6),
    ('Ü', 4),
];

/// FIN / driving licence modulus 11.
pub static VEHICLE_FIN: WeightedModulus = WeightedModulus::new(
    11,
    CharMap::Transliterated(&TRANSLITERATION),
    Weighting::CycleRight {
        lead: &[],
        cycle: &[4, 5, 6, 7, 8, 9, 10, 1, 2, 3],
    },
    CheckRule::Complement(&[0]),
)
.check_chars(NUMERIC_PLUS_X, 1);

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::error::CheckDigitError;
    use crate::routine::CheckDigit;

    #[test]
    fn valid_numbers() {
        for code in ["0LY341U59810IX", "B072RRE2I5", "E021AB37X1"] {
            assert!(VEHICLE_FIN.is_valid(code), "{code} should be valid");
        }
    }

    #[test]
    fn invalid_numbers() {
        for code in [
            "A1BS31Z0430336179",
            "0Ly34Ü598110IX",
            "Z021AB37X1",
            "B072RRE2I55",
        ] {
            assert!(!VEHICLE_FIN.is_valid(code), "{code} should be invalid");
        }
    }

    #[test]
    fn umlauts_fold_to_base_letter() {
        assert_eq!(
            VEHICLE_FIN.calculate("0LY34Ü598110I").expect("valid payload"),
            "7"
        );
        assert_eq!(
            VEHICLE_FIN.calculate("0LY34Ü598110I"),
            VEHICLE_FIN.calculate("0LY34U598110I")
        );
    }

    #[test]
    fn letters_with_equal_values_are_interchangeable() {
        assert_eq!(
            VEHICLE_FIN.calculate("A072RRE2I"),
            VEHICLE_FIN.calculate("J072RRE2I")
        );
    }

    #[test]
    fn lowercase_is_rejected_with_position() {
        assert_eq!(
            VEHICLE_FIN.calculate("0Ly34"),
            Err(CheckDigitError::InvalidCharacter {
                character: 'y',
                position: 3
            })
        );
    }
}
