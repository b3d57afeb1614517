//! Luhn (ISO/IEC 7812-1) check digit, used by payment card numbers and
//! several national registry numbers.

use crate::alphabet::{CharMap, NUMERIC};
use crate::weighted::{CheckRule, WeightedModulus};
use crate::weighting::Weighting;

/// Luhn mod 10. All-zero payloads are rejected.
pub static LUHN: WeightedModulus = WeightedModulus::new(
    10,
    CharMap::Alphabet(NUMERIC),
    Weighting::Luhn,
    CheckRule::Complement(&[0]),
)
.reject_zero_sum();

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::error::CheckDigitError;
    use crate::routine::CheckDigit;

    #[test]
    fn card_and_registry_numbers() {
        for code in [
            "4417123456789113",
            "4222222222222",
            "378282246310005",
            "5105105105105100",
            "6011000990139424",
            "30569309025904",
            "950501007",
            "5561888404",
            "353535354",
            "999956789012347",
            "0000000018",
            "9999999999",
            "5565102570",
            "12345678903",
            "10215",
        ] {
            assert!(LUHN.is_valid(code), "{code} should be valid");
        }
    }

    #[test]
    fn calculates_card_check_digit() {
        assert_eq!(LUHN.calculate("441712345678911").expect("valid payload"), "3");
    }

    #[test]
    fn single_digit_errors_are_detected() {
        assert!(!LUHN.is_valid("4417123456789112"));
        assert!(!LUHN.is_valid("4417123456789213"));
    }

    #[test]
    fn all_zero_is_rejected() {
        assert!(!LUHN.is_valid("0000000000"));
        assert_eq!(LUHN.calculate("000000000"), Err(CheckDigitError::ZeroSum));
    }
}
