//! ISO/IEC 7064 MOD 97-10 over alphanumeric codes, as used by IBAN, the
//! Legal Entity Identifier and the German Leitweg-ID.
//!
//! Letters are expanded to their two-digit value (`A` = 10 … `Z` = 35) and
//! the resulting digit string is reduced modulo 97 incrementally:
//! `remainder = (remainder * base + value) % 97`, with `base` 10 for digits
//! and 100 for letters. Check digits are `98 - (remainder * 100 mod 97)`,
//! which always lies in `[2, 98]`.

use crate::alphabet::{ALPHANUMERIC, CharMap, NUMERIC, Position};
use crate::error::CheckDigitError;
use crate::routine::{CheckDigit, is_blank, split_check};

const MODULUS: u64 = 97;

/// Alphanumeric MOD 97-10 with two numeric check digits.
#[derive(Debug, Clone, Copy)]
pub struct Modulus97 {
    chars: CharMap,
}

impl Modulus97 {
    fn residue(&self, payload: &str) -> Result<u64, CheckDigitError> {
        let len = payload.chars().count();
        let mut remainder = 0u64;
        for (index, ch) in payload.chars().enumerate() {
            let value = u64::from(self.chars.value_of(ch, Position::in_span(index, len))?);
            let base = if value < 10 { 10 } else { 100 };
            remainder = (remainder * base + value) % MODULUS;
        }
        Ok(remainder)
    }

    /// Check value for `payload`; an empty payload yields 98.
    fn check_value(&self, payload: &str) -> Result<u32, CheckDigitError> {
        let shifted = self.residue(payload)? * 100 % MODULUS;
        let value = ((MODULUS - shifted + 1) % MODULUS) as u32;
        Ok(if value < 2 { value + 97 } else { value })
    }
}

impl CheckDigit for Modulus97 {
    fn calculate(&self, payload: &str) -> Result<String, CheckDigitError> {
        if is_blank(payload) {
            return Err(CheckDigitError::MissingCode);
        }
        NUMERIC.encode(self.check_value(payload)?, 2)
    }

    fn verify(&self, code: &str) -> Result<bool, CheckDigitError> {
        if is_blank(code) {
            return Err(CheckDigitError::MissingCode);
        }
        let (payload, check) = split_check(code, 2)?;
        Ok(NUMERIC.encode(self.check_value(payload)?, 2)? == check)
    }
}

/// Alphanumeric MOD 97-10.
pub static MODULUS_97: Modulus97 = Modulus97 {
    chars: CharMap::Alphabet(ALPHANUMERIC),
};

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    /// `5493006MHB84DD0ZWV18` is the LEI of the Bank for International Settlements.
    #[test]
    fn valid_bis_lei() {
        assert!(MODULUS_97.is_valid("5493006MHB84DD0ZWV18"));
    }

    #[test]
    fn valid_deutsche_bank_lei() {
        assert!(MODULUS_97.is_valid("7LTWFZYICNSX8D621K86"));
    }

    #[test]
    fn valid_apple_lei() {
        assert!(MODULUS_97.is_valid("HWUPKR0MPOU8FGXBT394"));
    }

    #[test]
    fn invalid_corrupt_check_digit() {
        assert!(!MODULUS_97.is_valid("5493006MHB84DD0ZWV19"));
    }

    #[test]
    fn invalid_corrupt_body() {
        assert!(!MODULUS_97.is_valid("5493007MHB84DD0ZWV18"));
    }

    #[test]
    fn invalid_transposition() {
        assert!(!MODULUS_97.is_valid("5493060MHB84DD0ZWV18"));
    }

    /// Twenty zeros carry check digits `00`, which are never issued.
    #[test]
    fn invalid_all_zeros() {
        assert!(!MODULUS_97.is_valid("00000000000000000000"));
    }

    #[test]
    fn other_known_codes() {
        for code in [
            "98",
            "098",
            "0098",
            "000195",
            "059163100197",
            "051111201298",
            "0401100012345ABCXYZ86",
            "510007547061BE62",
            "54930084UKLVMY22DS16",
            "M07J9MTYHFCSVRBV2631",
            "NL004350351B91",
            "NBIQ850123456789012IQ98",
        ] {
            assert!(MODULUS_97.is_valid(code), "{code} should be valid");
        }
        for code in ["01", "001", "0001", "059163100100", "NBIQ850123456789012IQ01"] {
            assert!(!MODULUS_97.is_valid(code), "{code} should be invalid");
        }
    }

    #[test]
    fn calculates_rotated_creditor_reference() {
        assert_eq!(
            MODULUS_97.calculate("539007547034RF").expect("valid payload"),
            "18"
        );
    }

    /// Separators are reported rather than skipped.
    #[test]
    fn separators_are_invalid_characters() {
        assert_eq!(
            MODULUS_97.verify("549300-MHB84DD0ZWV18"),
            Err(CheckDigitError::InvalidCharacter {
                character: '-',
                position: 7
            })
        );
    }

    #[test]
    fn too_short_and_empty() {
        assert_eq!(
            MODULUS_97.verify("8"),
            Err(CheckDigitError::InvalidCodeTooShort {
                length: 1,
                required: 2
            })
        );
        assert_eq!(MODULUS_97.calculate(""), Err(CheckDigitError::MissingCode));
    }
}
