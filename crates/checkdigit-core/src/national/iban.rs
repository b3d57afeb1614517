//! IBAN (ISO 13616) and structured creditor reference (ISO 11649).
//!
//! Both move their four leading characters (country or `RF` prefix plus two
//! check digits) to the end and check the result with alphanumeric
//! MOD 97-10. The creditor reference additionally accepts lowercase ASCII input.

use crate::error::CheckDigitError;
use crate::national::modulus97::{MODULUS_97, Modulus97};
use crate::routine::{CheckDigit, is_blank};

/// Characters moved to the end before checking.
const PREFIX_LEN: usize = 4;

/// International Bank Account Number check digits (positions 3 and 4).
#[derive(Debug, Clone, Copy)]
pub struct Iban {
    modulus97: &'static Modulus97,
    min_length: usize,
}

impl Iban {
    /// Moves the prefix behind the rest of the code, keeping `kept` of its
    /// characters.
    fn rotate(code: &str, kept: usize) -> String {
        code.chars()
            .skip(PREFIX_LEN)
            .chain(code.chars().take(kept))
            .collect()
    }

    /// Translates a position in the rotated code back to the caller's input.
    fn restore_position(error: CheckDigitError, length: usize) -> CheckDigitError {
        match error {
            CheckDigitError::InvalidCharacter {
                character,
                position,
            } => {
                let tail = length - PREFIX_LEN;
                let position = if position <= tail {
                    position + PREFIX_LEN
                } else {
                    position - tail
                };
                CheckDigitError::InvalidCharacter {
                    character,
                    position,
                }
            }
            CheckDigitError::MissingCode
            | CheckDigitError::InvalidCodeTooShort { .. }
            | CheckDigitError::InvalidCodeLength { .. }
            | CheckDigitError::ZeroSum
            | CheckDigitError::InvalidCheckDigitValue(_) => error,
        }
    }

    fn checked_length(&self, code: &str) -> Result<usize, CheckDigitError> {
        if is_blank(code) {
            return Err(CheckDigitError::MissingCode);
        }
        let length = code.chars().count();
        if length < self.min_length {
            return Err(CheckDigitError::InvalidCodeTooShort {
                length,
                required: self.min_length,
            });
        }
        Ok(length)
    }
}

impl CheckDigit for Iban {
    /// `payload` is a complete IBAN; the characters in the check-digit
    /// positions are ignored.
    fn calculate(&self, payload: &str) -> Result<String, CheckDigitError> {
        let length = self.checked_length(payload)?;
        self.modulus97
            .calculate(&Self::rotate(payload, 2))
            .map_err(|error| Self::restore_position(error, length))
    }

    fn verify(&self, code: &str) -> Result<bool, CheckDigitError> {
        let length = self.checked_length(code)?;
        self.modulus97
            .verify(&Self::rotate(code, PREFIX_LEN))
            .map_err(|error| Self::restore_position(error, length))
    }
}

/// IBAN check digits.
pub static IBAN: Iban = Iban {
    modulus97: &MODULUS_97,
    min_length: 5,
};

/// Structured creditor reference: `RF`, two check digits and up to 21
/// alphanumeric characters, checked like an IBAN after uppercasing.
#[derive(Debug, Clone, Copy)]
pub struct CreditorReference {
    iban: &'static Iban,
    max_length: usize,
}

impl CreditorReference {
    fn normalized(&self, code: &str) -> Result<String, CheckDigitError> {
        let length = code.chars().count();
        if length > self.max_length {
            return Err(CheckDigitError::InvalidCodeLength {
                length,
                expected: self.max_length,
            });
        }
        Ok(code.to_ascii_uppercase())
    }
}

impl CheckDigit for CreditorReference {
    fn calculate(&self, payload: &str) -> Result<String, CheckDigitError> {
        self.iban.calculate(&self.normalized(payload)?)
    }

    fn verify(&self, code: &str) -> Result<bool, CheckDigitError> {
        self.iban.verify(&self.normalized(code)?)
    }
}

/// ISO 11649 creditor reference.
pub static RF_CREDITOR_REFERENCE: CreditorReference = CreditorReference {
    iban: &IBAN,
    max_length: 25,
};
