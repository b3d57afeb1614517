//! ISO/IEC 7064 hybrid systems: MOD 11,10, MOD 27,26 and MOD 37,36.
//!
//! A hybrid system works with two moduli, the alphabet size `n` and `n + 1`,
//! and yields one check character from the same `n`-character alphabet.

use crate::alphabet::{ALPHABETIC, ALPHANUMERIC, Alphabet, CharMap, NUMERIC, Position};
use crate::error::CheckDigitError;
use crate::routine::{CheckDigit, is_blank, split_check};

/// Descriptor of a hybrid system. The larger modulus is derived from the
/// alphabet length.
#[derive(Debug, Clone, Copy)]
pub struct HybridSystem {
    alphabet: Alphabet,
}

impl HybridSystem {
    const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The larger modulus, one more than the alphabet length.
    pub fn modulus(&self) -> u32 {
        self.alphabet.len() + 1
    }

    /// Runs the recurrence over `payload` and returns the check value.
    fn check_value(&self, payload: &str) -> Result<u32, CheckDigitError> {
        let modulus = self.modulus();
        let n = modulus - 1;
        let chars = CharMap::Alphabet(self.alphabet);
        let len = payload.chars().count();
        let mut product = n;
        for (index, ch) in payload.chars().enumerate() {
            let value = chars.value_of(ch, Position::in_span(index, len))?;
            let mut sum = (value + product) % n;
            if sum == 0 {
                sum = n;
            }
            product = 2 * sum % modulus;
        }
        let raw = modulus - product;
        Ok(if raw == n { 0 } else { raw })
    }
}

impl CheckDigit for HybridSystem {
    fn calculate(&self, payload: &str) -> Result<String, CheckDigitError> {
        if is_blank(payload) {
            return Err(CheckDigitError::MissingCode);
        }
        let value = self.check_value(payload)?;
        self.alphabet.encode(value, 1)
    }

    fn verify(&self, code: &str) -> Result<bool, CheckDigitError> {
        if is_blank(code) {
            return Err(CheckDigitError::MissingCode);
        }
        let (payload, check) = split_check(code, 1)?;
        let supplied = self.alphabet.decode(check, payload.chars().count() + 1)?;
        Ok(self.check_value(payload)? == supplied)
    }
}

/// ISO/IEC 7064 MOD 11,10 over digits.
pub static HYBRID_11_10: HybridSystem = HybridSystem::new(NUMERIC);

/// ISO/IEC 7064 MOD 27,26 over letters.
pub static HYBRID_27_26: HybridSystem = HybridSystem::new(ALPHABETIC);

/// ISO/IEC 7064 MOD 37,36 over digits and letters.
pub static HYBRID_37_36: HybridSystem = HybridSystem::new(ALPHANUMERIC);
