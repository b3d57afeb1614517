//! Generic weighted-modulus routine.
//!
//! The national and sector schemes differ from the ISO systems only in how
//! characters are valued, how positions are weighted and how the remainder
//! becomes a check value. [`WeightedModulus`] assembles one scheme from those
//! three strategies plus a little post-processing.

use crate::alphabet::{Alphabet, CharMap, NUMERIC, Position};
use crate::error::CheckDigitError;
use crate::routine::{CheckDigit, is_blank, split_check};
use crate::weighting::Weighting;

/// How the weighted remainder is turned into, or checked against, the check value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckRule {
    /// `(M - (rem + offset) mod M) mod M` for each offset. The first offset
    /// gives the calculated check value; a code is valid if its check value
    /// matches any of them.
    Complement(&'static [u32]),
    /// The remainder itself.
    Remainder,
    /// No separate check characters: the weighted sum over the whole code
    /// must be divisible by `M`.
    ZeroRemainder,
}

/// Treatment of a payload whose weighted terms are all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroSumPolicy {
    /// Fail with [`CheckDigitError::ZeroSum`].
    Reject,
    /// Compute the check value as usual.
    Allow,
}

/// A weighted-sum check-digit scheme.
#[derive(Debug, Clone, Copy)]
pub struct WeightedModulus {
    modulus: u32,
    chars: CharMap,
    weighting: Weighting,
    rule: CheckRule,
    remap: &'static [(u32, u32)],
    forbidden: &'static [u32],
    zero_sum: ZeroSumPolicy,
    code_length: Option<usize>,
    check_alphabet: Alphabet,
    check_len: usize,
}

impl WeightedModulus {
    /// A scheme with one numeric check character and no post-processing.
    pub const fn new(modulus: u32, chars: CharMap, weighting: Weighting, rule: CheckRule) -> Self {
        Self {
            modulus,
            chars,
            weighting,
            rule,
            remap: &[],
            forbidden: &[],
            zero_sum: ZeroSumPolicy::Allow,
            code_length: None,
            check_alphabet: NUMERIC,
            check_len: 1,
        }
    }

    /// Replaces computed check values: `(from, to)` pairs.
    pub const fn remap(self, remap: &'static [(u32, u32)]) -> Self {
        Self { remap, ..self }
    }

    /// Check values that make a payload unusable.
    pub const fn forbid(self, forbidden: &'static [u32]) -> Self {
        Self { forbidden, ..self }
    }

    /// Fails all-zero payloads with [`CheckDigitError::ZeroSum`].
    pub const fn reject_zero_sum(self) -> Self {
        Self {
            zero_sum: ZeroSumPolicy::Reject,
            ..self
        }
    }

    /// Requires codes of exactly `length` characters (payloads of
    /// `length - check_len`).
    pub const fn code_length(self, length: usize) -> Self {
        Self {
            code_length: Some(length),
            ..self
        }
    }

    /// Writes check values with `width` characters of `alphabet`.
    pub const fn check_chars(self, alphabet: Alphabet, width: usize) -> Self {
        Self {
            check_alphabet: alphabet,
            check_len: width,
            ..self
        }
    }

    /// The modulus `M`.
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Number of check characters.
    pub fn check_len(&self) -> usize {
        self.check_len
    }

    /// Writes a check value with this scheme's check alphabet and width.
    pub fn encode_check(&self, value: u32) -> Result<String, CheckDigitError> {
        self.check_alphabet.encode(value, self.check_len)
    }

    /// Weighted sum of `span` reduced modulo `M`.
    fn remainder(&self, span: &str) -> Result<u32, CheckDigitError> {
        let m = u64::from(self.modulus);
        let len = span.chars().count();
        let mut sum = 0u64;
        let mut all_zero = true;
        for (index, ch) in span.chars().enumerate() {
            let position = Position::in_span(index, len);
            let value = self.chars.value_of(ch, position)?;
            let term = self.weighting.term(value, position, self.modulus);
            all_zero &= term == 0;
            sum = (sum + term) % m;
        }
        if all_zero && self.zero_sum == ZeroSumPolicy::Reject {
            return Err(CheckDigitError::ZeroSum);
        }
        Ok(sum as u32)
    }

    fn finish(&self, value: u32) -> Result<u32, CheckDigitError> {
        let value = self
            .remap
            .iter()
            .find(|(from, _)| *from == value)
            .map_or(value, |&(_, to)| to);
        if self.forbidden.contains(&value) {
            return Err(CheckDigitError::InvalidCheckDigitValue(value));
        }
        Ok(value)
    }

    /// Every admissible check value for `payload`, preferred one first.
    pub fn check_values(&self, payload: &str) -> Result<Vec<u32>, CheckDigitError> {
        let rem = self.remainder(payload)?;
        let m = self.modulus;
        match self.rule {
            CheckRule::Complement(offsets) => offsets
                .iter()
                .map(|offset| self.finish((m - (rem + offset) % m) % m))
                .collect(),
            CheckRule::Remainder => Ok(vec![self.finish(rem)?]),
            CheckRule::ZeroRemainder => {
                if rem == 0 {
                    Ok(vec![0])
                } else {
                    Err(CheckDigitError::InvalidCheckDigitValue(rem))
                }
            }
        }
    }

    fn check_length(&self, length: usize, check_len: usize) -> Result<(), CheckDigitError> {
        match self.code_length {
            Some(expected) if length + check_len != expected => {
                Err(CheckDigitError::InvalidCodeLength {
                    length,
                    expected: expected.saturating_sub(check_len),
                })
            }
            Some(_) | None => Ok(()),
        }
    }
}

impl CheckDigit for WeightedModulus {
    /// For [`CheckRule::ZeroRemainder`] schemes `payload` is the whole code
    /// and the result is `"0"` when the code is consistent.
    fn calculate(&self, payload: &str) -> Result<String, CheckDigitError> {
        if is_blank(payload) {
            return Err(CheckDigitError::MissingCode);
        }
        let check_len = match self.rule {
            CheckRule::ZeroRemainder => 0,
            CheckRule::Complement(_) | CheckRule::Remainder => self.check_len,
        };
        self.check_length(payload.chars().count(), check_len)?;
        let values = self.check_values(payload)?;
        let Some(&value) = values.first() else {
            return Err(CheckDigitError::MissingCode);
        };
        match self.rule {
            CheckRule::ZeroRemainder => Ok(value.to_string()),
            CheckRule::Complement(_) | CheckRule::Remainder => self.encode_check(value),
        }
    }

    fn verify(&self, code: &str) -> Result<bool, CheckDigitError> {
        if is_blank(code) {
            return Err(CheckDigitError::MissingCode);
        }
        self.check_length(code.chars().count(), 0)?;
        match self.rule {
            CheckRule::ZeroRemainder => Ok(self.remainder(code)? == 0),
            CheckRule::Complement(_) | CheckRule::Remainder => {
                let (payload, check) = split_check(code, self.check_len)?;
                for value in self.check_values(payload)? {
                    if self.encode_check(value)? == check {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}
