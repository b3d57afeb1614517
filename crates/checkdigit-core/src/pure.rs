//! ISO/IEC 7064 pure systems: MOD 11-2, MOD 37-2, MOD 97-10, MOD 661-26 and
//! MOD 1271-36.
//!
//! A pure system has one modulus `M` and one radix `R`. The checksum is the
//! residue of the recurrence `p = (p + value) * R mod M` run over the payload
//! (with one extra multiplication by `R` for two-character checks), and the
//! check value is the one that brings the residue of the whole code to 1.
//!
//! The recurrence unrolls to `Σ value · R^right mod M`, so each system is
//! shipped twice: as the recurrence (`PURE_*`) and as the equivalent weighted
//! sum over precomputed powers of `R` (`POLYNOMIAL_*`). Both produce the same
//! check characters for every payload.

use crate::alphabet::{
    ALPHABETIC, ALPHANUMERIC, ALPHANUMERIC_PLUS_STAR, Alphabet, CharMap, NUMERIC, NUMERIC_PLUS_X,
    Position,
};
use crate::error::CheckDigitError;
use crate::routine::{CheckDigit, is_blank, split_check};
use crate::weighting::{
    POWERS_OF_2_MOD_11, POWERS_OF_2_MOD_37, POWERS_OF_10_MOD_97, POWERS_OF_26_MOD_661,
    POWERS_OF_36_MOD_1271, Weighting,
};

/// How the payload residue is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Computation {
    /// Left-to-right recurrence `p = (p + value) * R mod M`.
    Recursive,
    /// Weighted sum `Σ value · R^right mod M`.
    Polynomial,
}

/// Descriptor of a pure system.
#[derive(Debug, Clone, Copy)]
pub struct PureSystem {
    modulus: u32,
    radix: u32,
    check_len: usize,
    payload: CharMap,
    check_alphabet: Alphabet,
    weights: &'static [u32],
    computation: Computation,
}

impl PureSystem {
    const fn new(
        modulus: u32,
        radix: u32,
        check_len: usize,
        payload: CharMap,
        check_alphabet: Alphabet,
        weights: &'static [u32],
    ) -> Self {
        Self {
            modulus,
            radix,
            check_len,
            payload,
            check_alphabet,
            weights,
            computation: Computation::Recursive,
        }
    }

    const fn polynomial(self) -> Self {
        Self {
            computation: Computation::Polynomial,
            ..self
        }
    }

    /// The modulus `M`.
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// The radix `R`.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Number of check characters (1 or 2).
    pub fn check_len(&self) -> usize {
        self.check_len
    }

    /// Which residue computation this descriptor uses.
    pub fn computation(&self) -> Computation {
        self.computation
    }

    /// Residue of the payload, including the extra `R` step of two-character
    /// checks. An empty payload has residue 0.
    fn residue(&self, payload: &str) -> Result<u64, CheckDigitError> {
        let m = u64::from(self.modulus);
        let r = u64::from(self.radix);
        let len = payload.chars().count();
        let mut acc = 0u64;
        match self.computation {
            Computation::Recursive => {
                for (index, ch) in payload.chars().enumerate() {
                    let value = self.payload.value_of(ch, Position::in_span(index, len))?;
                    acc = (acc + u64::from(value)) * r % m;
                }
            }
            Computation::Polynomial => {
                let weighting = Weighting::Powers {
                    radix: self.radix,
                    table: self.weights,
                };
                for (index, ch) in payload.chars().enumerate() {
                    let position = Position::in_span(index, len);
                    let value = self.payload.value_of(ch, position)?;
                    acc = (acc + weighting.term(value, position, self.modulus)) % m;
                }
            }
        }
        if self.check_len == 2 {
            acc = acc * r % m;
        }
        Ok(acc)
    }
}

impl CheckDigit for PureSystem {
    fn calculate(&self, payload: &str) -> Result<String, CheckDigitError> {
        if is_blank(payload) {
            return Err(CheckDigitError::MissingCode);
        }
        let m = u64::from(self.modulus);
        let residue = self.residue(payload)?;
        let check = ((m - residue + 1) % m) as u32;
        self.check_alphabet.encode(check, self.check_len)
    }

    fn verify(&self, code: &str) -> Result<bool, CheckDigitError> {
        if is_blank(code) {
            return Err(CheckDigitError::MissingCode);
        }
        let (payload, check) = split_check(code, self.check_len)?;
        let check = self
            .check_alphabet
            .decode(check, payload.chars().count() + 1)?;
        if check >= self.modulus {
            return Err(CheckDigitError::InvalidCheckDigitValue(check));
        }
        let residue = self.residue(payload)?;
        Ok((residue + u64::from(check)) % u64::from(self.modulus) == 1)
    }
}

const EXCEPT_X: CharMap = CharMap::Except {
    alphabet: NUMERIC_PLUS_X,
    excluded: 'X',
};

const EXCEPT_STAR: CharMap = CharMap::Except {
    alphabet: ALPHANUMERIC_PLUS_STAR,
    excluded: '*',
};

const MOD_11_2: PureSystem =
    PureSystem::new(11, 2, 1, EXCEPT_X, NUMERIC_PLUS_X, &POWERS_OF_2_MOD_11);

const MOD_37_2: PureSystem = PureSystem::new(
    37,
    2,
    1,
    EXCEPT_STAR,
    ALPHANUMERIC_PLUS_STAR,
    &POWERS_OF_2_MOD_37,
);

const MOD_97_10: PureSystem = PureSystem::new(
    97,
    10,
    2,
    CharMap::Alphabet(NUMERIC),
    NUMERIC,
    &POWERS_OF_10_MOD_97,
);

const MOD_661_26: PureSystem = PureSystem::new(
    661,
    26,
    2,
    CharMap::Alphabet(ALPHABETIC),
    ALPHABETIC,
    &POWERS_OF_26_MOD_661,
);

const MOD_1271_36: PureSystem = PureSystem::new(
    1271,
    36,
    2,
    CharMap::Alphabet(ALPHANUMERIC),
    ALPHANUMERIC,
    &POWERS_OF_36_MOD_1271,
);

/// ISO/IEC 7064 MOD 11-2: numeric payload, one check character from `0-9X`.
pub static PURE_11_2: PureSystem = MOD_11_2;
/// ISO/IEC 7064 MOD 37-2: alphanumeric payload, one check character from `0-9A-Z*`.
pub static PURE_37_2: PureSystem = MOD_37_2;
/// ISO/IEC 7064 MOD 97-10: numeric payload, two numeric check characters.
pub static PURE_97_10: PureSystem = MOD_97_10;
/// ISO/IEC 7064 MOD 661-26: alphabetic payload, two alphabetic check characters.
pub static PURE_661_26: PureSystem = MOD_661_26;
/// ISO/IEC 7064 MOD 1271-36: alphanumeric payload, two alphanumeric check characters.
pub static PURE_1271_36: PureSystem = MOD_1271_36;

/// MOD 11-2 computed as a weighted sum.
pub static POLYNOMIAL_11_2: PureSystem = MOD_11_2.polynomial();
/// MOD 37-2 computed as a weighted sum.
pub static POLYNOMIAL_37_2: PureSystem = MOD_37_2.polynomial();
/// MOD 97-10 computed as a weighted sum.
pub static POLYNOMIAL_97_10: PureSystem = MOD_97_10.polynomial();
/// MOD 661-26 computed as a weighted sum.
pub static POLYNOMIAL_661_26: PureSystem = MOD_661_26.polynomial();
/// MOD 1271-36 computed as a weighted sum.
pub static POLYNOMIAL_1271_36: PureSystem = MOD_1271_36.polynomial();
