//! Error types produced by the check-digit routines.
//!
//! Every routine reports failures through [`CheckDigitError`]. `calculate`
//! surfaces the specific variant so callers can build user-facing messages;
//! `is_valid` reduces every variant to `false`.

use thiserror::Error;

/// All error conditions a check-digit routine can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    /// The input is empty or consists only of whitespace.
    #[error("code is missing")]
    MissingCode,

    /// A character is outside the routine's alphabet, or is explicitly
    /// excluded at its position (e.g. an escape character in the payload).
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// 1-based position of the character, counted from the left.
        position: usize,
    },

    /// The code has fewer characters than the routine needs.
    #[error("invalid code: {length} character(s), at least {required} required")]
    InvalidCodeTooShort {
        /// Number of characters in the rejected code.
        length: usize,
        /// Minimum number of characters the routine accepts.
        required: usize,
    },

    /// The code length is not one the scheme defines.
    #[error("invalid code: {length} character(s), expected {expected}")]
    InvalidCodeLength {
        /// Number of characters in the rejected input.
        length: usize,
        /// Number of characters the scheme requires at this point.
        expected: usize,
    },

    /// Every weighted term of the payload is zero.
    #[error("invalid code, sum is zero")]
    ZeroSum,

    /// A computed or supplied check value is outside the scheme's legal range.
    #[error("invalid check digit value {0}")]
    InvalidCheckDigitValue(u32),
}
