//! Character alphabets, position numbering, and character-to-value mapping.
//!
//! An [`Alphabet`] is an ordered character set: the index of a character is
//! its numeric value, and check values are written back as characters of the
//! same set. A [`CharMap`] decides how a *payload* character turns into a
//! value, which is usually the alphabet index but may exclude an escape
//! character or transliterate letters to digits.

use crate::error::CheckDigitError;

/// Digits `0`–`9`. Used by MOD 11,10, MOD 97-10 and most national schemes.
pub const NUMERIC: Alphabet = Alphabet::new("0123456789");

/// Letters `A`–`Z`. Used by MOD 27,26 and MOD 661-26.
pub const ALPHABETIC: Alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// Digits followed by letters, `0`=0 … `Z`=35. Used by MOD 37,36 and MOD 1271-36.
pub const ALPHANUMERIC: Alphabet = Alphabet::new("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// Check alphabet of MOD 11-2: digits plus `X` for the value 10.
pub const NUMERIC_PLUS_X: Alphabet = Alphabet::new("0123456789X");

/// Check alphabet of MOD 37-2: alphanumerics plus `*` for the value 36.
pub const ALPHANUMERIC_PLUS_STAR: Alphabet =
    Alphabet::new("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*");

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// An ordered character set defining the value of each character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    chars: &'static str,
}

impl Alphabet {
    /// Creates an alphabet whose character at index `i` has value `i`.
    pub const fn new(chars: &'static str) -> Self {
        Self { chars }
    }

    /// Returns the characters of the alphabet in value order.
    pub fn as_str(&self) -> &'static str {
        self.chars
    }

    /// Number of characters, which is also the radix used to write
    /// multi-character check values.
    pub fn len(&self) -> u32 {
        self.chars.chars().count() as u32
    }

    /// Returns `true` if the alphabet has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the value of `character`, or `None` if it is not in the alphabet.
    pub fn value_of(&self, character: char) -> Option<u32> {
        self.chars
            .chars()
            .position(|c| c == character)
            .map(|index| index as u32)
    }

    /// Returns the character whose value is `value`.
    pub fn char_at(&self, value: u32) -> Option<char> {
        self.chars.chars().nth(value as usize)
    }

    /// Writes `value` as exactly `width` characters, most significant first,
    /// using the alphabet length as the radix.
    ///
    /// Fails with [`CheckDigitError::InvalidCheckDigitValue`] when `value`
    /// does not fit in `width` characters.
    pub fn encode(&self, value: u32, width: usize) -> Result<String, CheckDigitError> {
        let radix = self.len();
        if radix == 0 {
            return Err(CheckDigitError::InvalidCheckDigitValue(value));
        }
        let mut rest = value;
        let mut reversed = Vec::with_capacity(width);
        for _ in 0..width {
            let ch = self
                .char_at(rest % radix)
                .ok_or(CheckDigitError::InvalidCheckDigitValue(value))?;
            reversed.push(ch);
            rest /= radix;
        }
        if rest != 0 {
            return Err(CheckDigitError::InvalidCheckDigitValue(value));
        }
        Ok(reversed.iter().rev().collect())
    }

    /// Reads check characters back into a value; the inverse of [`Alphabet::encode`].
    ///
    /// `first_position` is the 1-based position of the first check character
    /// in the full code, used for error reporting.
    pub fn decode(&self, check: &str, first_position: usize) -> Result<u32, CheckDigitError> {
        let radix = self.len();
        check
            .chars()
            .enumerate()
            .try_fold(0u32, |acc, (offset, character)| {
                let value = self
                    .value_of(character)
                    .ok_or(CheckDigitError::InvalidCharacter {
                        character,
                        position: first_position + offset,
                    })?;
                Ok(acc * radix + value)
            })
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Where a character sits inside the span being summed.
///
/// `left` counts from 1 at the first character; `right` counts from 1 at the
/// last character of the span. For payload spans the check character is not
/// part of the span, so the rightmost payload character has `right == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based position from the left.
    pub left: usize,
    /// 1-based position from the right.
    pub right: usize,
}

impl Position {
    /// Position of the character at 0-based `index` in a span of `len` characters.
    pub fn in_span(index: usize, len: usize) -> Self {
        Self {
            left: index + 1,
            right: len - index,
        }
    }
}

// ---------------------------------------------------------------------------
// CharMap
// ---------------------------------------------------------------------------

/// Strategy turning a payload character into its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharMap {
    /// The character's index in the alphabet.
    Alphabet(Alphabet),
    /// The character's index in the alphabet, except that `excluded` is
    /// rejected. Used where an escape character is legal only as a check
    /// character (`X` in MOD 11-2, `*` in MOD 37-2).
    Except {
        /// The alphabet shared with the check character.
        alphabet: Alphabet,
        /// The character that may not appear in a payload.
        excluded: char,
    },
    /// ASCII digits map to themselves; other characters are looked up in the
    /// table. Several letters may share a value.
    Transliterated(&'static [(char, u32)]),
}

impl CharMap {
    /// Returns the value of `character` at `position`.
    ///
    /// Fails with [`CheckDigitError::InvalidCharacter`] carrying the
    /// character and its left position when the character is not mapped.
    pub fn value_of(&self, character: char, position: Position) -> Result<u32, CheckDigitError> {
        let value = match self {
            Self::Alphabet(alphabet) => alphabet.value_of(character),
            Self::Except { alphabet, excluded } => {
                if character == *excluded {
                    None
                } else {
                    alphabet.value_of(character)
                }
            }
            Self::Transliterated(table) => character.to_digit(10).or_else(|| {
                table
                    .iter()
                    .find(|(letter, _)| *letter == character)
                    .map(|&(_, value)| value)
            }),
        };
        value.ok_or(CheckDigitError::InvalidCharacter {
            character,
            position: position.left,
        })
    }
}
