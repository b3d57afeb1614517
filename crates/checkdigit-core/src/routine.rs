//! The [`CheckDigit`] contract shared by every algorithm.

use crate::error::CheckDigitError;

/// A check-digit algorithm.
///
/// Implementors hold only `'static` configuration, so every routine can be
/// shared freely across threads.
pub trait CheckDigit: Send + Sync {
    /// Computes the check character(s) for `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::MissingCode`] for blank input and the
    /// scheme-specific error for malformed payloads.
    fn calculate(&self, payload: &str) -> Result<String, CheckDigitError>;

    /// Checks `code` (payload followed by its check characters).
    ///
    /// `Ok(false)` means the code is well formed but its check characters do
    /// not match.
    ///
    /// # Errors
    ///
    /// Returns an error when the code cannot be checked at all.
    fn verify(&self, code: &str) -> Result<bool, CheckDigitError>;

    /// Returns `true` if `code` carries correct check characters. Never fails;
    /// malformed input is simply invalid.
    fn is_valid(&self, code: &str) -> bool {
        match self.verify(code) {
            Ok(valid) => valid,
            Err(error) => {
                tracing::trace!(code, %error, "check digit verification failed");
                false
            }
        }
    }
}

/// Empty or whitespace only.
pub(crate) fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Splits `code` into payload and the trailing `check_len` characters.
pub(crate) fn split_check(code: &str, check_len: usize) -> Result<(&str, &str), CheckDigitError> {
    let length = code.chars().count();
    if length < check_len {
        return Err(CheckDigitError::InvalidCodeTooShort {
            length,
            required: check_len,
        });
    }
    let at = code
        .char_indices()
        .nth(length - check_len)
        .map_or(code.len(), |(index, _)| index);
    Ok(code.split_at(at))
}
