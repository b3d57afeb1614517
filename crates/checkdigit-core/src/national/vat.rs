//! VAT registration number check digits for Belgium, Finland, the United
//! Kingdom and Luxembourg.

use crate::alphabet::{CharMap, NUMERIC};
use crate::error::CheckDigitError;
use crate::routine::{CheckDigit, is_blank, split_check};
use crate::weighted::{CheckRule, WeightedModulus};
use crate::weighting::{POWERS_OF_2_MOD_11, Weighting};

/// Belgian VAT: the two check digits are `97 - (payload mod 97)`, so a
/// remainder of 0 is written `97`.
pub static VAT_BE: WeightedModulus = WeightedModulus::new(
    97,
    CharMap::Alphabet(NUMERIC),
    Weighting::PlaceValue { radix: 10 },
    CheckRule::Complement(&[0]),
)
.remap(&[(0, 97)])
.reject_zero_sum()
.check_chars(NUMERIC, 2);

/// Finnish VAT: weights 7, 9, 10, 5, 8, 4, 2 (powers of 2 mod 11 from the
/// right). Payloads whose check value would be 10 are not issued.
pub static VAT_FI: WeightedModulus = WeightedModulus::new(
    11,
    CharMap::Alphabet(NUMERIC),
    Weighting::Powers {
        radix: 2,
        table: &POWERS_OF_2_MOD_11,
    },
    CheckRule::Complement(&[0]),
)
.forbid(&[10])
.reject_zero_sum();

/// Luxembourg VAT: the two check digits are the payload number mod 89.
pub static VAT_LU: WeightedModulus = WeightedModulus::new(
    89,
    CharMap::Alphabet(NUMERIC),
    Weighting::PlaceValue { radix: 10 },
    CheckRule::Remainder,
)
.reject_zero_sum()
.check_chars(NUMERIC, 2);

const GB_SCHEME: WeightedModulus = WeightedModulus::new(
    97,
    CharMap::Alphabet(NUMERIC),
    Weighting::Ascending,
    CheckRule::Complement(&[0, 55]),
)
.reject_zero_sum()
.check_chars(NUMERIC, 2);

/// Length of a UK VAT number without branch suffix.
const GB_LENGTH: usize = 9;
/// Length of a UK VAT number with a three-digit branch suffix.
const GB_BRANCH_LENGTH: usize = 12;

/// UK VAT number.
///
/// Seven payload digits are weighted 8 down to 2. Numbers issued before
/// November 2009 use `97 - (sum mod 97)` as check value (MOD 97); later
/// numbers use `97 - ((sum + 55) mod 97)` (MOD 9755). Both are accepted.
/// A twelve-digit number carries a branch suffix which is ignored.
#[derive(Debug, Clone, Copy)]
pub struct VatGb {
    scheme: WeightedModulus,
}

impl VatGb {
    /// Computes the MOD 9755 check digits, used for numbers issued from
    /// November 2009. [`CheckDigit::calculate`] returns the MOD 97 ones.
    ///
    /// # Errors
    ///
    /// Fails like [`CheckDigit::calculate`].
    pub fn calculate_mod9755(&self, payload: &str) -> Result<String, CheckDigitError> {
        if is_blank(payload) {
            return Err(CheckDigitError::MissingCode);
        }
        let values = self.scheme.check_values(payload)?;
        let value = values
            .get(1)
            .copied()
            .ok_or(CheckDigitError::MissingCode)?;
        self.scheme.encode_check(value)
    }
}

impl CheckDigit for VatGb {
    fn calculate(&self, payload: &str) -> Result<String, CheckDigitError> {
        self.scheme.calculate(payload)
    }

    fn verify(&self, code: &str) -> Result<bool, CheckDigitError> {
        if is_blank(code) {
            return Err(CheckDigitError::MissingCode);
        }
        let length = code.chars().count();
        let code = match length {
            GB_BRANCH_LENGTH => code
                .char_indices()
                .nth(GB_LENGTH)
                .map_or(code, |(index, _)| &code[..index]),
            n if n > GB_LENGTH => {
                return Err(CheckDigitError::InvalidCodeLength {
                    length,
                    expected: GB_LENGTH,
                });
            }
            _ => code,
        };
        let (payload, check) = split_check(code, self.scheme.check_len())?;
        let values = self.scheme.check_values(payload)?;
        let encoded = values
            .iter()
            .map(|&value| self.scheme.encode_check(value))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(payload, admissible = ?encoded, "computed UK VAT check digits");
        Ok(encoded.iter().any(|candidate| candidate == check))
    }
}

/// UK VAT, MOD 97 and MOD 9755.
pub static VAT_GB: VatGb = VatGb { scheme: GB_SCHEME };
