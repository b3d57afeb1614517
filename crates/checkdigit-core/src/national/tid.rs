//! Check digits of national personal identification numbers.

use crate::alphabet::{CharMap, NUMERIC};
use crate::weighted::{CheckRule, WeightedModulus};
use crate::weighting::Weighting;

/// Danish CPR number. The whole ten-digit number, weighted 1 at the last
/// digit and 2 … 7 repeating leftwards from there, must be divisible by 11;
/// `calculate` takes the complete number and returns `"0"` when it is.
/// The all-zero number is rejected.
pub static TID_DK: WeightedModulus = WeightedModulus::new(
    11,
    CharMap::Alphabet(NUMERIC),
    Weighting::CycleRight {
        lead: &[1],
        cycle: &[2, 3, 4, 5, 6, 7],
    },
    CheckRule::ZeroRemainder,
)
.reject_zero_sum();

/// Romanian CNP. Weights 2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9 from the left;
/// a remainder of 10 is written as `0`.
pub static TID_RO: WeightedModulus = WeightedModulus::new(
    11,
    CharMap::Alphabet(NUMERIC),
    Weighting::CycleLeft(&[2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9]),
    CheckRule::Remainder,
)
.remap(&[(10, 0)]);
