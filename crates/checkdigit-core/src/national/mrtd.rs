//! ICAO Doc 9303 check digit for machine readable travel documents.
//!
//! Characters are valued `0`–`9` then `A`=10 … `Z`=35 and weighted 7, 3, 1
//! repeating from the left; the check digit is the weighted sum mod 10.

use crate::alphabet::{ALPHANUMERIC, CharMap};
use crate::weighted::{CheckRule, WeightedModulus};
use crate::weighting::Weighting;

/// MRTD modulus 10 with weights 7, 3, 1.
pub static MRTD: WeightedModulus = WeightedModulus::new(
    10,
    CharMap::Alphabet(ALPHANUMERIC),
    Weighting::CycleLeft(&[7, 3, 1]),
    CheckRule::Remainder,
)
.reject_zero_sum();
