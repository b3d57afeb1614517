//! GS1 Mod-10 check digit for GTIN, GLN and SSCC keys.
//!
//! Payload digits are weighted 3 and 1 alternately, starting with 3 at the
//! digit next to the check digit.

use crate::alphabet::{CharMap, NUMERIC};
use crate::weighted::{CheckRule, WeightedModulus};
use crate::weighting::Weighting;

/// GS1 Mod-10. An all-zero key is a legal code.
pub static GS1: WeightedModulus = WeightedModulus::new(
    10,
    CharMap::Alphabet(NUMERIC),
    Weighting::CycleRight {
        lead: &[],
        cycle: &[3, 1],
    },
    CheckRule::Complement(&[0]),
);
