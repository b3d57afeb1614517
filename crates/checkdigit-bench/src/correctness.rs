//! Invariant checkers for generated codes.

use checkdigit_core::{Algorithm, CheckDigit};

use crate::generator::Sample;

/// Verifies that a generated sample validates and that recalculating its
/// check characters reproduces them.
pub fn check_round_trip(algorithm: Algorithm, sample: &Sample) -> Result<(), String> {
    let routine = algorithm.routine();
    if !routine.is_valid(&sample.code) {
        return Err(format!("{algorithm}: {} does not validate", sample.code));
    }
    if sample.check.is_empty() {
        return Ok(());
    }
    match routine.calculate(&sample.input) {
        Ok(check) if check == sample.check => Ok(()),
        Ok(check) => Err(format!(
            "{algorithm}: {} recalculated as {check}, expected {}",
            sample.input, sample.check
        )),
        Err(error) => Err(format!("{algorithm}: {} failed: {error}", sample.input)),
    }
}

/// Verifies that the recurrence and weighted-sum forms of a pure system give
/// the same check characters for `payload`.
pub fn check_forms_agree(
    recursive: &dyn CheckDigit,
    polynomial: &dyn CheckDigit,
    payload: &str,
) -> Result<(), String> {
    let left = recursive.calculate(payload);
    let right = polynomial.calculate(payload);
    if left == right {
        Ok(())
    } else {
        Err(format!("{payload}: recurrence {left:?}, polynomial {right:?}"))
    }
}

/// Verifies that a corrupted code is rejected.
///
/// Only meaningful for schemes that detect every single substitution: the
/// ISO/IEC 7064 pure and hybrid systems and the prime-modulus national
/// schemes.
pub fn check_substitution_detected(algorithm: Algorithm, corrupted: &str) -> Result<(), String> {
    if algorithm.routine().is_valid(corrupted) {
        Err(format!("{algorithm}: corrupted code {corrupted} still validates"))
    } else {
        Ok(())
    }
}

/// Algorithms guaranteed to detect any single-character substitution within
/// their payload charset.
pub fn detects_all_substitutions(algorithm: Algorithm) -> bool {
    match algorithm {
        Algorithm::Pure11_2
        | Algorithm::Pure37_2
        | Algorithm::Pure97_10
        | Algorithm::Pure661_26
        | Algorithm::Pure1271_36
        | Algorithm::Polynomial11_2
        | Algorithm::Polynomial37_2
        | Algorithm::Polynomial97_10
        | Algorithm::Polynomial661_26
        | Algorithm::Polynomial1271_36
        | Algorithm::Hybrid11_10
        | Algorithm::Hybrid27_26
        | Algorithm::Hybrid37_36
        | Algorithm::Luhn
        | Algorithm::Gs1
        | Algorithm::TidDk
        | Algorithm::VatBe
        | Algorithm::VatFi
        | Algorithm::VatLu => true,
        Algorithm::Modulus97
        | Algorithm::Iban
        | Algorithm::RfCreditorReference
        | Algorithm::Mrtd
        | Algorithm::VesselImo
        | Algorithm::VehicleFin
        | Algorithm::TidRo
        | Algorithm::VatGb => false,
    }
}
