//! Boundary scenarios across the pure, hybrid and national routines.
#![allow(clippy::expect_used)]

use checkdigit_core::{
    Algorithm, CheckDigit, CheckDigitError, LUHN, MODULUS_97, MRTD, PURE_11_2, TID_DK, VAT_GB,
    Weighting, mod_pow,
};

#[test]
fn mod_11_2_weights_and_check() {
    let weighting = Weighting::Powers {
        radix: 2,
        table: &[1, 2, 4, 8, 5, 10, 9, 7, 3, 6, 1, 2, 4, 8, 5],
    };
    for right in 0..15 {
        let position = checkdigit_core::Position { left: 1, right };
        assert_eq!(weighting.weight(position, 11), mod_pow(2, right as u64, 11));
    }
    assert_eq!(PURE_11_2.calculate("0794").expect("valid payload"), "0");
    assert!(PURE_11_2.is_valid("07940"));
}

#[test]
fn mod_11_2_escape_character_only_as_check() {
    assert!(PURE_11_2.is_valid("079X"));
    assert!(!PURE_11_2.is_valid("07X40"));
    assert!(!PURE_11_2.is_valid("0794X0"));
    assert!(matches!(
        PURE_11_2.calculate("0794X"),
        Err(CheckDigitError::InvalidCharacter {
            character: 'X',
            position: 5
        })
    ));
}

#[test]
fn alphanumeric_mod_97_rejects_check_01() {
    assert!(MODULUS_97.is_valid("NBIQ850123456789012IQ98"));
    assert!(!MODULUS_97.is_valid("NBIQ850123456789012IQ01"));
    assert_eq!(
        MODULUS_97.calculate("NBIQ850123456789012IQ").expect("valid payload"),
        "98"
    );
}

#[test]
fn danish_zero_remainder() {
    assert_eq!(TID_DK.calculate("2110625629").expect("consistent number"), "0");
    assert!(TID_DK.is_valid("2110625629"));
    for code in ["2110625620", "2110625621", "1110625629"] {
        assert!(TID_DK.calculate(code).is_err(), "{code}");
        assert!(!TID_DK.is_valid(code), "{code}");
    }
}

#[test]
fn mrtd_cyclic_weights() {
    assert_eq!(MRTD.calculate("L898902C3").expect("valid payload"), "6");
    assert!(MRTD.is_valid("L898902C36"));
}

#[test]
fn zero_sum_fails_calculate_but_not_is_valid() {
    for routine in [&LUHN, &MRTD] {
        assert_eq!(routine.calculate("000000000"), Err(CheckDigitError::ZeroSum));
        assert!(!routine.is_valid("0000000000"));
    }
    let be = Algorithm::VatBe.routine();
    assert_eq!(be.calculate("00000000"), Err(CheckDigitError::ZeroSum));
    assert!(!be.is_valid("0000000097"));

    assert_eq!(TID_DK.calculate("0000000000"), Err(CheckDigitError::ZeroSum));
    assert!(!TID_DK.is_valid("0000000000"));

    assert_eq!(VAT_GB.calculate("0000000"), Err(CheckDigitError::ZeroSum));
    assert!(!VAT_GB.is_valid("000000000"));
    assert!(!VAT_GB.is_valid("000000042"));
}

#[test]
fn uk_dual_acceptance() {
    // Legacy MOD 97 only.
    assert_eq!(VAT_GB.calculate("9807806").expect("valid payload"), "84");
    assert_ne!(VAT_GB.calculate_mod9755("9807806").expect("valid payload"), "84");
    assert!(VAT_GB.is_valid("980780684"));
    // MOD 9755 only.
    assert_ne!(VAT_GB.calculate("4340314").expect("valid payload"), "39");
    assert_eq!(VAT_GB.calculate_mod9755("4340314").expect("valid payload"), "39");
    assert!(VAT_GB.is_valid("434031439"));
}

#[test]
fn is_valid_never_fails_on_malformed_input() {
    for algorithm in Algorithm::ALL {
        let routine = algorithm.routine();
        for input in ["", " ", "\t\n", "#", "ü", "0", "-1", "99999999999999999999999999999999"] {
            // Must return, whatever the answer.
            let _valid: bool = routine.is_valid(input);
        }
        assert!(!routine.is_valid(""), "{algorithm}");
        assert_eq!(routine.calculate(""), Err(CheckDigitError::MissingCode), "{algorithm}");
        assert_eq!(routine.calculate("  "), Err(CheckDigitError::MissingCode), "{algorithm}");
    }
}
