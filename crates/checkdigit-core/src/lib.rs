#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Check-digit computation for structured identifiers.
//!
//! The ISO/IEC 7064 pure and hybrid systems live in [`pure`] and [`hybrid`];
//! the sector and national schemes in [`national`] are assembled from the
//! strategies in [`alphabet`], [`weighting`] and [`weighted`]. Every routine
//! implements [`CheckDigit`] and can be looked up by name through
//! [`Algorithm`].
//!
//! ```
//! use checkdigit_core::{Algorithm, CheckDigit};
//!
//! let mrtd = Algorithm::Mrtd.routine();
//! assert_eq!(mrtd.calculate("L898902C3").ok().as_deref(), Some("6"));
//! assert!(mrtd.is_valid("L898902C36"));
//! assert!(!mrtd.is_valid("L898902C37"));
//! ```

pub mod algorithm;
pub mod alphabet;
pub mod error;
pub mod hybrid;
pub mod national;
pub mod pure;
pub mod routine;
pub mod weighted;
pub mod weighting;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use alphabet::{Alphabet, CharMap, Position};
pub use error::CheckDigitError;
pub use hybrid::{HYBRID_11_10, HYBRID_27_26, HYBRID_37_36, HybridSystem};
pub use national::{
    CreditorReference, GS1, IBAN, Iban, LUHN, MODULUS_97, MRTD, Modulus97,
    RF_CREDITOR_REFERENCE, TID_DK, TID_RO, VAT_BE, VAT_FI, VAT_GB, VAT_LU, VEHICLE_FIN,
    VESSEL_IMO, VatGb,
};
pub use pure::{
    Computation, POLYNOMIAL_11_2, POLYNOMIAL_37_2, POLYNOMIAL_97_10, POLYNOMIAL_661_26,
    POLYNOMIAL_1271_36, PURE_11_2, PURE_37_2, PURE_97_10, PURE_661_26, PURE_1271_36, PureSystem,
};
pub use routine::CheckDigit;
pub use weighted::{CheckRule, WeightedModulus, ZeroSumPolicy};
pub use weighting::{Weighting, mod_pow};

/// Returns the current version of the checkdigit-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
