//! Sector and national check-digit schemes.
//!
//! Most schemes here are [`WeightedModulus`](crate::weighted::WeightedModulus)
//! configurations. The MOD 97 family over alphanumerics (IBAN, creditor
//! reference, LEI) has its own digit-expanding routine, and the UK VAT scheme
//! wraps its configuration to handle branch suffixes.

pub mod gs1;
pub mod iban;
pub mod luhn;
pub mod modulus97;
pub mod mrtd;
pub mod tid;
pub mod vat;
pub mod vehicle_fin;
pub mod vessel_imo;

pub use gs1::GS1;
pub use iban::{CreditorReference, IBAN, Iban, RF_CREDITOR_REFERENCE};
pub use luhn::LUHN;
pub use modulus97::{MODULUS_97, Modulus97};
pub use mrtd::MRTD;
pub use tid::{TID_DK, TID_RO};
pub use vat::{VAT_BE, VAT_FI, VAT_GB, VAT_LU, VatGb};
pub use vehicle_fin::VEHICLE_FIN;
pub use vessel_imo::VESSEL_IMO;
