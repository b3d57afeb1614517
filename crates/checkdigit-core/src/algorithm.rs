//! Lookup of check-digit routines by stable name.
//!
//! Every shipped routine has a kebab-case identifier (`pure-97-10`,
//! `hybrid-11-10`, `vat-gb`, …) usable in configuration files through serde
//! or parsed with [`str::parse`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hybrid::{HYBRID_11_10, HYBRID_27_26, HYBRID_37_36};
use crate::national::{
    GS1, IBAN, LUHN, MODULUS_97, MRTD, RF_CREDITOR_REFERENCE, TID_DK, TID_RO, VAT_BE, VAT_FI,
    VAT_GB, VAT_LU, VEHICLE_FIN, VESSEL_IMO,
};
use crate::pure::{
    POLYNOMIAL_11_2, POLYNOMIAL_37_2, POLYNOMIAL_97_10, POLYNOMIAL_661_26, POLYNOMIAL_1271_36,
    PURE_11_2, PURE_37_2, PURE_97_10, PURE_661_26, PURE_1271_36,
};
use crate::routine::CheckDigit;

/// Every check-digit algorithm shipped by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    /// ISO/IEC 7064 MOD 11-2.
    #[serde(rename = "pure-11-2")]
    Pure11_2,
    /// ISO/IEC 7064 MOD 37-2.
    #[serde(rename = "pure-37-2")]
    Pure37_2,
    /// ISO/IEC 7064 MOD 97-10.
    #[serde(rename = "pure-97-10")]
    Pure97_10,
    /// ISO/IEC 7064 MOD 661-26.
    #[serde(rename = "pure-661-26")]
    Pure661_26,
    /// ISO/IEC 7064 MOD 1271-36.
    #[serde(rename = "pure-1271-36")]
    Pure1271_36,
    /// MOD 11-2 as a weighted sum.
    #[serde(rename = "polynomial-11-2")]
    Polynomial11_2,
    /// MOD 37-2 as a weighted sum.
    #[serde(rename = "polynomial-37-2")]
    Polynomial37_2,
    /// MOD 97-10 as a weighted sum.
    #[serde(rename = "polynomial-97-10")]
    Polynomial97_10,
    /// MOD 661-26 as a weighted sum.
    #[serde(rename = "polynomial-661-26")]
    Polynomial661_26,
    /// MOD 1271-36 as a weighted sum.
    #[serde(rename = "polynomial-1271-36")]
    Polynomial1271_36,
    /// ISO/IEC 7064 MOD 11,10.
    #[serde(rename = "hybrid-11-10")]
    Hybrid11_10,
    /// ISO/IEC 7064 MOD 27,26.
    #[serde(rename = "hybrid-27-26")]
    Hybrid27_26,
    /// ISO/IEC 7064 MOD 37,36.
    #[serde(rename = "hybrid-37-36")]
    Hybrid37_36,
    /// Alphanumeric MOD 97-10 (LEI, Leitweg-ID).
    #[serde(rename = "modulus-97")]
    Modulus97,
    /// IBAN.
    #[serde(rename = "iban")]
    Iban,
    /// ISO 11649 creditor reference.
    #[serde(rename = "rf-creditor-reference")]
    RfCreditorReference,
    /// Luhn.
    #[serde(rename = "luhn")]
    Luhn,
    /// GS1 Mod-10.
    #[serde(rename = "gs1")]
    Gs1,
    /// ICAO 9303 travel documents.
    #[serde(rename = "mrtd")]
    Mrtd,
    /// IMO ship number.
    #[serde(rename = "vessel-imo")]
    VesselImo,
    /// German vehicle identification / driving licence number.
    #[serde(rename = "vehicle-fin")]
    VehicleFin,
    /// Danish CPR.
    #[serde(rename = "tid-dk")]
    TidDk,
    /// Romanian CNP.
    #[serde(rename = "tid-ro")]
    TidRo,
    /// Belgian VAT.
    #[serde(rename = "vat-be")]
    VatBe,
    /// Finnish VAT.
    #[serde(rename = "vat-fi")]
    VatFi,
    /// UK VAT.
    #[serde(rename = "vat-gb")]
    VatGb,
    /// Luxembourg VAT.
    #[serde(rename = "vat-lu")]
    VatLu,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 27] = [
        Self::Pure11_2,
        Self::Pure37_2,
        Self::Pure97_10,
        Self::Pure661_26,
        Self::Pure1271_36,
        Self::Polynomial11_2,
        Self::Polynomial37_2,
        Self::Polynomial97_10,
        Self::Polynomial661_26,
        Self::Polynomial1271_36,
        Self::Hybrid11_10,
        Self::Hybrid27_26,
        Self::Hybrid37_36,
        Self::Modulus97,
        Self::Iban,
        Self::RfCreditorReference,
        Self::Luhn,
        Self::Gs1,
        Self::Mrtd,
        Self::VesselImo,
        Self::VehicleFin,
        Self::TidDk,
        Self::TidRo,
        Self::VatBe,
        Self::VatFi,
        Self::VatGb,
        Self::VatLu,
    ];

    /// Returns the kebab-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pure11_2 => "pure-11-2",
            Self::Pure37_2 => "pure-37-2",
            Self::Pure97_10 => "pure-97-10",
            Self::Pure661_26 => "pure-661-26",
            Self::Pure1271_36 => "pure-1271-36",
            Self::Polynomial11_2 => "polynomial-11-2",
            Self::Polynomial37_2 => "polynomial-37-2",
            Self::Polynomial97_10 => "polynomial-97-10",
            Self::Polynomial661_26 => "polynomial-661-26",
            Self::Polynomial1271_36 => "polynomial-1271-36",
            Self::Hybrid11_10 => "hybrid-11-10",
            Self::Hybrid27_26 => "hybrid-27-26",
            Self::Hybrid37_36 => "hybrid-37-36",
            Self::Modulus97 => "modulus-97",
            Self::Iban => "iban",
            Self::RfCreditorReference => "rf-creditor-reference",
            Self::Luhn => "luhn",
            Self::Gs1 => "gs1",
            Self::Mrtd => "mrtd",
            Self::VesselImo => "vessel-imo",
            Self::VehicleFin => "vehicle-fin",
            Self::TidDk => "tid-dk",
            Self::TidRo => "tid-ro",
            Self::VatBe => "vat-be",
            Self::VatFi => "vat-fi",
            Self::VatGb => "vat-gb",
            Self::VatLu => "vat-lu",
        }
    }

    /// Returns the routine implementing this algorithm.
    pub fn routine(self) -> &'static dyn CheckDigit {
        match self {
            Self::Pure11_2 => &PURE_11_2,
            Self::Pure37_2 => &PURE_37_2,
            Self::Pure97_10 => &PURE_97_10,
            Self::Pure661_26 => &PURE_661_26,
            Self::Pure1271_36 => &PURE_1271_36,
            Self::Polynomial11_2 => &POLYNOMIAL_11_2,
            Self::Polynomial37_2 => &POLYNOMIAL_37_2,
            Self::Polynomial97_10 => &POLYNOMIAL_97_10,
            Self::Polynomial661_26 => &POLYNOMIAL_661_26,
            Self::Polynomial1271_36 => &POLYNOMIAL_1271_36,
            Self::Hybrid11_10 => &HYBRID_11_10,
            Self::Hybrid27_26 => &HYBRID_27_26,
            Self::Hybrid37_36 => &HYBRID_37_36,
            Self::Modulus97 => &MODULUS_97,
            Self::Iban => &IBAN,
            Self::RfCreditorReference => &RF_CREDITOR_REFERENCE,
            Self::Luhn => &LUHN,
            Self::Gs1 => &GS1,
            Self::Mrtd => &MRTD,
            Self::VesselImo => &VESSEL_IMO,
            Self::VehicleFin => &VEHICLE_FIN,
            Self::TidDk => &TID_DK,
            Self::TidRo => &TID_RO,
            Self::VatBe => &VAT_BE,
            Self::VatFi => &VAT_FI,
            Self::VatGb => &VAT_GB,
            Self::VatLu => &VAT_LU,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Algorithm::from_str`] for a name no algorithm carries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown check digit algorithm {0:?}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}
