//! Payload shapes: which characters an algorithm's payload uses, how long
//! it is, and where the check characters go.

use checkdigit_core::Algorithm;

/// Decimal digits.
pub const DIGITS: &str = "0123456789";
/// Uppercase letters.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digits and uppercase letters.
pub const ALNUM: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Characters of German vehicle and driving licence numbers.
pub const FIN_CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÜ";

/// Where the check characters sit in a complete code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Appended to the payload.
    Suffix,
    /// Between a two-letter prefix and the payload (IBAN, creditor reference).
    AfterPrefix(&'static str),
    /// No separate check characters; the last payload character is chosen
    /// so the whole code is consistent.
    Embedded,
}

/// Character set, length range and check placement of an algorithm's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadShape {
    /// Characters a payload is drawn from.
    pub charset: &'static str,
    /// Shortest generated payload.
    pub min_len: usize,
    /// Longest generated payload.
    pub max_len: usize,
    /// Check character placement.
    pub placement: Placement,
}

impl PayloadShape {
    const fn suffix(charset: &'static str, min_len: usize, max_len: usize) -> Self {
        Self {
            charset,
            min_len,
            max_len,
            placement: Placement::Suffix,
        }
    }

    /// The string `calculate` expects for `payload`.
    pub fn calculate_input(&self, payload: &str) -> String {
        match self.placement {
            Placement::Suffix | Placement::Embedded => payload.to_owned(),
            Placement::AfterPrefix(prefix) => format!("{prefix}00{payload}"),
        }
    }

    /// The complete code for `payload` and its check characters.
    pub fn assemble(&self, payload: &str, check: &str) -> String {
        match self.placement {
            Placement::Suffix | Placement::Embedded => format!("{payload}{check}"),
            Placement::AfterPrefix(prefix) => format!("{prefix}{check}{payload}"),
        }
    }
}

/// Returns the payload shape generated for `algorithm`.
pub fn shape_of(algorithm: Algorithm) -> PayloadShape {
    match algorithm {
        Algorithm::Pure11_2
        | Algorithm::Polynomial11_2
        | Algorithm::Pure97_10
        | Algorithm::Polynomial97_10
        | Algorithm::Hybrid11_10 => PayloadShape::suffix(DIGITS, 6, 30),
        Algorithm::Pure37_2
        | Algorithm::Polynomial37_2
        | Algorithm::Pure1271_36
        | Algorithm::Polynomial1271_36
        | Algorithm::Hybrid37_36
        | Algorithm::Modulus97 => PayloadShape::suffix(ALNUM, 6, 30),
        Algorithm::Pure661_26 | Algorithm::Polynomial661_26 | Algorithm::Hybrid27_26 => {
            PayloadShape::suffix(LETTERS, 6, 30)
        }
        Algorithm::Iban => PayloadShape {
            placement: Placement::AfterPrefix("DE"),
            ..PayloadShape::suffix(DIGITS, 18, 18)
        },
        Algorithm::RfCreditorReference => PayloadShape {
            placement: Placement::AfterPrefix("RF"),
            ..PayloadShape::suffix(ALNUM, 1, 21)
        },
        Algorithm::Luhn => PayloadShape::suffix(DIGITS, 8, 18),
        Algorithm::Gs1 => PayloadShape::suffix(DIGITS, 7, 17),
        Algorithm::Mrtd => PayloadShape::suffix(ALNUM, 6, 14),
        Algorithm::VesselImo => PayloadShape::suffix(DIGITS, 6, 6),
        Algorithm::VehicleFin => PayloadShape::suffix(FIN_CHARS, 9, 13),
        Algorithm::TidDk => PayloadShape {
            placement: Placement::Embedded,
            ..PayloadShape::suffix(DIGITS, 10, 10)
        },
        Algorithm::TidRo => PayloadShape::suffix(DIGITS, 12, 12),
        Algorithm::VatBe => PayloadShape::suffix(DIGITS, 8, 8),
        Algorithm::VatFi => PayloadShape::suffix(DIGITS, 7, 7),
        Algorithm::VatGb => PayloadShape::suffix(DIGITS, 7, 7),
        Algorithm::VatLu => PayloadShape::suffix(DIGITS, 6, 6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_placement() {
        let shape = shape_of(Algorithm::Iban);
        assert_eq!(shape.calculate_input("370400440532013000"), "DE00370400440532013000");
        assert_eq!(
            shape.assemble("370400440532013000", "89"),
            "DE89370400440532013000"
        );
    }

    #[test]
    fn lengths_are_ordered() {
        for algorithm in Algorithm::ALL {
            let shape = shape_of(algorithm);
            assert!(shape.min_len >= 1 && shape.min_len <= shape.max_len, "{algorithm}");
        }
    }
}
