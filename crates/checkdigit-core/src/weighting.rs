//! Positional weighting strategies.
//!
//! A [`Weighting`] turns a character value and its [`Position`] into the term
//! that is added to the checksum. Most strategies multiply the value by a
//! weight; Luhn instead doubles every other digit and folds the result.

use crate::alphabet::Position;

/// Powers of 2 modulo 11, indexed by right position (index 0 is the check slot).
pub const POWERS_OF_2_MOD_11: [u32; 15] = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6, 1, 2, 4, 8, 5];

/// Powers of 2 modulo 37.
pub const POWERS_OF_2_MOD_37: [u32; 15] =
    [1, 2, 4, 8, 16, 32, 27, 17, 34, 31, 25, 13, 26, 15, 30];

/// Powers of 10 modulo 97.
pub const POWERS_OF_10_MOD_97: [u32; 15] = [1, 10, 3, 30, 9, 90, 27, 76, 81, 34, 49, 5, 50, 15, 53];

/// Powers of 26 modulo 661.
pub const POWERS_OF_26_MOD_661: [u32; 15] = [
    1, 26, 15, 390, 225, 562, 70, 498, 389, 199, 547, 341, 273, 488, 129,
];

/// Powers of 36 modulo 1271.
pub const POWERS_OF_36_MOD_1271: [u32; 15] = [
    1, 36, 25, 900, 625, 893, 373, 718, 428, 156, 532, 87, 590, 904, 769,
];

/// How a character's position determines its contribution to the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Weight `radix^right mod M`, read from `table` while the position is
    /// inside it and computed by modular exponentiation beyond.
    Powers {
        /// Multiplicative step.
        radix: u32,
        /// Precomputed `radix^k mod M` for `k = 0, 1, …`.
        table: &'static [u32],
    },
    /// Weight `radix^(right - 1) mod M`: the payload read as one base-`radix`
    /// number.
    PlaceValue {
        /// Base of the number.
        radix: u32,
    },
    /// Weight `right + 1`, so the rightmost payload character weighs 2.
    Ascending,
    /// Weights repeat from the left: position `left` uses
    /// `table[(left - 1) % table.len()]`.
    CycleLeft(&'static [u32]),
    /// Weights run from the right: the first `lead.len()` positions use
    /// `lead`, the rest repeat `cycle`.
    CycleRight {
        /// Non-repeating weights for the rightmost positions.
        lead: &'static [u32],
        /// Repeating weights for all further positions.
        cycle: &'static [u32],
    },
    /// Luhn: digits at odd right positions are doubled and their digits
    /// summed, the others count as is.
    Luhn,
}

impl Weighting {
    /// Returns the unreduced term contributed by `value` at `position`.
    ///
    /// The caller reduces the sum modulo `modulus`; a zero term is how the
    /// degenerate all-zero payload is recognised.
    pub fn term(&self, value: u32, position: Position, modulus: u32) -> u64 {
        let value = u64::from(value);
        match self {
            Self::Luhn => {
                if position.right % 2 == 1 {
                    let doubled = value * 2;
                    if doubled > 9 { doubled - 9 } else { doubled }
                } else {
                    value
                }
            }
            Self::Powers { .. }
            | Self::PlaceValue { .. }
            | Self::Ascending
            | Self::CycleLeft(_)
            | Self::CycleRight { .. } => value * u64::from(self.weight(position, modulus)),
        }
    }

    /// Returns the multiplier for `position`. Luhn has no multiplier and
    /// reports 1.
    pub fn weight(&self, position: Position, modulus: u32) -> u32 {
        match self {
            Self::Powers { radix, table } => table
                .get(position.right)
                .copied()
                .unwrap_or_else(|| mod_pow(*radix, position.right as u64, modulus)),
            Self::PlaceValue { radix } => {
                mod_pow(*radix, position.right.saturating_sub(1) as u64, modulus)
            }
            Self::Ascending => position.right as u32 + 1,
            Self::CycleLeft(table) => cycled(table, position.left.saturating_sub(1)),
            Self::CycleRight { lead, cycle } => {
                let index = position.right.saturating_sub(1);
                lead.get(index)
                    .copied()
                    .unwrap_or_else(|| cycled(cycle, index - lead.len()))
            }
            Self::Luhn => 1,
        }
    }
}

fn cycled(table: &[u32], index: usize) -> u32 {
    if table.is_empty() {
        return 0;
    }
    table[index % table.len()]
}

/// Computes `base^exp mod modulus` by square-and-multiply in 64-bit
/// arithmetic. Operands stay below `modulus`, so no intermediate overflows
/// for any 32-bit modulus.
pub fn mod_pow(base: u32, mut exp: u64, modulus: u32) -> u32 {
    if modulus <= 1 {
        return 0;
    }
    let m = u64::from(modulus);
    let mut base = u64::from(base) % m;
    let mut result = 1u64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_right(right: usize) -> Position {
        Position { left: 1, right }
    }

    #[test]
    fn tables_match_modular_exponentiation() {
        let tables: [(u32, u32, &[u32]); 5] = [
            (2, 11, &POWERS_OF_2_MOD_11),
            (2, 37, &POWERS_OF_2_MOD_37),
            (10, 97, &POWERS_OF_10_MOD_97),
            (26, 661, &POWERS_OF_26_MOD_661),
            (36, 1271, &POWERS_OF_36_MOD_1271),
        ];
        for (radix, modulus, table) in tables {
            for (k, &w) in table.iter().enumerate() {
                assert_eq!(mod_pow(radix, k as u64, modulus), w, "{radix}^{k} mod {modulus}");
            }
        }
    }

    #[test]
    fn powers_fall_back_beyond_table() {
        let w = Weighting::Powers {
            radix: 10,
            table: &POWERS_OF_10_MOD_97,
        };
        assert_eq!(w.weight(at_right(14), 97), 53);
        assert_eq!(w.weight(at_right(15), 97), mod_pow(10, 15, 97));
        assert_eq!(w.weight(at_right(40), 97), mod_pow(10, 40, 97));
    }

    #[test]
    fn mod_pow_handles_large_exponents() {
        assert_eq!(mod_pow(36, 0, 1271), 1);
        assert_eq!(mod_pow(10, 96, 97), 1);
        assert_eq!(mod_pow(2, 10, 11), 1);
        assert_eq!(mod_pow(26, 1_000_000, 661), mod_pow(26, 1_000_000 % 660, 661));
        assert_eq!(mod_pow(5, 3, 1), 0);
    }

    #[test]
    fn luhn_doubles_odd_right_positions() {
        assert_eq!(Weighting::Luhn.term(7, at_right(1), 10), 5);
        assert_eq!(Weighting::Luhn.term(4, at_right(1), 10), 8);
        assert_eq!(Weighting::Luhn.term(7, at_right(2), 10), 7);
    }

    #[test]
    fn cycle_right_uses_lead_then_cycle() {
        let w = Weighting::CycleRight {
            lead: &[1],
            cycle: &[2, 3, 4, 5, 6, 7],
        };
        let weights: Vec<u32> = (1..=10).map(|r| w.weight(at_right(r), 11)).collect();
        assert_eq!(weights, [1, 2, 3, 4, 5, 6, 7, 2, 3, 4]);
    }

    #[test]
    fn cycle_left_repeats_from_first_character() {
        let w = Weighting::CycleLeft(&[7, 3, 1]);
        let weights: Vec<u32> = (1..=5)
            .map(|l| w.weight(Position { left: l, right: 1 }, 10))
            .collect();
        assert_eq!(weights, [7, 3, 1, 7, 3]);
    }

    #[test]
    fn place_value_and_ascending() {
        let place = Weighting::PlaceValue { radix: 10 };
        assert_eq!(place.weight(at_right(1), 97), 1);
        assert_eq!(place.weight(at_right(3), 97), 3);
        assert_eq!(Weighting::Ascending.weight(at_right(1), 97), 2);
        assert_eq!(Weighting::Ascending.weight(at_right(7), 97), 8);
    }
}
