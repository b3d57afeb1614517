//! Deterministic code generator.
//!
//! Produces valid codes for any [`Algorithm`] from a seeded [`StdRng`], plus
//! single-substitution corruptions of them, for benchmarking and testing.

pub mod shapes;

use checkdigit_core::{Algorithm, CheckDigit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shapes::{PayloadShape, Placement, shape_of};

/// Upper bound on random payloads drawn per requested sample. Some payloads
/// have no legal check value (zero sums, forbidden values) and are skipped.
const MAX_ATTEMPTS_PER_SAMPLE: usize = 20;

/// Configuration for the code generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of codes to generate.
    pub count: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 codes
    Small,
    /// 1 000 codes
    Medium,
    /// 10 000 codes
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let count = match self {
            SizeTier::Small => 100,
            SizeTier::Medium => 1_000,
            SizeTier::Large => 10_000,
        };
        GeneratorConfig { seed, count }
    }
}

/// One generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Payload characters (for embedded schemes, the whole code).
    pub payload: String,
    /// Check characters; empty for embedded schemes.
    pub check: String,
    /// What `calculate` was given.
    pub input: String,
    /// The complete, valid code.
    pub code: String,
}

/// Generates up to `config.count` valid codes for `algorithm`.
///
/// The same configuration always yields the same codes.
pub fn generate_samples(algorithm: Algorithm, config: &GeneratorConfig) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let shape = shape_of(algorithm);
    let routine = algorithm.routine();
    let mut samples = Vec::with_capacity(config.count);
    let mut attempts = 0;
    while samples.len() < config.count && attempts < config.count * MAX_ATTEMPTS_PER_SAMPLE {
        attempts += 1;
        if let Some(sample) = complete(routine, &shape, random_payload(&mut rng, &shape)) {
            samples.push(sample);
        }
    }
    samples
}

fn random_payload(rng: &mut StdRng, shape: &PayloadShape) -> String {
    let chars: Vec<char> = shape.charset.chars().collect();
    let mut len = rng.gen_range(shape.min_len..=shape.max_len);
    if shape.placement == Placement::Embedded {
        len -= 1;
    }
    (0..len)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

fn complete(routine: &dyn CheckDigit, shape: &PayloadShape, payload: String) -> Option<Sample> {
    match shape.placement {
        Placement::Embedded => shape
            .charset
            .chars()
            .map(|last| format!("{payload}{last}"))
            .find(|code| routine.is_valid(code))
            .map(|code| Sample {
                payload: code.clone(),
                check: String::new(),
                input: code.clone(),
                code,
            }),
        Placement::Suffix | Placement::AfterPrefix(_) => {
            let input = shape.calculate_input(&payload);
            let check = routine.calculate(&input).ok()?;
            let code = shape.assemble(&payload, &check);
            Some(Sample {
                payload,
                check,
                input,
                code,
            })
        }
    }
}

/// Replaces one payload character of `sample` with a different character
/// from the same charset and returns the resulting code.
pub fn corrupt(rng: &mut StdRng, algorithm: Algorithm, sample: &Sample) -> String {
    let shape = shape_of(algorithm);
    let chars: Vec<char> = shape.charset.chars().collect();
    let mut payload: Vec<char> = sample.payload.chars().collect();
    if payload.is_empty() || chars.len() < 2 {
        return sample.code.clone();
    }
    let at = rng.gen_range(0..payload.len());
    let original = payload[at];
    let mut replacement = original;
    while replacement == original {
        replacement = chars[rng.gen_range(0..chars.len())];
    }
    payload[at] = replacement;
    let payload: String = payload.into_iter().collect();
    shape.assemble(&payload, &sample.check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_codes() {
        let config = SizeTier::Small.config(42);
        assert_eq!(
            generate_samples(Algorithm::Luhn, &config),
            generate_samples(Algorithm::Luhn, &config)
        );
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_samples(Algorithm::Pure97_10, &SizeTier::Small.config(1));
        let b = generate_samples(Algorithm::Pure97_10, &SizeTier::Small.config(2));
        assert_ne!(a, b);
    }

    #[test]
    fn corruption_changes_exactly_one_character() {
        let mut rng = StdRng::seed_from_u64(7);
        for sample in generate_samples(Algorithm::Mrtd, &SizeTier::Small.config(7)) {
            let corrupted = corrupt(&mut rng, Algorithm::Mrtd, &sample);
            let differences = corrupted
                .chars()
                .zip(sample.code.chars())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differences, 1, "{} vs {corrupted}", sample.code);
        }
    }
}
