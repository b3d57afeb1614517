//! Code generators and benchmark utilities for checkdigit-core.
//!
//! This crate provides deterministic generation of valid and corrupted
//! identifier codes for every shipped algorithm, used by the criterion
//! benchmarks and by property-based testing of `checkdigit-core`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, Sample, SizeTier, corrupt, generate_samples};
pub use generator::shapes::{Placement, PayloadShape, shape_of};
