//! Seeded generative backgrounds
//!
//! A seed string is hashed, the hash drives a sine-based draw sequence, and
//! the draws choose and lay out one of three styles over a dark gradient.

/// Optional per-pixel grain
pub mod noise;
/// Full generation pipeline and its output
pub mod pattern;
/// Seed hashing and the deterministic draw source
pub mod seed;
/// Style selection and the three renderers
pub mod style;

pub use noise::NoiseMode;
pub use pattern::{GeneratorConfig, Pattern, PatternGenerator, generate};
pub use seed::{SineRandom, hash_seed};
pub use style::{PatternStyle, select_style};
