//! Deterministic abstract background images generated from seed strings
//!
//! A seed string, typically a project or repository name, is hashed into a
//! starting value for a sine-based draw sequence. The draws pick one of three
//! styles (radial nodes, a glowing grid, or flowing curves) and lay it out
//! over a dark gradient on a 400x250 surface. An optional grain pass adds
//! texture; with it disabled, the same seed always yields the same pixels.

#![forbid(unsafe_code)]

/// Seed hashing, style selection, rendering and noise
pub mod generator;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for interpolation and blur coverage
pub mod math;
/// Software rasterisation: colours, surfaces and strokes
pub mod raster;

pub use generator::{
    GeneratorConfig, NoiseMode, Pattern, PatternGenerator, PatternStyle, generate, hash_seed,
    select_style,
};
pub use io::error::{PatternError, Result};
