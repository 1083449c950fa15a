//! Seed hashing and the sine-based draw source
//!
//! Each draw is `fract(sin(counter) * 10000)`, with a counter that starts at
//! the seed hash and advances by one per draw. The formula is part of the
//! output format: any change to it changes every image.

use crate::io::configuration::DRAW_SCALE;

/// Rolling 31-multiplier hash of `seed` with 32-bit signed wraparound
///
/// Consumes UTF-16 code units, so characters outside the Basic Multilingual
/// Plane contribute their two surrogates. The empty string hashes to 0.
pub fn hash_seed(seed: &str) -> i32 {
    seed.encode_utf16().fold(0_i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// Deterministic sequence of values in `[0, 1)` derived from a seed hash
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SineRandom {
    counter: i64,
}

impl SineRandom {
    /// Start the sequence at `hash`
    pub const fn new(hash: i32) -> Self {
        Self {
            counter: hash as i64,
        }
    }

    /// Start the sequence at the hash of `seed`
    pub fn from_seed(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    /// Counter value the next draw will use
    pub const fn counter(&self) -> i64 {
        self.counter
    }

    /// Produce the next value in `[0, 1)` and advance the counter
    pub fn next_draw(&mut self) -> f64 {
        let x = (self.counter as f64).sin() * DRAW_SCALE;
        self.counter += 1;
        x - x.floor()
    }

    /// `floor(draw * scale)` as an integer index
    pub fn next_index(&mut self, scale: f64) -> usize {
        (self.next_draw() * scale).floor() as usize
    }
}

impl Iterator for SineRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_draw())
    }
}
