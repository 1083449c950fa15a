//! Grain applied after the seeded drawing
//!
//! The noise pass is the only part of generation not driven by the seed,
//! so it is selectable: off for reproducible output, seeded for reproducible
//! grain, or drawn from the thread RNG for fresh grain on every call.

use crate::io::configuration::NOISE_AMPLITUDE;
use crate::raster::color::saturate_channel;
use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the per-pixel grain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoiseMode {
    /// Skip the noise pass; output depends on the seed alone
    Disabled,
    /// Fresh grain on every call
    #[default]
    Entropy,
    /// Grain from an RNG seeded with the given value
    Seeded(u64),
}

impl NoiseMode {
    /// Whether this mode changes any pixel
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Apply this mode's noise to `image`
    pub fn apply(self, image: &mut RgbaImage) {
        match self {
            Self::Disabled => {}
            Self::Entropy => apply_noise(image, &mut rand::rng()),
            Self::Seeded(seed) => apply_noise(image, &mut StdRng::seed_from_u64(seed)),
        }
    }
}

/// Add one delta in `[-5, 5)` per pixel to its red, green and blue channels
///
/// The three colour channels of a pixel share the delta, results saturate at
/// the byte range, and alpha is left untouched.
pub fn apply_noise<R: Rng + ?Sized>(image: &mut RgbaImage, rng: &mut R) {
    for pixel in image.pixels_mut() {
        let delta = (rng.random::<f64>() - 0.5) * NOISE_AMPLITUDE;
        let [r, g, b, a] = pixel.0;
        pixel.0 = [
            saturate_channel(f64::from(r) + delta),
            saturate_channel(f64::from(g) + delta),
            saturate_channel(f64::from(b) + delta),
            a,
        ];
    }
}
