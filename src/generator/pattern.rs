//! End-to-end generation: seed string in, encoded background image out

use crate::generator::noise::NoiseMode;
use crate::generator::seed::{SineRandom, hash_seed};
use crate::generator::style::PatternStyle;
use crate::io::configuration::{BACKGROUND_END, BACKGROUND_START, PATTERN_HEIGHT, PATTERN_WIDTH};
use crate::io::error::Result;
use crate::io::image::{encode_data_uri, encode_png, save_png};
use crate::raster::surface::{BlendMode, Surface};
use image::RgbaImage;
use kurbo::Point;
use std::path::Path;

/// Options that do not affect the seeded part of the image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// How the final grain pass is sourced
    pub noise: NoiseMode,
}

/// A rendered pattern and the facts that determined it
#[derive(Clone, Debug)]
pub struct Pattern {
    hash: i32,
    style: PatternStyle,
    image: RgbaImage,
}

impl Pattern {
    /// Hash of the seed string
    pub const fn hash(&self) -> i32 {
        self.hash
    }

    /// Style the first draw selected
    pub const fn style(&self) -> PatternStyle {
        self.style
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take ownership of the rendered pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode as PNG bytes
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails
    pub fn to_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.image)
    }

    /// Encode as a `data:image/png;base64,` URI
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails
    pub fn to_data_uri(&self) -> Result<String> {
        encode_data_uri(&self.image)
    }

    /// Write the pattern to `path` as PNG, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or the file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        save_png(&self.image, path)
    }
}

/// Turns seed strings into decorative background images
///
/// Holds no per-call state, so one generator can serve any number of threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatternGenerator {
    config: GeneratorConfig,
}

impl PatternGenerator {
    /// Create a generator with the given configuration
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Replace the noise mode
    #[must_use]
    pub const fn with_noise(mut self, noise: NoiseMode) -> Self {
        self.config.noise = noise;
        self
    }

    /// Active configuration
    pub const fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Render `seed` to pixels
    ///
    /// Background gradient, style selection from the first draw, the style
    /// drawn in screen mode, then the configured noise pass.
    #[tracing::instrument(level = "debug", skip(self), fields(style = tracing::field::Empty))]
    pub fn render(&self, seed: &str) -> Pattern {
        let hash = hash_seed(seed);
        let mut random = SineRandom::new(hash);
        let mut surface = Surface::new(PATTERN_WIDTH, PATTERN_HEIGHT);

        surface.fill_linear_gradient(
            Point::ZERO,
            Point::new(f64::from(PATTERN_WIDTH), f64::from(PATTERN_HEIGHT)),
            BACKGROUND_START,
            BACKGROUND_END,
        );

        let style = PatternStyle::select(&mut random);
        tracing::Span::current().record("style", tracing::field::display(style));
        tracing::debug!(hash, %style, "selected pattern style");

        surface.set_blend_mode(BlendMode::Screen);
        style.render(&mut surface, &mut random);

        let mut image = surface.into_image();
        self.config.noise.apply(&mut image);

        Pattern { hash, style, image }
    }

    /// Render `seed` and encode it as a PNG data URI
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails
    pub fn generate(&self, seed: &str) -> Result<String> {
        self.render(seed).to_data_uri()
    }
}

/// Render `seed` with the default configuration and return a PNG data URI
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn generate(seed: &str) -> Result<String> {
    PatternGenerator::default().generate(seed)
}
