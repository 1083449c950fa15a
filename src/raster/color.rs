//! Straight-alpha RGBA colours with unit-range channels

use crate::math::interpolation::{clamp_unit, lerp};
use num_traits::ToPrimitive;

/// An RGBA colour with channels in `[0, 1]` and non-premultiplied alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
    /// Opacity
    pub a: f64,
}

impl Color {
    /// Fully transparent black, the colour canvas gradients call `transparent`
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque colour from 8-bit channels
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 1.0)
    }

    /// Colour from 8-bit channels and a fractional alpha, like CSS `rgba()`
    pub const fn rgba8(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: alpha,
        }
    }

    /// Same colour with a different alpha
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { a: alpha, ..self }
    }

    /// Straight interpolation of every channel, alpha included
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = clamp_unit(t);
        Self {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    /// Interpolation in premultiplied space
    ///
    /// Fading towards [`Color::TRANSPARENT`] keeps the hue of `self` and only
    /// lowers its opacity, instead of darkening through black.
    #[must_use]
    pub fn lerp_premultiplied(self, other: Self, t: f64) -> Self {
        let t = clamp_unit(t);
        let a = lerp(self.a, other.a, t);
        if a <= 0.0 {
            return Self::TRANSPARENT;
        }

        let channel = |c0: f64, c1: f64| lerp(c0 * self.a, c1 * other.a, t) / a;
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a,
        }
    }

    /// Read an 8-bit RGBA pixel
    pub fn from_pixel(pixel: [u8; 4]) -> Self {
        let [r, g, b, a] = pixel;
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    /// Quantise to an 8-bit RGBA pixel, rounding to nearest
    pub fn to_pixel(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

/// Convert a unit-range channel to 8 bits, saturating out-of-range input
pub fn quantize(channel: f64) -> u8 {
    (clamp_unit(channel) * 255.0).round().to_u8().unwrap_or(u8::MAX)
}

/// Convert an 8-bit-range value to a channel, rounding half to even and saturating
///
/// This matches how a clamped byte array stores a fractional write.
pub fn saturate_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    num_traits::clamp(value.round_ties_even(), 0.0, 255.0)
        .to_u8()
        .unwrap_or(u8::MAX)
}
