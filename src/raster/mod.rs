//! Software rasterisation primitives the pattern styles draw with

/// Straight-alpha colours and channel quantisation
pub mod color;
/// Stroke flattening and coverage masks
pub mod stroke;
/// Drawing surface with blend modes, gradients and rectangles
pub mod surface;

pub use color::Color;
pub use surface::{BlendMode, Surface};
