//! Rendering constants and runtime configuration defaults

use crate::raster::color::Color;

// Output surface, fixed for every seed
/// Width of every generated image
pub const PATTERN_WIDTH: u32 = 400;
/// Height of every generated image
pub const PATTERN_HEIGHT: u32 = 250;

// Sine draw source
/// Multiplier applied to `sin(counter)` before taking the fractional part
pub const DRAW_SCALE: f64 = 10_000.0;

// Background gradient, top-left to bottom-right
/// Colour at the top-left corner
pub const BACKGROUND_START: Color = Color::rgb8(0x0a, 0x0a, 0x0a);
/// Colour at the bottom-right corner
pub const BACKGROUND_END: Color = Color::rgb8(0x1a, 0x1a, 0x1a);

/// Number of pattern styles the first draw chooses between
pub const STYLE_COUNT: f64 = 3.0;

// Nodes style
/// Number of radial glows
pub const NODE_COUNT: usize = 15;
/// Smallest glow radius
pub const NODE_MIN_RADIUS: f64 = 10.0;
/// Span added on top of the smallest radius
pub const NODE_RADIUS_RANGE: f64 = 30.0;
/// Span of the red channel, starting at zero
pub const NODE_RED_RANGE: f64 = 100.0;
/// Lowest green channel value
pub const NODE_GREEN_MIN: f64 = 100.0;
/// Span added on top of the lowest green value
pub const NODE_GREEN_RANGE: f64 = 100.0;
/// Opacity at the centre of each glow
pub const NODE_ALPHA: f64 = 0.4;

// Grid style
/// Smallest spacing between grid lines
pub const GRID_MIN_STEP: u32 = 20;
/// Span added on top of the smallest spacing
pub const GRID_STEP_RANGE: f64 = 20.0;
/// Grid line colour
pub const GRID_LINE_COLOR: Color = Color::rgba8(59, 130, 246, 0.1);
/// Grid line width
pub const GRID_LINE_WIDTH: f64 = 1.0;
/// Number of highlighted intersections
pub const MARKER_COUNT: usize = 10;
/// Side length of an intersection marker
pub const MARKER_SIZE: f64 = 4.0;
/// Marker fill and glow colour
pub const MARKER_COLOR: Color = Color::rgb8(0x3b, 0x82, 0xf6);
/// Shadow blur radius around each marker
pub const MARKER_GLOW_BLUR: f64 = 10.0;

// Flow style
/// Number of Bézier curves
pub const FLOW_CURVE_COUNT: usize = 20;
/// Lowest red channel value
pub const FLOW_RED_MIN: f64 = 50.0;
/// Span added on top of the lowest red value
pub const FLOW_RED_RANGE: f64 = 50.0;
/// Lowest green channel value
pub const FLOW_GREEN_MIN: f64 = 155.0;
/// Span added on top of the lowest green value
pub const FLOW_GREEN_RANGE: f64 = 100.0;
/// Upper bound of curve opacity
pub const FLOW_MAX_ALPHA: f64 = 0.2;
/// Upper bound of curve width
pub const FLOW_MAX_WIDTH: f64 = 2.0;
/// Horizontal positions of the two control points, as fractions of the width
pub const FLOW_CONTROL_X: [f64; 2] = [0.3, 0.7];

/// Stroke width in effect before any style sets one
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
/// Target length of each segment when flattening curves
pub const FLATTEN_SEGMENT_LENGTH: f64 = 2.0;

// Noise pass
/// Full width of the per-pixel noise interval, centred on zero
pub const NOISE_AMPLITUDE: f64 = 10.0;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_pattern";
/// File extension of written images
pub const OUTPUT_EXTENSION: &str = "png";
/// Stem used for the empty seed, which has no characters to keep
pub const EMPTY_SEED_STEM: &str = "empty";
/// Prefix of an encoded PNG data URI
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";
/// Default output directory for the CLI
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// Logging
/// Log filter when neither `RUST_LOG` nor `--verbose` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter enabled by `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "seedpattern=debug";
