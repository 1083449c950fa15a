//! The three pattern styles and their renderers
//!
//! Each renderer consumes draws from the shared [`SineRandom`] in a fixed
//! order. Changing the order or the number of draws changes every image, so
//! the sequences below are part of the output format.

use crate::generator::seed::{SineRandom, hash_seed};
use crate::io::configuration::{
    DEFAULT_LINE_WIDTH, FLOW_CONTROL_X, FLOW_CURVE_COUNT, FLOW_GREEN_MIN, FLOW_GREEN_RANGE,
    FLOW_MAX_ALPHA, FLOW_MAX_WIDTH, FLOW_RED_MIN, FLOW_RED_RANGE, GRID_LINE_COLOR,
    GRID_LINE_WIDTH, GRID_MIN_STEP, GRID_STEP_RANGE, MARKER_COLOR, MARKER_COUNT,
    MARKER_GLOW_BLUR, MARKER_SIZE, NODE_ALPHA, NODE_COUNT, NODE_GREEN_MIN, NODE_GREEN_RANGE,
    NODE_MIN_RADIUS, NODE_RADIUS_RANGE, NODE_RED_RANGE, STYLE_COUNT,
};
use crate::raster::color::Color;
use crate::raster::stroke::{stroke_cubic, stroke_line};
use crate::raster::surface::Surface;
use kurbo::{CubicBez, Point, Rect};
use std::fmt;

/// Rendering algorithm chosen by the first draw of a seed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternStyle {
    /// Soft radial glows scattered over the canvas
    Nodes,
    /// Translucent grid with glowing intersections
    Grid,
    /// Translucent Bézier curves spanning the canvas width
    Flow,
}

impl PatternStyle {
    /// All styles in selection order
    pub const ALL: [Self; 3] = [Self::Nodes, Self::Grid, Self::Flow];

    /// Map a selector index to a style; anything past 1 is flow
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Nodes,
            1 => Self::Grid,
            _ => Self::Flow,
        }
    }

    /// Selector index of this style
    pub const fn index(self) -> usize {
        match self {
            Self::Nodes => 0,
            Self::Grid => 1,
            Self::Flow => 2,
        }
    }

    /// Consume one draw and pick the style it selects
    pub fn select(random: &mut SineRandom) -> Self {
        Self::from_index(random.next_index(STYLE_COUNT))
    }

    /// Draw this style onto `surface`, consuming draws from `random`
    pub fn render(self, surface: &mut Surface, random: &mut SineRandom) {
        match self {
            Self::Nodes => render_nodes(surface, random),
            Self::Grid => render_grid(surface, random),
            Self::Flow => render_flow(surface, random),
        }
    }
}

impl fmt::Display for PatternStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nodes => "nodes",
            Self::Grid => "grid",
            Self::Flow => "flow",
        };
        f.write_str(name)
    }
}

/// Style a seed string renders with
pub fn select_style(seed: &str) -> PatternStyle {
    PatternStyle::select(&mut SineRandom::new(hash_seed(seed)))
}

/// Draw `NODE_COUNT` radial glows
///
/// Draws per node: x, y, radius, red, green.
pub fn render_nodes(surface: &mut Surface, random: &mut SineRandom) {
    let width = f64::from(surface.width());
    let height = f64::from(surface.height());

    for _ in 0..NODE_COUNT {
        let x = random.next_draw() * width;
        let y = random.next_draw() * height;
        let radius = unfused(random.next_draw(), NODE_RADIUS_RANGE, NODE_MIN_RADIUS);
        let red = channel_draw(random, 0.0, NODE_RED_RANGE);
        let green = channel_draw(random, NODE_GREEN_MIN, NODE_GREEN_RANGE);

        let inner = Color::rgba8(red, green, 255, NODE_ALPHA);
        surface.fill_radial_gradient(Point::new(x, y), radius, inner, Color::TRANSPARENT);
    }
}

/// Draw the grid lines, then `MARKER_COUNT` glowing intersections
///
/// Draws: one for the step, then x and y for each marker.
pub fn render_grid(surface: &mut Surface, random: &mut SineRandom) {
    let (width_px, height_px) = (surface.width(), surface.height());
    let width = f64::from(width_px);
    let height = f64::from(height_px);

    let step = GRID_MIN_STEP + (random.next_draw() * GRID_STEP_RANGE).floor() as u32;

    for x in (0..width_px).step_by(step as usize) {
        let x = f64::from(x);
        let mask = stroke_line(
            Point::new(x, 0.0),
            Point::new(x, height),
            GRID_LINE_WIDTH,
            width_px,
            height_px,
        );
        surface.fill_mask(&mask, GRID_LINE_COLOR);
    }

    for y in (0..height_px).step_by(step as usize) {
        let y = f64::from(y);
        let mask = stroke_line(
            Point::new(0.0, y),
            Point::new(width, y),
            GRID_LINE_WIDTH,
            width_px,
            height_px,
        );
        surface.fill_mask(&mask, GRID_LINE_COLOR);
    }

    let step = f64::from(step);
    let half = MARKER_SIZE / 2.0;
    for _ in 0..MARKER_COUNT {
        let x = (random.next_draw() * (width / step)).floor() * step;
        let y = (random.next_draw() * (height / step)).floor() * step;

        let marker = Rect::new(x - half, y - half, x + half, y + half);
        surface.glow_rect(marker, MARKER_COLOR, MARKER_GLOW_BLUR);
        surface.fill_rect(marker, MARKER_COLOR);
    }
}

/// Draw `FLOW_CURVE_COUNT` cubic curves from the left edge to the right edge
///
/// Draws per curve: red, green, alpha, width, then the four y coordinates.
/// A zero width leaves the previous width in effect.
pub fn render_flow(surface: &mut Surface, random: &mut SineRandom) {
    let (width_px, height_px) = (surface.width(), surface.height());
    let width = f64::from(width_px);
    let height = f64::from(height_px);
    let [first_x, second_x] = FLOW_CONTROL_X;

    let mut line_width = DEFAULT_LINE_WIDTH;
    for _ in 0..FLOW_CURVE_COUNT {
        let red = channel_draw(random, FLOW_RED_MIN, FLOW_RED_RANGE);
        let green = channel_draw(random, FLOW_GREEN_MIN, FLOW_GREEN_RANGE);
        let alpha = random.next_draw() * FLOW_MAX_ALPHA;
        let drawn_width = random.next_draw() * FLOW_MAX_WIDTH;
        if drawn_width > 0.0 {
            line_width = drawn_width;
        }

        let start = Point::new(0.0, random.next_draw() * height);
        let first = Point::new(width * first_x, random.next_draw() * height);
        let second = Point::new(width * second_x, random.next_draw() * height);
        let end = Point::new(width, random.next_draw() * height);

        let mask = stroke_cubic(
            CubicBez::new(start, first, second, end),
            line_width,
            width_px,
            height_px,
        );
        surface.fill_mask(&mask, Color::rgba8(red, green, 255, alpha));
    }
}

/// `floor(draw * range + min)` as an 8-bit channel
fn channel_draw(random: &mut SineRandom, min: f64, range: f64) -> u8 {
    unfused(random.next_draw(), range, min).floor().clamp(0.0, 255.0) as u8
}

// A fused multiply-add rounds once and can land on the other side of a floor
#[allow(clippy::suboptimal_flops)]
const fn unfused(draw: f64, range: f64, min: f64) -> f64 {
    draw * range + min
}
