//! Stroke rasterisation into coverage masks
//!
//! A stroke is flattened to a polyline, and each pixel's coverage is derived
//! from its distance to the nearest segment. Taking the maximum over segments
//! means a path is painted once even where its segments overlap.

use crate::io::configuration::FLATTEN_SEGMENT_LENGTH;
use crate::raster::surface::{clip_span, pixel_center};
use kurbo::{CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveNearest, Point, Rect};
use ndarray::Array2;

const NEAREST_ACCURACY: f64 = 1e-6;
const ARCLEN_ACCURACY: f64 = 1e-3;

/// Per-pixel coverage in `[0, 1]`, indexed `[row, column]`
#[derive(Clone, Debug)]
pub struct CoverageMask {
    values: Array2<f32>,
}

impl CoverageMask {
    /// Empty mask covering a `width` x `height` surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            values: Array2::zeros((height as usize, width as usize)),
        }
    }

    /// Mask width in pixels
    pub fn width(&self) -> u32 {
        self.values.ncols() as u32
    }

    /// Mask height in pixels
    pub fn height(&self) -> u32 {
        self.values.nrows() as u32
    }

    /// Coverage at `(x, y)`; zero outside the mask
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(0.0)
    }

    /// Raw coverage values
    pub const fn values(&self) -> &Array2<f32> {
        &self.values
    }

    /// Keep the larger of the existing and the new coverage at `(x, y)`
    pub fn accumulate_max(&mut self, x: u32, y: u32, coverage: f32) {
        if let Some(cell) = self.values.get_mut([y as usize, x as usize]) {
            *cell = cell.max(coverage);
        }
    }

    /// Whether any pixel is touched
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|&v| v <= 0.0)
    }
}

/// Coverage of a pixel whose centre is `distance` away from a stroke of `width`
///
/// Strokes thinner than a pixel are drawn one pixel wide at proportionally
/// reduced opacity, which is how canvas hairlines read on screen.
pub fn stroke_coverage(distance: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }

    let half = width.max(1.0) / 2.0;
    (half + 0.5 - distance).clamp(0.0, 1.0) * width.min(1.0)
}

/// Flatten a cubic Bézier into a polyline of roughly even segments
pub fn flatten_cubic(curve: CubicBez) -> Vec<Point> {
    let length = curve.arclen(ARCLEN_ACCURACY);
    let segments = (length / FLATTEN_SEGMENT_LENGTH).ceil().max(1.0) as usize;

    (0..=segments)
        .map(|i| curve.eval(i as f64 / segments as f64))
        .collect()
}

/// Rasterise a stroked polyline into a mask for a `width` x `height` surface
pub fn stroke_polyline(
    points: &[Point],
    stroke_width: f64,
    width: u32,
    height: u32,
) -> CoverageMask {
    let mut mask = CoverageMask::new(width, height);
    if stroke_width <= 0.0 {
        return mask;
    }

    let reach = stroke_width.max(1.0) / 2.0 + 1.0;
    for pair in points.windows(2) {
        let [start, end] = pair else {
            continue;
        };
        let segment = Line::new(*start, *end);
        let bounds = Rect::from_points(*start, *end).inflate(reach, reach);

        let (x0, x1) = clip_span(bounds.x0, bounds.x1, width);
        let (y0, y1) = clip_span(bounds.y0, bounds.y1, height);
        for y in y0..y1 {
            for x in x0..x1 {
                let distance = segment
                    .nearest(pixel_center(x, y), NEAREST_ACCURACY)
                    .distance_sq
                    .sqrt();
                let coverage = stroke_coverage(distance, stroke_width);
                if coverage > 0.0 {
                    mask.accumulate_max(x, y, coverage as f32);
                }
            }
        }
    }

    mask
}

/// Rasterise a straight line stroke
pub fn stroke_line(
    start: Point,
    end: Point,
    stroke_width: f64,
    width: u32,
    height: u32,
) -> CoverageMask {
    stroke_polyline(&[start, end], stroke_width, width, height)
}

/// Rasterise a stroked cubic Bézier
pub fn stroke_cubic(curve: CubicBez, stroke_width: f64, width: u32, height: u32) -> CoverageMask {
    stroke_polyline(&flatten_cubic(curve), stroke_width, width, height)
}
