//! Linear interpolation helpers shared by gradients and colour blending

use kurbo::Point;

/// Interpolate between `a` and `b` by `t`
///
/// `t` is not clamped; callers that need a bounded result clamp it first.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

/// Clamp a parameter into the unit interval, mapping NaN to zero
pub const fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Position of `point` along the axis `start -> end`, clamped to `[0, 1]`
///
/// This is the parameter a two-stop linear gradient uses: points are
/// projected perpendicular onto the axis, and anything before `start` or past
/// `end` takes the colour of the nearest stop. A degenerate axis yields 0.
pub fn gradient_parameter(point: Point, start: Point, end: Point) -> f64 {
    let axis = end - start;
    let length_sq = axis.hypot2();
    if length_sq <= f64::EPSILON {
        return 0.0;
    }

    clamp_unit((point - start).dot(axis) / length_sq)
}

/// Position of `point` between the centre and the rim of a radial gradient
///
/// Returns the distance from `center` divided by `radius`, clamped to `[0, 1]`.
pub fn radial_parameter(point: Point, center: Point, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 1.0;
    }

    clamp_unit(point.distance(center) / radius)
}
