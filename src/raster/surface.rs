//! Fixed-size RGBA drawing surface with canvas-style compositing
//!
//! Every primitive computes a per-pixel coverage and a source colour, then
//! hands both to [`Surface::composite`], which applies the current
//! [`BlendMode`] using the separable blend formula with straight alpha.

use crate::math::interpolation::{gradient_parameter, radial_parameter};
use crate::math::probability::{blur_sigma, gaussian_box_coverage};
use crate::raster::color::Color;
use crate::raster::stroke::CoverageMask;
use image::RgbaImage;
use kurbo::{Point, Rect};

/// How drawn colours combine with what is already on the surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Ordinary alpha compositing; the source occludes the backdrop
    #[default]
    SourceOver,
    /// Lightening blend: `1 - (1 - backdrop) * (1 - source)` per channel
    Screen,
}

impl BlendMode {
    /// Blend a single backdrop channel with a source channel
    pub fn blend_channel(self, backdrop: f64, source: f64) -> f64 {
        match self {
            Self::SourceOver => source,
            Self::Screen => (1.0 - backdrop).mul_add(-(1.0 - source), 1.0),
        }
    }
}

/// An owned raster the generator draws onto
#[derive(Clone, Debug)]
pub struct Surface {
    image: RgbaImage,
    blend_mode: BlendMode,
}

impl Surface {
    /// Create a transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            blend_mode: BlendMode::SourceOver,
        }
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Blend mode used by subsequent drawing calls
    pub const fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Change the blend mode for subsequent drawing calls
    pub const fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    /// Pixel at `(x, y)`, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the surface and return its pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Composite `color` at `(x, y)` with the given fractional coverage
    ///
    /// Out-of-bounds coordinates and zero coverage are ignored.
    pub fn composite(&mut self, x: u32, y: u32, color: Color, coverage: f64) {
        let source_alpha = color.a * coverage.clamp(0.0, 1.0);
        if source_alpha <= 0.0 {
            return;
        }

        let mode = self.blend_mode;
        let Some(pixel) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };

        let backdrop = Color::from_pixel(pixel.0);
        let out_alpha = backdrop.a.mul_add(1.0 - source_alpha, source_alpha);
        if out_alpha <= 0.0 {
            return;
        }

        let channel = |cb: f64, cs: f64| {
            let mixed = (1.0 - backdrop.a).mul_add(cs, backdrop.a * mode.blend_channel(cb, cs));
            source_alpha.mul_add(mixed, backdrop.a * cb * (1.0 - source_alpha)) / out_alpha
        };

        pixel.0 = Color {
            r: channel(backdrop.r, color.r),
            g: channel(backdrop.g, color.g),
            b: channel(backdrop.b, color.b),
            a: out_alpha,
        }
        .to_pixel();
    }

    /// Fill the whole surface with a two-stop linear gradient along `start -> end`
    pub fn fill_linear_gradient(&mut self, start: Point, end: Point, from: Color, to: Color) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let t = gradient_parameter(pixel_center(x, y), start, end);
                self.composite(x, y, from.lerp(to, t), 1.0);
            }
        }
    }

    /// Fill a disc with a radial gradient from `inner` at the centre to `outer` at the rim
    pub fn fill_radial_gradient(&mut self, center: Point, radius: f64, inner: Color, outer: Color) {
        if radius <= 0.0 {
            return;
        }

        let diameter = radius * 2.0;
        let bounds = Rect::from_center_size(center, (diameter, diameter)).inflate(1.0, 1.0);
        for (x, y) in self.pixels_in(bounds) {
            let point = pixel_center(x, y);
            let coverage = radius + 0.5 - point.distance(center);
            if coverage <= 0.0 {
                continue;
            }

            let t = radial_parameter(point, center, radius);
            self.composite(x, y, inner.lerp_premultiplied(outer, t), coverage);
        }
    }

    /// Fill an axis-aligned rectangle, antialiased by exact pixel-area overlap
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        for (x, y) in self.pixels_in(rect) {
            let (left, top) = (f64::from(x), f64::from(y));
            let overlap = Rect::new(left, top, left + 1.0, top + 1.0).intersect(rect);
            let coverage = overlap.width().max(0.0) * overlap.height().max(0.0);
            self.composite(x, y, color, coverage);
        }
    }

    /// Draw the blurred shadow a canvas paints under `rect` for the given blur
    pub fn glow_rect(&mut self, rect: Rect, color: Color, blur: f64) {
        let sigma = blur_sigma(blur);
        let reach = (sigma * 3.0).ceil();
        for (x, y) in self.pixels_in(rect.inflate(reach, reach)) {
            let center = pixel_center(x, y);
            let coverage = gaussian_box_coverage(center.x, rect.x0, rect.x1, sigma)
                * gaussian_box_coverage(center.y, rect.y0, rect.y1, sigma);
            self.composite(x, y, color, coverage);
        }
    }

    /// Composite a solid colour through a coverage mask the size of the surface
    pub fn fill_mask(&mut self, mask: &CoverageMask, color: Color) {
        for ((y, x), &coverage) in mask.values().indexed_iter() {
            if coverage > 0.0 {
                self.composite(x as u32, y as u32, color, f64::from(coverage));
            }
        }
    }

    /// Integer pixel coordinates whose cells touch `bounds`, clipped to the surface
    fn pixels_in(&self, bounds: Rect) -> impl Iterator<Item = (u32, u32)> + use<> {
        let (x0, x1) = clip_span(bounds.x0, bounds.x1, self.width());
        let (y0, y1) = clip_span(bounds.y0, bounds.y1, self.height());
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

/// Centre of the pixel cell at `(x, y)`
pub fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

/// Clip the half-open float span `[lo, hi)` to pixel indices `0..limit`
pub fn clip_span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
    let limit_f = f64::from(limit);
    let start = lo.floor().clamp(0.0, limit_f) as u32;
    let end = hi.ceil().clamp(0.0, limit_f) as u32;
    (start, end.max(start))
}
