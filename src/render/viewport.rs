use crate::foundation::core::{Affine, Canvas, Point, Vec2};

/// Scene units spanned by the canvas height.
pub const FRAME_HEIGHT_UNITS: f64 = 8.0;
/// Canvas height at which reference stroke widths are specified.
pub const REFERENCE_HEIGHT_PX: f64 = 1080.0;

/// Mapping between scene units (y up, origin at center) and canvas pixels (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    canvas: Canvas,
    px_per_unit: f64,
}

impl Viewport {
    /// Viewport whose height covers [`FRAME_HEIGHT_UNITS`].
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            px_per_unit: f64::from(canvas.height) / FRAME_HEIGHT_UNITS,
        }
    }

    /// Canvas being mapped onto.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Pixels per scene unit.
    pub fn px_per_unit(&self) -> f64 {
        self.px_per_unit
    }

    /// Scene-to-pixel transform.
    pub fn to_pixels(&self) -> Affine {
        let half = Vec2::new(
            f64::from(self.canvas.width) / 2.0,
            f64::from(self.canvas.height) / 2.0,
        );
        Affine::translate(half) * Affine::scale_non_uniform(self.px_per_unit, -self.px_per_unit)
    }

    /// Map one scene point to pixels.
    pub fn point_to_pixels(&self, p: Point) -> Point {
        self.to_pixels() * p
    }

    /// Stroke width in pixels for a width given at [`REFERENCE_HEIGHT_PX`].
    pub fn stroke_px(&self, reference_width: f64) -> f64 {
        reference_width * f64::from(self.canvas.height) / REFERENCE_HEIGHT_PX
    }

    /// Half extents of the visible area in scene units.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(
            f64::from(self.canvas.width) / (2.0 * self.px_per_unit),
            f64::from(self.canvas.height) / (2.0 * self.px_per_unit),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/viewport.rs"]
mod tests;
