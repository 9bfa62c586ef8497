use kurbo::BezPath;

use crate::foundation::core::{Point, Vec2};

/// Gap between the annotated segment and the brace, in scene units.
pub const BRACE_BUFF: f64 = 0.2;
/// Distance from the brace's ends to its tip, in scene units.
pub const BRACE_DEPTH: f64 = 0.2;
/// Gap between the brace tip and its label, in scene units.
pub const BRACE_LABEL_BUFF: f64 = 0.1;

/// Open curly-brace outline plus the tip used to place its label.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BraceShape {
    /// Brace outline in scene units (stroked, not filled).
    pub path: BezPath,
    /// Outermost point of the brace, at the middle of the span.
    pub tip: Point,
    /// Unit vector pointing from the segment toward the brace.
    pub direction: Vec2,
}

impl BraceShape {
    /// Build a brace spanning `start..end`, offset to the `direction` side of the segment.
    ///
    /// `direction` only needs to point to the correct side; it is projected onto the segment
    /// normal. Degenerate segments yield a brace collapsed onto `start`.
    pub fn spanning(start: Point, end: Point, direction: Vec2, buff: f64, depth: f64) -> Self {
        let along = end - start;
        let len = along.hypot();
        let tangent = if len > 0.0 {
            along / len
        } else {
            Vec2::new(1.0, 0.0)
        };
        let mut normal = tangent.turn_90();
        if normal.dot(direction) < 0.0 {
            normal = -normal;
        }

        let base = start + normal * buff;
        let at = |u: f64, v: f64| base + tangent * u + normal * v;

        let half = len / 2.0;
        let h = depth;
        let q = (h / 2.0).min(len / 4.0);

        let mut path = BezPath::new();
        path.move_to(at(0.0, 0.0));
        path.quad_to(at(0.0, h / 2.0), at(q, h / 2.0));
        path.line_to(at(half - q, h / 2.0));
        path.quad_to(at(half, h / 2.0), at(half, h));
        path.quad_to(at(half, h / 2.0), at(half + q, h / 2.0));
        path.line_to(at(len - q, h / 2.0));
        path.quad_to(at(len, h / 2.0), at(len, 0.0));

        Self {
            path,
            tip: at(half, h),
            direction: normal,
        }
    }

    /// Anchor for a label placed beyond the tip, `buff` away from it.
    pub fn label_anchor(&self, buff: f64) -> Point {
        self.tip + self.direction * buff
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/brace.rs"]
mod tests;
