//! Scene layout calculator.
//!
//! Computes the fixed points and primitives of the bank-locker diagram from five constants:
//! manager position, influence radius and the two customer angles. Everything here is pure
//! arithmetic and cannot fail.

use std::f64::consts::PI;

use crate::foundation::core::Point;

/// Constants that drive the layout, in scene units and radians.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutParams {
    /// Manager position (center of the circle of influence).
    pub manager: Point,
    /// Radius of the circle of influence.
    pub radius: f64,
    /// Angle of the first customer, measured counter-clockwise from +x.
    pub first_customer_angle: f64,
    /// Angle of the second customer, measured counter-clockwise from +x.
    pub second_customer_angle: f64,
}

impl LayoutParams {
    /// The bank-locker constants: manager at `(1.75, 2.5)`, `r = 1.25`, customers at `π/3`
    /// and `-4π/9`.
    pub const BANK_LOCKER: Self = Self {
        manager: Point::new(1.75, 2.5),
        radius: 1.25,
        first_customer_angle: PI / 3.0,
        second_customer_angle: -4.0 * PI / 9.0,
    };
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::BANK_LOCKER
    }
}

/// Circle of influence around the manager.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InfluenceCircle {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
}

impl InfluenceCircle {
    /// Absolute distance between `p` and the circle boundary.
    pub fn distance_to_boundary(&self, p: Point) -> f64 {
        (self.center.distance(p) - self.radius).abs()
    }

    /// Return `true` when `p` lies on the boundary within `tolerance`.
    pub fn on_boundary(&self, p: Point, tolerance: f64) -> bool {
        self.distance_to_boundary(p) <= tolerance
    }
}

/// Horizontal radius of the influence circle, annotated with a brace and `r`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadiusSegment {
    /// Segment start (the manager position).
    pub start: Point,
    /// Segment end, `(x + r, y)`.
    pub end: Point,
}

impl RadiusSegment {
    /// Euclidean segment length.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// Every primitive the scene needs, computed once per run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneLayout {
    /// Manager position.
    pub manager: Point,
    /// Circle of influence centered on the manager.
    pub circle: InfluenceCircle,
    /// The two customers, both on the circle boundary.
    pub customers: [Point; 2],
    /// Horizontal radius from the manager to `(x + r, y)`.
    pub radius_segment: RadiusSegment,
}

/// Point at angle `theta` on the circle of radius `radius` around `center`.
pub fn point_on_circle(center: Point, radius: f64, theta: f64) -> Point {
    let (sin, cos) = theta.sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// Compute the scene layout from its constants.
pub fn compute_layout(params: &LayoutParams) -> SceneLayout {
    let manager = params.manager;
    let r = params.radius;

    SceneLayout {
        manager,
        circle: InfluenceCircle { center: manager, radius: r },
        customers: [
            point_on_circle(manager, r, params.first_customer_angle),
            point_on_circle(manager, r, params.second_customer_angle),
        ],
        radius_segment: RadiusSegment {
            start: manager,
            end: Point::new(manager.x + r, manager.y),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/calculator.rs"]
mod tests;
