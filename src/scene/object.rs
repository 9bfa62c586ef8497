use kurbo::Shape;

use crate::{
    foundation::core::{Point, Rgba8, Vec2},
    scene::brace::BraceShape,
};

/// Which point of a label's box sits on its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LabelAlign {
    /// Left edge, vertically centered (text placed to the right of something).
    LeftCenter,
    /// Top edge, horizontally centered (text placed below something).
    TopCenter,
}

/// How a label's glyphs are chosen at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LabelKind {
    /// Plain text, always set upright sans-serif.
    Plain,
    /// Math notation, styled by the renderer's text template.
    Math,
}

/// A drawable element of the scene, in scene units (y up, origin at frame center).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SceneObject {
    /// Cartesian grid covering the whole frame, unit spacing, with axes.
    NumberPlane,
    /// Filled disc.
    Dot {
        /// Disc center.
        center: Point,
        /// Disc radius.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// Text label.
    Label {
        /// Label text.
        text: String,
        /// Anchor point the label is aligned to.
        anchor: Point,
        /// Which point of the label box sits on `anchor`.
        align: LabelAlign,
        /// Font size in scene units.
        em_size: f64,
        /// Plain text or math.
        kind: LabelKind,
        /// Fill color.
        color: Rgba8,
    },
    /// Stroked circle outline.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Stroke color.
        color: Rgba8,
    },
    /// Stroked straight segment.
    Line {
        /// Segment start.
        start: Point,
        /// Segment end.
        end: Point,
        /// Stroke color.
        color: Rgba8,
    },
    /// Curly brace spanning a segment.
    Brace {
        /// Brace outline and tip.
        shape: BraceShape,
        /// Stroke color.
        color: Rgba8,
    },
}

/// Reference stroke width for outlines, in pixels at 1080p.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
/// Reference stroke width for grid lines and axes, in pixels at 1080p.
pub const GRID_STROKE_WIDTH: f64 = 2.0;
/// Reference stroke width for braces, in pixels at 1080p.
pub const BRACE_STROKE_WIDTH: f64 = 3.0;
/// Default dot radius in scene units.
pub const DEFAULT_DOT_RADIUS: f64 = 0.08;

impl SceneObject {
    /// Point that grow/scale animations scale about.
    ///
    /// Label centers depend on font metrics, so this returns the anchor; the renderer refines it
    /// with the laid-out text box.
    pub fn center(&self) -> Point {
        match self {
            Self::NumberPlane => Point::ORIGIN,
            Self::Dot { center, .. } | Self::Circle { center, .. } => *center,
            Self::Label { anchor, .. } => *anchor,
            Self::Line { start, end, .. } => start.midpoint(*end),
            Self::Brace { shape, .. } => shape.path.bounding_box().center(),
        }
    }

    /// Place a plain label next to a dot on its right side, leaving `buff` between them.
    pub fn label_right_of(
        text: impl Into<String>,
        dot_center: Point,
        dot_radius: f64,
        buff: f64,
        em_size: f64,
    ) -> Self {
        Self::Label {
            text: text.into(),
            anchor: dot_center + Vec2::new(dot_radius + buff, 0.0),
            align: LabelAlign::LeftCenter,
            em_size,
            kind: LabelKind::Plain,
            color: Rgba8::WHITE,
        }
    }

    /// Short name used in validation error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::NumberPlane => "number_plane",
            Self::Dot { .. } => "dot",
            Self::Label { .. } => "label",
            Self::Circle { .. } => "circle",
            Self::Line { .. } => "line",
            Self::Brace { .. } => "brace",
        }
    }
}
