//! Animated "bank locker" diagram.
//!
//! A manager sits at a fixed point with a circle of influence around it. Two customers fade in
//! on the circle, and the radius is annotated with a brace and `r`.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: [`compute_layout`] turns [`LayoutParams`] into points and primitives.
//! 2. **Script**: [`Scene::bank_locker`] times every object on a frame timeline.
//! 3. **Evaluate**: [`Evaluator::eval_frame`] samples opacity and scale for one frame.
//! 4. **Render**: [`CpuRenderer`] rasterizes the frame into premultiplied [`FrameRGBA`].
//! 5. **Output** (optional): [`render_range`] streams frames into a [`FrameSink`] such as
//!    [`PngSequenceSink`].
//!
//! Rendering settings (canvas, fps, background, math text template) come from [`RenderConfig`]
//! and are passed explicitly; the scene's geometry is fixed.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod encode;
mod eval;
mod foundation;
mod layout;
mod render;
mod scene;

pub use animation::ease::Ease;
pub use animation::keyframes::{InterpMode, Keyframe, Keyframes, Lerp};
pub use config::{PLAIN_FONT_FAMILY, RenderConfig, TextTemplate};
pub use encode::png::{PngSequenceSink, write_png};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use eval::evaluator::{EvaluatedFrame, EvaluatedNode, Evaluator};
pub use foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Vec2,
};
pub use foundation::error::{BankLockerError, BankLockerResult};
pub use layout::calculator::{
    InfluenceCircle, LayoutParams, RadiusSegment, SceneLayout, compute_layout, point_on_circle,
};
pub use render::backend::{FrameRGBA, FrameRenderer};
pub use render::cpu::CpuRenderer;
pub use render::pipeline::{RenderStats, render_frame, render_range};
pub use render::viewport::{FRAME_HEIGHT_UNITS, REFERENCE_HEIGHT_PX, Viewport};
pub use scene::bank_locker::ids;
pub use scene::brace::{BRACE_BUFF, BRACE_DEPTH, BRACE_LABEL_BUFF, BraceShape};
pub use scene::object::{
    BRACE_STROKE_WIDTH, DEFAULT_DOT_RADIUS, DEFAULT_STROKE_WIDTH, GRID_STROKE_WIDTH, LabelAlign,
    LabelKind, SceneObject,
};
pub use scene::script::{
    Animation, DEFAULT_FADE_IN_SCALE, PlayOpts, Scene, SceneEntry, SceneScript,
};
