//! The bank-locker scene: construction order and timing of the whole animation.

use crate::{
    foundation::core::{Fps, Rgba8, Vec2},
    foundation::error::BankLockerResult,
    layout::calculator::{LayoutParams, compute_layout},
    scene::{
        brace::{BRACE_BUFF, BRACE_DEPTH, BRACE_LABEL_BUFF, BraceShape},
        object::{DEFAULT_DOT_RADIUS, LabelAlign, LabelKind, SceneObject},
        script::{Animation, Scene, SceneScript},
    },
};

/// Object ids used by the bank-locker scene.
pub mod ids {
    /// Background grid.
    pub const NUMBER_PLANE: &str = "number_plane";
    /// Manager dot.
    pub const MANAGER: &str = "manager";
    /// "Manager" caption.
    pub const MANAGER_LABEL: &str = "manager_label";
    /// Circle of influence.
    pub const CIRCLE: &str = "circle";
    /// First customer dot.
    pub const CUSTOMER_1: &str = "customer_1";
    /// Second customer dot.
    pub const CUSTOMER_2: &str = "customer_2";
    /// Horizontal radius line.
    pub const RADIUS_LINE: &str = "radius_line";
    /// Brace under the radius line.
    pub const RADIUS_BRACE: &str = "radius_brace";
    /// `r` label under the brace.
    pub const RADIUS_LABEL: &str = "radius_label";
}

/// Gap between the manager dot and its caption, in scene units.
const MANAGER_LABEL_BUFF: f64 = 0.25;
/// Caption font size in scene units.
const LABEL_EM: f64 = 0.5;

impl Scene {
    /// Build the bank-locker animation from its layout constants.
    ///
    /// The timeline runs 19 seconds: the manager and its caption, the circle of influence, the
    /// two customers, then the annotated radius.
    pub fn bank_locker(params: &LayoutParams, fps: Fps) -> BankLockerResult<Scene> {
        let layout = compute_layout(params);
        let seg = layout.radius_segment;
        let brace = BraceShape::spanning(
            seg.start,
            seg.end,
            Vec2::new(0.0, -1.0),
            BRACE_BUFF,
            BRACE_DEPTH,
        );
        let radius_label_anchor = brace.label_anchor(BRACE_LABEL_BUFF);

        let dot = |center| SceneObject::Dot {
            center,
            radius: DEFAULT_DOT_RADIUS,
            color: Rgba8::WHITE,
        };

        let scene = SceneScript::new(fps)?
            .add(ids::NUMBER_PLANE, SceneObject::NumberPlane)?
            .add(ids::MANAGER, dot(layout.manager))?
            .object(
                ids::MANAGER_LABEL,
                SceneObject::label_right_of(
                    "Manager",
                    layout.manager,
                    DEFAULT_DOT_RADIUS,
                    MANAGER_LABEL_BUFF,
                    LABEL_EM,
                ),
            )?
            .object(
                ids::CIRCLE,
                SceneObject::Circle {
                    center: layout.circle.center,
                    radius: layout.circle.radius,
                    color: Rgba8::GREEN_A,
                },
            )?
            .object(ids::CUSTOMER_1, dot(layout.customers[0]))?
            .object(ids::CUSTOMER_2, dot(layout.customers[1]))?
            .object(
                ids::RADIUS_LINE,
                SceneObject::Line {
                    start: seg.start,
                    end: seg.end,
                    color: Rgba8::ORANGE,
                },
            )?
            .object(
                ids::RADIUS_BRACE,
                SceneObject::Brace {
                    shape: brace,
                    color: Rgba8::WHITE,
                },
            )?
            .object(
                ids::RADIUS_LABEL,
                SceneObject::Label {
                    text: "r".to_string(),
                    anchor: radius_label_anchor,
                    align: LabelAlign::TopCenter,
                    em_size: LABEL_EM,
                    kind: LabelKind::Math,
                    color: Rgba8::WHITE,
                },
            )?
            .play(&[Animation::grow_from_center(ids::MANAGER_LABEL)])?
            .wait(5.0)?
            .play(&[Animation::fade_out(ids::MANAGER_LABEL)])?
            .play(&[Animation::grow_from_center(ids::CIRCLE)])?
            .wait(2.0)?
            .play(&[Animation::fade_in_from_large(ids::CUSTOMER_1)])?
            .play(&[Animation::fade_in_from_large(ids::CUSTOMER_2)])?
            .wait(3.0)?
            .play(&[
                Animation::fade_in_from_large(ids::RADIUS_LINE),
                Animation::fade_in_from_large(ids::RADIUS_BRACE),
                Animation::fade_in(ids::RADIUS_LABEL),
            ])?
            .wait(3.0)?
            .build()?;

        tracing::debug!(
            frames = scene.duration.0,
            objects = scene.entries.len(),
            "built bank-locker scene"
        );
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/bank_locker.rs"]
mod tests;
