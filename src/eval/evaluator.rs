use crate::{
    foundation::core::{Affine, FrameIndex, Point},
    foundation::error::{BankLockerError, BankLockerResult},
    scene::{object::SceneObject, script::Scene},
};

/// Everything visible at one frame, in draw order.
#[derive(Clone, Debug)]
pub struct EvaluatedFrame<'a> {
    /// Sampled frame.
    pub frame: FrameIndex,
    /// Visible objects, first drawn first.
    pub nodes: Vec<EvaluatedNode<'a>>,
}

/// One visible object with its sampled properties.
#[derive(Clone, Debug)]
pub struct EvaluatedNode<'a> {
    /// Object id.
    pub id: &'a str,
    /// Object geometry in scene units.
    pub object: &'a SceneObject,
    /// Opacity in `(0, 1]`.
    pub opacity: f64,
    /// Uniform scale about the object's center, `> 0`.
    pub scale: f64,
}

impl EvaluatedNode<'_> {
    /// Scale about `center`, leaving `center` fixed.
    pub fn transform_about(&self, center: Point) -> Affine {
        let c = center.to_vec2();
        Affine::translate(c) * Affine::scale(self.scale) * Affine::translate(-c)
    }

    /// Scene-space transform about the object's own center.
    pub fn transform(&self) -> Affine {
        self.transform_about(self.object.center())
    }
}

/// Samples a [`Scene`] at a frame.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate `scene` at `frame`, dropping fully transparent or collapsed objects.
    #[tracing::instrument(skip(scene))]
    pub fn eval_frame(scene: &Scene, frame: FrameIndex) -> BankLockerResult<EvaluatedFrame<'_>> {
        if frame.0 >= scene.duration.0 {
            return Err(BankLockerError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, scene.duration.0
            )));
        }

        let mut nodes = Vec::with_capacity(scene.entries.len());
        for entry in &scene.entries {
            let opacity = entry.opacity.sample(frame)?.clamp(0.0, 1.0);
            if opacity <= 0.0 {
                continue;
            }
            let scale = entry.scale.sample(frame)?;
            if !scale.is_finite() {
                return Err(BankLockerError::evaluation(format!(
                    "object '{}' has a non-finite scale",
                    entry.id
                )));
            }
            if scale <= 0.0 {
                continue;
            }
            nodes.push(EvaluatedNode {
                id: &entry.id,
                object: &entry.object,
                opacity,
                scale,
            });
        }

        Ok(EvaluatedFrame { frame, nodes })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
