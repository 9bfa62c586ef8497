use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, Point},
    foundation::error::{BankLockerError, BankLockerResult},
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` at eased progress `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// One keyframe on a track.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Frame at which `value` is reached.
    pub frame: FrameIndex,
    /// Track value at `frame`.
    pub value: T,
    /// Ease applied toward the next key.
    pub ease: Ease,
}

/// Interpolation between consecutive keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    /// Keep the earlier key's value until the next key.
    Hold,
    /// Interpolate with the earlier key's ease.
    Linear,
}

/// Keyframed track sampled in timeline space.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    /// Keys, sorted by frame.
    pub keys: Vec<Keyframe<T>>,
    /// Interpolation between keys.
    pub mode: InterpMode,
    /// Value when no keys exist.
    pub default: Option<T>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Empty linear track that samples to `default` until keys are pushed.
    pub fn with_default(default: T) -> Self {
        Self {
            keys: Vec::new(),
            mode: InterpMode::Linear,
            default: Some(default),
        }
    }

    /// Append a key. Keys must be pushed in non-decreasing frame order.
    pub fn push(&mut self, frame: FrameIndex, value: T, ease: Ease) -> BankLockerResult<()> {
        if let Some(last) = self.keys.last()
            && last.frame > frame
        {
            return Err(BankLockerError::animation(format!(
                "keyframe at {} pushed after keyframe at {}",
                frame.0, last.frame.0
            )));
        }
        self.keys.push(Keyframe { frame, value, ease });
        Ok(())
    }

    /// Value at the last key, or the default for an empty track.
    pub fn last_value(&self) -> Option<&T> {
        self.keys
            .last()
            .map(|k| &k.value)
            .or(self.default.as_ref())
    }

    /// Check track structure.
    pub fn validate(&self) -> BankLockerResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(BankLockerError::animation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame <= w[1].frame) {
            return Err(BankLockerError::animation(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    /// Sample the track at timeline frame `frame`.
    pub fn sample(&self, frame: FrameIndex) -> BankLockerResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| BankLockerError::animation("Keyframes has no keys and no default"));
        }

        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, a.ease.apply(t))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
