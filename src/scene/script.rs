use std::collections::BTreeMap;

use crate::{
    animation::{ease::Ease, keyframes::Keyframes},
    foundation::core::{Fps, FrameIndex},
    foundation::error::{BankLockerError, BankLockerResult},
    scene::object::SceneObject,
};

/// Default `FadeInFromLarge` starting scale.
pub const DEFAULT_FADE_IN_SCALE: f64 = 2.0;

/// A single animation applied to one scene object during a `play` call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Animation {
    /// Scale up from nothing about the object's center.
    GrowFromCenter(String),
    /// Opacity 0 to 1.
    FadeIn(String),
    /// Opacity from its current value to 0.
    FadeOut(String),
    /// Opacity 0 to 1 while shrinking from `scale` to 1.
    FadeInFromLarge {
        /// Target object id.
        target: String,
        /// Starting scale factor.
        scale: f64,
    },
}

impl Animation {
    /// `GrowFromCenter` on `id`.
    pub fn grow_from_center(id: impl Into<String>) -> Self {
        Self::GrowFromCenter(id.into())
    }

    /// `FadeIn` on `id`.
    pub fn fade_in(id: impl Into<String>) -> Self {
        Self::FadeIn(id.into())
    }

    /// `FadeOut` on `id`.
    pub fn fade_out(id: impl Into<String>) -> Self {
        Self::FadeOut(id.into())
    }

    /// `FadeInFromLarge` on `id` with the default starting scale.
    pub fn fade_in_from_large(id: impl Into<String>) -> Self {
        Self::FadeInFromLarge {
            target: id.into(),
            scale: DEFAULT_FADE_IN_SCALE,
        }
    }

    /// Id of the animated object.
    pub fn target(&self) -> &str {
        match self {
            Self::GrowFromCenter(id) | Self::FadeIn(id) | Self::FadeOut(id) => id,
            Self::FadeInFromLarge { target, .. } => target,
        }
    }
}

/// Timing of a `play` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayOpts {
    /// Duration in seconds, must be > 0.
    pub run_time: f64,
    /// Rate function applied to every animation of the call.
    pub ease: Ease,
}

impl Default for PlayOpts {
    fn default() -> Self {
        Self {
            run_time: 1.0,
            ease: Ease::Smooth,
        }
    }
}

/// One object of a built scene together with its animated properties.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneEntry {
    /// Stable object id.
    pub id: String,
    /// What to draw.
    pub object: SceneObject,
    /// Opacity over time, 0 before the object first appears.
    pub opacity: Keyframes<f64>,
    /// Uniform scale about the object's center over time.
    pub scale: Keyframes<f64>,
}

/// A fully timed scene: objects in draw order and their tracks.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Total length in frames.
    pub duration: FrameIndex,
    /// Objects in z order (first drawn first).
    pub entries: Vec<SceneEntry>,
}

impl Scene {
    /// Look up an entry by id.
    pub fn entry(&self, id: &str) -> Option<&SceneEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Check the timeline and every track.
    pub fn validate(&self) -> BankLockerResult<()> {
        if self.duration.0 == 0 {
            return Err(BankLockerError::validation("scene duration must be > 0 frames"));
        }
        for e in &self.entries {
            e.opacity.validate()?;
            e.scale.validate()?;
        }
        Ok(())
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration.0)
    }
}

/// Builder that turns `add` / `play` / `wait` calls into a [`Scene`].
///
/// Time advances only through `play` and `wait`. Objects must be declared with
/// [`SceneScript::object`] or [`SceneScript::add`] before they are animated.
pub struct SceneScript {
    fps: Fps,
    cursor: u64,
    entries: Vec<SceneEntry>,
    index: BTreeMap<String, usize>,
}

impl SceneScript {
    /// Start an empty script at frame 0. Fails if `fps` has a zero numerator or denominator.
    pub fn new(fps: Fps) -> BankLockerResult<Self> {
        Ok(Self {
            fps: Fps::new(fps.num, fps.den)?,
            cursor: 0,
            entries: Vec::new(),
            index: BTreeMap::new(),
        })
    }

    /// Current time in frames.
    pub fn cursor(&self) -> FrameIndex {
        FrameIndex(self.cursor)
    }

    /// Declare an object without showing it.
    pub fn object(mut self, id: impl Into<String>, object: SceneObject) -> BankLockerResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BankLockerError::validation("object id must be non-empty"));
        }
        if self.index.contains_key(&id) {
            return Err(BankLockerError::validation(format!(
                "duplicate object id '{id}'"
            )));
        }

        let mut opacity = Keyframes::with_default(0.0);
        opacity.push(FrameIndex(0), 0.0, Ease::Linear)?;
        let mut scale = Keyframes::with_default(1.0);
        scale.push(FrameIndex(0), 1.0, Ease::Linear)?;

        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(SceneEntry {
            id,
            object,
            opacity,
            scale,
        });
        Ok(self)
    }

    /// Declare an object and show it immediately at the current time.
    pub fn add(self, id: impl Into<String>, object: SceneObject) -> BankLockerResult<Self> {
        let id = id.into();
        let mut this = self.object(id.clone(), object)?;
        let at = FrameIndex(this.cursor);
        let entry = this.entry_mut(&id)?;
        step_to(&mut entry.opacity, at, 1.0, Ease::Linear)?;
        step_to(&mut entry.scale, at, 1.0, Ease::Linear)?;
        Ok(this)
    }

    /// Play animations in parallel for one second with the smooth rate function.
    pub fn play(self, animations: &[Animation]) -> BankLockerResult<Self> {
        self.play_with(animations, PlayOpts::default())
    }

    /// Play animations in parallel with explicit timing.
    pub fn play_with(mut self, animations: &[Animation], opts: PlayOpts) -> BankLockerResult<Self> {
        if !opts.run_time.is_finite() || opts.run_time <= 0.0 {
            return Err(BankLockerError::validation("play run_time must be finite and > 0"));
        }
        if animations.is_empty() {
            return Err(BankLockerError::validation("play needs at least one animation"));
        }
        for (i, a) in animations.iter().enumerate() {
            if animations[..i].iter().any(|b| b.target() == a.target()) {
                return Err(BankLockerError::validation(format!(
                    "object '{}' animated twice in one play",
                    a.target()
                )));
            }
        }

        let start = FrameIndex(self.cursor);
        let end = FrameIndex(self.advanced_by(opts.run_time)?);
        for a in animations {
            let entry = self.entry_mut(a.target())?;
            apply_animation(entry, a, start, end, opts.ease)?;
        }

        tracing::debug!(
            start = start.0,
            end = end.0,
            count = animations.len(),
            "scheduled play"
        );
        self.cursor = end.0;
        Ok(self)
    }

    /// Advance time without animating.
    pub fn wait(mut self, secs: f64) -> BankLockerResult<Self> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(BankLockerError::validation("wait duration must be finite and >= 0"));
        }
        self.cursor = self.advanced_by(secs)?;
        Ok(self)
    }

    /// Finish the script.
    pub fn build(self) -> BankLockerResult<Scene> {
        let scene = Scene {
            fps: self.fps,
            duration: FrameIndex(self.cursor),
            entries: self.entries,
        };
        scene.validate()?;
        Ok(scene)
    }

    fn advanced_by(&self, secs: f64) -> BankLockerResult<u64> {
        self.cursor
            .checked_add(self.fps.secs_to_frames_round(secs))
            .filter(|end| *end < u64::MAX)
            .ok_or_else(|| BankLockerError::validation("timeline exceeds u64 frames"))
    }

        fn entry_mut(&mut self, id: &str) -> BankLockerResult<&mut SceneEntry> {
        let i = *self
            .index
            .get(id)
            .ok_or_else(|| BankLockerError::validation(format!("unknown object id '{id}'")))?;
        Ok(&mut self.entries[i])
    }
}

fn apply_animation(
    entry: &mut SceneEntry,
    animation: &Animation,
    start: FrameIndex,
    end: FrameIndex,
    ease: Ease,
) -> BankLockerResult<()> {
    match animation {
        Animation::GrowFromCenter(_) => {
            step_to(&mut entry.opacity, start, 1.0, Ease::Linear)?;
            tween(&mut entry.scale, start, end, 0.0, 1.0, ease)
        }
        Animation::FadeIn(_) => {
            step_to(&mut entry.scale, start, 1.0, Ease::Linear)?;
            tween(&mut entry.opacity, start, end, 0.0, 1.0, ease)
        }
        Animation::FadeOut(id) => {
            let from = entry.opacity.last_value().copied().unwrap_or(0.0);
            if from <= 0.0 {
                return Err(BankLockerError::validation(format!(
                    "cannot fade out {} '{id}': it is not visible",
                    entry.object.kind_name()
                )));
            }
            tween(&mut entry.opacity, start, end, from, 0.0, ease)
        }
        Animation::FadeInFromLarge { target, scale } => {
            if !scale.is_finite() || *scale <= 0.0 {
                return Err(BankLockerError::validation(format!(
                    "FadeInFromLarge scale for '{target}' must be finite and > 0"
                )));
            }
            tween(&mut entry.scale, start, end, *scale, 1.0, ease)?;
            tween(&mut entry.opacity, start, end, 0.0, 1.0, ease)
        }
    }
}

/// Hold the track's current value up to `at`, then jump to `value`.
fn step_to(track: &mut Keyframes<f64>, at: FrameIndex, value: f64, ease: Ease) -> BankLockerResult<()> {
    let held = track.last_value().copied().unwrap_or(value);
    track.push(at, held, Ease::Linear)?;
    track.push(at, value, ease)
}

fn tween(
    track: &mut Keyframes<f64>,
    start: FrameIndex,
    end: FrameIndex,
    from: f64,
    to: f64,
    ease: Ease,
) -> BankLockerResult<()> {
    if end <= start {
        return step_to(track, start, to, Ease::Linear);
    }
    step_to(track, start, from, ease)?;
    track.push(end, to, Ease::Linear)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/script.rs"]
mod tests;
