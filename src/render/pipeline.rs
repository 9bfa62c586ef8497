use crate::{
    encode::sink::{FrameSink, SinkConfig},
    eval::evaluator::Evaluator,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{BankLockerError, BankLockerResult},
    render::backend::{FrameRGBA, FrameRenderer},
    scene::script::Scene,
};

/// Counters reported after a range render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames_rendered: u64,
}

/// Evaluate and rasterize one frame.
#[tracing::instrument(skip(scene, renderer))]
pub fn render_frame(
    scene: &Scene,
    frame: FrameIndex,
    renderer: &mut dyn FrameRenderer,
) -> BankLockerResult<FrameRGBA> {
    let evaluated = Evaluator::eval_frame(scene, frame)?;
    renderer.render(&evaluated)
}

/// Render `range` in order and stream every frame into `sink`.
///
/// `sink.begin` is called before the first frame and `sink.end` after the last, even for an
/// empty range.
#[tracing::instrument(skip(scene, renderer, sink))]
pub fn render_range(
    scene: &Scene,
    range: FrameRange,
    renderer: &mut dyn FrameRenderer,
    sink: &mut dyn FrameSink,
) -> BankLockerResult<RenderStats> {
    if range.end > scene.duration {
        return Err(BankLockerError::validation(format!(
            "range end {} exceeds scene duration {}",
            range.end.0, scene.duration.0
        )));
    }

    let canvas = renderer.canvas();
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps: scene.fps,
    })?;

    let mut stats = RenderStats::default();
    for idx in range.frames() {
        let frame = render_frame(scene, idx, renderer)?;
        sink.push_frame(idx, &frame)?;
        stats.frames_rendered += 1;
    }

    sink.end()?;
    tracing::debug!(frames = stats.frames_rendered, "range rendered");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
