use super::*;
use crate::{
    encode::sink::InMemorySink,
    eval::evaluator::EvaluatedFrame,
    foundation::core::{Canvas, Fps},
    layout::calculator::LayoutParams,
};

/// Renders a 1x1 frame whose red channel is the number of visible nodes.
struct CountingRenderer {
    calls: Vec<u64>,
}

impl FrameRenderer for CountingRenderer {
    fn canvas(&self) -> Canvas {
        Canvas {
            width: 1,
            height: 1,
        }
    }

    fn render(&mut self, frame: &EvaluatedFrame<'_>) -> BankLockerResult<FrameRGBA> {
        self.calls.push(frame.frame.0);
        Ok(FrameRGBA {
            width: 1,
            height: 1,
            data: vec![frame.nodes.len() as u8, 0, 0, 255],
            premultiplied: true,
        })
    }
}

fn scene() -> Scene {
    Scene::bank_locker(&LayoutParams::BANK_LOCKER, Fps::new(2, 1).unwrap()).unwrap()
}

#[test]
fn range_pushes_frames_in_order() {
    let s = scene();
    let mut r = CountingRenderer { calls: Vec::new() };
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(18), FrameIndex(24)).unwrap();

    let stats = render_range(&s, range, &mut r, &mut sink).unwrap();
    assert_eq!(stats.frames_rendered, 6);
    assert_eq!(r.calls, vec![18, 19, 20, 21, 22, 23]);

    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, r.calls);
    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().fps, s.fps);
}

#[test]
fn customers_show_up_in_the_node_count() {
    let s = scene();
    let mut r = CountingRenderer { calls: Vec::new() };
    // 2 fps: the first customer fades in over frames 20..22, the second over 22..24.
    let before = render_frame(&s, FrameIndex(19), &mut r).unwrap();
    let mid_first = render_frame(&s, FrameIndex(21), &mut r).unwrap();
    let both = render_frame(&s, FrameIndex(24), &mut r).unwrap();
    assert_eq!(before.data[0], 3);
    assert_eq!(mid_first.data[0], 4);
    assert_eq!(both.data[0], 5);
}

#[test]
fn range_past_the_end_is_rejected() {
    let s = scene();
    let mut r = CountingRenderer { calls: Vec::new() };
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(30), FrameIndex(39)).unwrap();
    assert!(render_range(&s, range, &mut r, &mut sink).is_err());
    assert!(r.calls.is_empty());
}

#[test]
fn empty_range_still_opens_and_closes_the_sink() {
    let s = scene();
    let mut r = CountingRenderer { calls: Vec::new() };
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap();
    let stats = render_range(&s, range, &mut r, &mut sink).unwrap();
    assert_eq!(stats.frames_rendered, 0);
    assert!(sink.config().is_some());
    assert!(sink.is_finished());
}
