use super::*;
use crate::foundation::core::{Point, Rgba8};

fn fps10() -> Fps {
    Fps::new(10, 1).unwrap()
}

fn dot() -> SceneObject {
    SceneObject::Dot {
        center: Point::new(0.0, 0.0),
        radius: 0.1,
        color: Rgba8::WHITE,
    }
}

fn opacity_at(scene: &Scene, id: &str, f: u64) -> f64 {
    scene.entry(id).unwrap().opacity.sample(FrameIndex(f)).unwrap()
}

fn scale_at(scene: &Scene, id: &str, f: u64) -> f64 {
    scene.entry(id).unwrap().scale.sample(FrameIndex(f)).unwrap()
}

#[test]
fn add_shows_object_at_cursor() {
    let scene = SceneScript::new(fps10())
        .unwrap()
        .wait(1.0)
        .unwrap()
        .add("d", dot())
        .unwrap()
        .wait(1.0)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(scene.duration, FrameIndex(20));
    assert_eq!(opacity_at(&scene, "d", 9), 0.0);
    assert_eq!(opacity_at(&scene, "d", 10), 1.0);
    assert_eq!(opacity_at(&scene, "d", 19), 1.0);
}

#[test]
fn declared_objects_stay_hidden_until_played() {
    let scene = SceneScript::new(fps10())
        .unwrap()
        .object("d", dot())
        .unwrap()
        .wait(2.0)
        .unwrap()
        .play(&[Animation::fade_in("d")])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(opacity_at(&scene, "d", 0), 0.0);
    assert_eq!(opacity_at(&scene, "d", 19), 0.0);
    assert!((opacity_at(&scene, "d", 25) - 0.5).abs() < 1e-12);
    assert_eq!(opacity_at(&scene, "d", 30), 1.0);
}

#[test]
fn grow_from_center_scales_from_zero() {
    let scene = SceneScript::new(fps10())
        .unwrap()
        .object("d", dot())
        .unwrap()
        .play(&[Animation::grow_from_center("d")])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(scale_at(&scene, "d", 0), 0.0);
    assert_eq!(opacity_at(&scene, "d", 0), 1.0);
    assert!((scale_at(&scene, "d", 5) - 0.5).abs() < 1e-12);
    assert_eq!(scale_at(&scene, "d", 10), 1.0);
}

#[test]
fn fade_in_from_large_shrinks_to_unit_scale() {
    let scene = SceneScript::new(fps10())
        .unwrap()
        .object("d", dot())
        .unwrap()
        .play_with(
            &[Animation::fade_in_from_large("d")],
            PlayOpts {
                run_time: 2.0,
                ease: Ease::Linear,
            },
        )
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(scene.duration, FrameIndex(20));
    assert_eq!(scale_at(&scene, "d", 0), 2.0);
    assert!((scale_at(&scene, "d", 10) - 1.5).abs() < 1e-12);
    assert!((opacity_at(&scene, "d", 10) - 0.5).abs() < 1e-12);
    assert_eq!(scale_at(&scene, "d", 20), 1.0);
}

#[test]
fn fade_out_leaves_object_hidden() {
    let scene = SceneScript::new(fps10())
        .unwrap()
        .add("d", dot())
        .unwrap()
        .play(&[Animation::fade_out("d")])
        .unwrap()
        .wait(1.0)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(opacity_at(&scene, "d", 0), 1.0);
    assert_eq!(opacity_at(&scene, "d", 10), 0.0);
    assert_eq!(opacity_at(&scene, "d", 19), 0.0);
}

#[test]
fn fade_out_of_hidden_object_is_rejected() {
    let res = SceneScript::new(fps10())
        .unwrap()
        .object("d", dot())
        .unwrap()
        .play(&[Animation::fade_out("d")]);
    let err = res.err().unwrap();
    assert!(err.to_string().contains("dot 'd'"), "{err}");
}

#[test]
fn unknown_and_duplicate_ids_are_rejected() {
    assert!(
        SceneScript::new(fps10())
            .unwrap()
            .play(&[Animation::fade_in("nope")])
            .is_err()
    );
    assert!(
        SceneScript::new(fps10())
            .unwrap()
            .add("d", dot())
            .unwrap()
            .add("d", dot())
            .is_err()
    );
    assert!(
        SceneScript::new(fps10())
            .unwrap()
            .object("d", dot())
            .unwrap()
            .play(&[Animation::fade_in("d"), Animation::grow_from_center("d")])
            .is_err()
    );
}

#[test]
fn bad_timings_are_rejected() {
    let s = SceneScript::new(fps10()).unwrap().object("d", dot()).unwrap();
    assert!(
        s.play_with(
            &[Animation::fade_in("d")],
            PlayOpts {
                run_time: 0.0,
                ease: Ease::Linear,
            },
        )
        .is_err()
    );
    assert!(SceneScript::new(fps10()).unwrap().wait(-1.0).is_err());
    assert!(SceneScript::new(fps10()).unwrap().wait(f64::NAN).is_err());
    assert!(SceneScript::new(fps10()).unwrap().play(&[]).is_err());
}

#[test]
fn empty_scene_fails_to_build() {
    assert!(SceneScript::new(fps10()).unwrap().build().is_err());
}

#[test]
fn parallel_animations_share_the_same_window() {
    let scene = SceneScript::new(fps10())
        .unwrap()
        .object("a", dot())
        .unwrap()
        .object("b", dot())
        .unwrap()
        .play(&[Animation::fade_in("a"), Animation::fade_in_from_large("b")])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(scene.duration, FrameIndex(10));
    assert_eq!(opacity_at(&scene, "a", 5), opacity_at(&scene, "b", 5));
}

#[test]
fn zero_fps_is_rejected_up_front() {
    assert!(SceneScript::new(Fps { num: 30, den: 0 }).is_err());
    assert!(SceneScript::new(Fps { num: 0, den: 1 }).is_err());
}

#[test]
fn timeline_overflow_is_an_error() {
    let script = SceneScript::new(fps10())
        .unwrap()
        .add("d", dot())
        .unwrap();
    let res = script.wait(1e300).and_then(|s| s.wait(1.0));
    let err = res.err().unwrap();
    assert!(err.to_string().contains("timeline exceeds u64 frames"), "{err}");

    let res = SceneScript::new(fps10())
        .unwrap()
        .object("d", dot())
        .unwrap()
        .wait(1e300)
        .and_then(|s| s.play(&[Animation::fade_in("d")]));
    assert!(res.is_err());
}
