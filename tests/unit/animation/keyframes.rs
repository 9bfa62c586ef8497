use super::*;

fn two_keys(mode: InterpMode, ease: Ease) -> Keyframes<f64> {
    Keyframes {
        keys: vec![
            Keyframe {
                frame: FrameIndex(0),
                value: 0.0,
                ease,
            },
            Keyframe {
                frame: FrameIndex(10),
                value: 10.0,
                ease: Ease::Linear,
            },
        ],
        mode,
        default: None,
    }
}

#[test]
fn hold_is_constant_between_keys() {
    let kf = two_keys(InterpMode::Hold, Ease::Linear);
    assert_eq!(kf.sample(FrameIndex(5)).unwrap(), 0.0);
    assert_eq!(kf.sample(FrameIndex(10)).unwrap(), 10.0);
}

#[test]
fn linear_interpolates_with_earlier_ease() {
    let kf = two_keys(InterpMode::Linear, Ease::Linear);
    assert_eq!(kf.sample(FrameIndex(5)).unwrap(), 5.0);

    let kf = two_keys(InterpMode::Linear, Ease::InQuad);
    assert!((kf.sample(FrameIndex(5)).unwrap() - 2.5).abs() < 1e-12);
}

#[test]
fn samples_clamp_outside_the_keys() {
    let mut kf = Keyframes::with_default(0.0);
    kf.push(FrameIndex(4), 1.0, Ease::Linear).unwrap();
    kf.push(FrameIndex(8), 3.0, Ease::Linear).unwrap();
    assert_eq!(kf.sample(FrameIndex(0)).unwrap(), 1.0);
    assert_eq!(kf.sample(FrameIndex(100)).unwrap(), 3.0);
}

#[test]
fn coincident_keys_switch_at_the_shared_frame() {
    let mut kf = Keyframes::with_default(0.0);
    kf.push(FrameIndex(0), 0.0, Ease::Linear).unwrap();
    kf.push(FrameIndex(5), 1.0, Ease::Linear).unwrap();
    kf.push(FrameIndex(5), 0.0, Ease::Linear).unwrap();
    kf.push(FrameIndex(9), 1.0, Ease::Linear).unwrap();
    assert_eq!(kf.sample(FrameIndex(5)).unwrap(), 0.0);
    assert!((kf.sample(FrameIndex(7)).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn empty_track_uses_default() {
    let kf = Keyframes::with_default(0.25);
    assert_eq!(kf.sample(FrameIndex(3)).unwrap(), 0.25);
    assert_eq!(kf.last_value(), Some(&0.25));
}

#[test]
fn push_rejects_out_of_order_keys() {
    let mut kf = Keyframes::with_default(0.0);
    kf.push(FrameIndex(5), 1.0, Ease::Linear).unwrap();
    assert!(kf.push(FrameIndex(4), 1.0, Ease::Linear).is_err());
}

#[test]
fn validate_rejects_unsorted_or_empty_tracks() {
    let mut kf = two_keys(InterpMode::Linear, Ease::Linear);
    kf.keys.swap(0, 1);
    assert!(kf.validate().is_err());

    let empty: Keyframes<f64> = Keyframes {
        keys: Vec::new(),
        mode: InterpMode::Hold,
        default: None,
    };
    assert!(empty.validate().is_err());
    assert!(empty.sample(FrameIndex(0)).is_err());
}

#[test]
fn points_interpolate_componentwise() {
    let mut kf = Keyframes::with_default(Point::ORIGIN);
    kf.push(FrameIndex(0), Point::new(0.0, 0.0), Ease::Linear)
        .unwrap();
    kf.push(FrameIndex(4), Point::new(4.0, -8.0), Ease::Linear)
        .unwrap();
    assert_eq!(kf.sample(FrameIndex(1)).unwrap(), Point::new(1.0, -2.0));
}
