use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::Smooth,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn smooth_is_symmetric_about_the_midpoint() {
    assert!((Ease::Smooth.apply(0.5) - 0.5).abs() < 1e-12);
    let lo = Ease::Smooth.apply(0.2);
    let hi = Ease::Smooth.apply(0.8);
    assert!((lo + hi - 1.0).abs() < 1e-12);
    assert!(lo < 0.2);
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-1.0), ease.apply(0.0));
        assert_eq!(ease.apply(2.0), ease.apply(1.0));
    }
}
