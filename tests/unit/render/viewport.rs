use super::*;

fn vp() -> Viewport {
    Viewport::new(Canvas {
        width: 640,
        height: 360,
    })
}

#[test]
fn origin_maps_to_canvas_center() {
    assert_eq!(vp().point_to_pixels(Point::ORIGIN), Point::new(320.0, 180.0));
}

#[test]
fn y_axis_points_up() {
    let v = vp();
    assert_eq!(v.px_per_unit(), 45.0);
    let p = v.point_to_pixels(Point::new(1.75, 2.5));
    assert_eq!(p, Point::new(398.75, 67.5));
}

#[test]
fn extents_follow_aspect_ratio() {
    let e = vp().half_extents();
    assert!((e.y - 4.0).abs() < 1e-12);
    assert!((e.x - 640.0 / 90.0).abs() < 1e-12);
}

#[test]
fn strokes_scale_with_height() {
    assert!((vp().stroke_px(4.0) - 4.0 / 3.0).abs() < 1e-12);
}
