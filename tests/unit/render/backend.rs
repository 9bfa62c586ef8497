use super::*;

fn frame(data: Vec<u8>, premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data,
        premultiplied,
    }
}

#[test]
fn pixel_lookup_is_row_major_and_bounded() {
    let f = frame(vec![1, 2, 3, 4, 5, 6, 7, 8], false);
    assert_eq!(f.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn straight_conversion_undoes_premultiplication() {
    let f = frame(vec![64, 32, 0, 128, 10, 20, 30, 255], true);
    let s = f.to_straight_rgba();
    assert_eq!(&s[..4], &[128, 64, 0, 128]);
    assert_eq!(&s[4..], &[10, 20, 30, 255]);
}

#[test]
fn straight_frames_are_copied_verbatim() {
    let f = frame(vec![64, 32, 0, 128, 0, 0, 0, 0], false);
    assert_eq!(f.to_straight_rgba(), f.data);
}
