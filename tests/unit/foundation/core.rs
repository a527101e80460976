use super::*;

#[test]
fn frame_range_iterates_half_open() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    let frames: Vec<_> = r.iter().collect();
    assert_eq!(frames, vec![FrameIndex(2), FrameIndex(3), FrameIndex(4)]);
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_reversed_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_frames_secs_roundtrip() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_round(secs), 123);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn canvas_area_is_wide() {
    let c = Canvas::new(100_000, 100_000);
    assert_eq!(c.area(), 10_000_000_000);
    assert!(Canvas::new(0, 10).is_empty());
}

#[test]
fn rgba_hex_prints_alpha_only_when_translucent() {
    assert_eq!(Rgba8::opaque(0xF2, 0xC8, 0x49).to_hex(), "#F2C849");
    let c = Rgba8 {
        a: 0x80,
        ..Rgba8::WHITE
    };
    assert_eq!(c.to_hex(), "#FFFFFF80");
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D {
        translate: Vec2::new(10.0, -2.5),
        ..Transform2D::default()
    };
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}
