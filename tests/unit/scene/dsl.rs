use super::*;
use crate::geometry::divider::{DividerSpec, ShapeKind};
use crate::geometry::starburst::StarburstSpec;

#[test]
fn builder_creates_expected_structure() {
    let scene = SceneBuilder::new(Canvas::new(640, 360))
        .seed(9)
        .scroll_y(120.0)
        .background(ColorToken::Charcoal)
        .decoration(
            "top",
            0.0,
            0.0,
            DecorationKind::Divider(DividerSpec::new(ShapeKind::Mountains)),
        )
        .unwrap()
        .decoration(
            "sun",
            220.0,
            80.0,
            DecorationKind::Starburst(StarburstSpec::default()),
        )
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(scene.seed, 9);
    assert_eq!(scene.fps, Fps::default());
    assert_eq!(scene.background, Some(ColorToken::Charcoal));
    assert_eq!(scene.decorations.len(), 2);
    assert_eq!(scene.decorations[1].id, "sun");
    assert_eq!(scene.decorations[1].kind.name(), "starburst");
    assert_eq!(scene.environment().scroll_y, 120.0);
}

#[test]
fn duplicate_decoration_id_is_rejected() {
    let err = SceneBuilder::new(Canvas::new(10, 10))
        .decoration("a", 0.0, 0.0, DecorationKind::Divider(DividerSpec::default()))
        .unwrap()
        .decoration("a", 0.0, 0.0, DecorationKind::Divider(DividerSpec::default()))
        .err()
        .unwrap();
    assert!(err.to_string().contains("duplicate decoration id 'a'"));
}

#[test]
fn build_validates() {
    assert!(SceneBuilder::new(Canvas::new(0, 10)).build().is_err());
    assert!(
        SceneBuilder::new(Canvas::new(10, 10))
            .scroll_y(f64::NAN)
            .build()
            .is_err()
    );
}
