use super::*;
use crate::geometry::divider::{HeightClass, ShapeKind};
use crate::motion::comet::{CometPosition, CometSize};
use crate::motion::orbit::OrbitElementSpec;

const SCENE: &str = r#"{
  "canvas": { "width": 800, "height": 600 },
  "fps": { "num": 30, "den": 1 },
  "seed": 42,
  "scroll_y": 250,
  "background": "charcoal",
  "decorations": [
    { "id": "hero-divider", "kind": "divider", "shape": "wave", "height": "lg",
      "inverted": true, "fill": "teal", "to": "cream" },
    { "id": "burst", "kind": "starburst", "x": 40, "y": 60, "size": 120, "point_count": 8 },
    { "id": "sky", "kind": "starfield" },
    { "id": "stars", "kind": "parallax", "star_count": 20 },
    { "id": "comet", "kind": "comet", "size": "lg", "position": "top-right" },
    { "id": "planets", "kind": "orbital_system", "size": "sm", "speed": "fast" },
    { "id": "team", "kind": "orbit", "x": 500, "y": 300,
      "elements": [ { "id": "a", "distance": 40, "speed": 2, "size": 12 } ] },
    { "id": "spinner", "kind": "atomic_loader", "size": "lg", "color": "aqua" }
  ]
}"#;

#[test]
fn parses_every_decoration_kind() {
    let scene = Scene::from_json(SCENE).unwrap();
    scene.validate().unwrap();
    assert_eq!(scene.canvas, Canvas::new(800, 600));
    assert_eq!(scene.fps, Fps { num: 30, den: 1 });
    assert_eq!(scene.scroll_y, 250.0);
    assert!(!scene.reduced_motion);

    let kinds: Vec<&str> = scene.decorations.iter().map(|d| d.kind.name()).collect();
    assert_eq!(
        kinds,
        [
            "divider",
            "starburst",
            "starfield",
            "parallax",
            "comet",
            "orbital_system",
            "orbit",
            "atomic_loader"
        ]
    );

    let DecorationKind::Divider(div) = &scene.decorations[0].kind else {
        panic!("expected divider");
    };
    assert_eq!(div.shape, ShapeKind::Wave);
    assert_eq!(div.height, HeightClass::Lg);
    assert!(div.inverted);
    assert_eq!(div.to, Some(ColorToken::Cream));

    let DecorationKind::Starburst(burst) = &scene.decorations[1].kind else {
        panic!("expected starburst");
    };
    assert_eq!(burst.size, 120.0);
    assert_eq!(burst.inner_radius, 40.0);
    assert_eq!((scene.decorations[1].x, scene.decorations[1].y), (40.0, 60.0));

    let DecorationKind::Comet(comet) = &scene.decorations[4].kind else {
        panic!("expected comet");
    };
    assert_eq!(comet.size, CometSize::Lg);
    assert_eq!(comet.position, CometPosition::TopRight);

    let DecorationKind::Orbit(orbit) = &scene.decorations[6].kind else {
        panic!("expected orbit");
    };
    assert_eq!(orbit.center_size, 80.0);
    assert_eq!(orbit.elements[0].speed, 2.0);

    let DecorationKind::AtomicLoader(loader) = &scene.decorations[7].kind else {
        panic!("expected atomic loader");
    };
    assert_eq!(loader.size, crate::motion::atomic::LoaderSize::Lg);
    assert_eq!(loader.color, ColorToken::Aqua);
}

#[test]
fn round_trips_through_json() {
    let scene = Scene::from_json(SCENE).unwrap();
    let again = Scene::from_json(&scene.to_json().unwrap()).unwrap();
    assert_eq!(scene, again);
}

#[test]
fn rejects_unknown_color_token() {
    let json = r#"{ "canvas": {"width": 10, "height": 10},
        "decorations": [ { "id": "d", "kind": "divider", "fill": "magenta" } ] }"#;
    let err = Scene::from_json(json).unwrap_err();
    assert!(matches!(err, StarbrightError::Serde(_)));
}

#[test]
fn rejects_unknown_kind() {
    let json = r#"{ "canvas": {"width": 10, "height": 10},
        "decorations": [ { "id": "d", "kind": "nebula" } ] }"#;
    assert!(Scene::from_json(json).is_err());
}

#[test]
fn validate_rejects_bad_decorations() {
    let mut scene = Scene::from_json(SCENE).unwrap();
    scene.decorations[1].id = "hero-divider".to_owned();
    assert!(scene.validate().is_err());

    let mut scene = Scene::from_json(SCENE).unwrap();
    if let DecorationKind::Orbit(o) = &mut scene.decorations[6].kind {
        o.elements.push(OrbitElementSpec::new("b", 10.0, -1.0, 4.0));
    }
    let err = scene.validate().unwrap_err().to_string();
    assert!(err.contains("decoration 'team'"), "{err}");
}

#[test]
fn validate_rejects_repeated_orbit_element_ids() {
    let mut scene = Scene::from_json(SCENE).unwrap();
    if let DecorationKind::Orbit(o) = &mut scene.decorations[6].kind {
        o.elements.push(OrbitElementSpec::new("a", 60.0, 1.0, 8.0));
    }
    let err = scene.validate().unwrap_err().to_string();
    assert!(err.contains("decoration 'team'"), "{err}");
    assert!(err.contains("duplicate orbit element id 'a'"), "{err}");
}

#[test]
fn starfield_defaults_to_canvas() {
    let spec = StarfieldSpec::default();
    assert_eq!(spec.surface(Canvas::new(300, 200)), Canvas::new(300, 200));
    let spec = StarfieldSpec {
        width: Some(100),
        height: None,
    };
    assert_eq!(spec.surface(Canvas::new(300, 200)), Canvas::new(100, 200));
}

#[test]
fn from_path_reports_missing_file() {
    let err = Scene::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open scene JSON"));
}
