use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::EaseInOut,
    Ease::EaseOut,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9);
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
fn css_ease_in_out_is_symmetric() {
    let mid = Ease::EaseInOut.apply(0.5);
    assert!((mid - 0.5).abs() < 1e-6);
    let a = Ease::EaseInOut.apply(0.2);
    let b = Ease::EaseInOut.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-6);
}

#[test]
fn ease_out_front_loads_progress() {
    assert!(Ease::EaseOut.apply(0.3) > 0.3);
}
