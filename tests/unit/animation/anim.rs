use super::*;

fn ctx(frame: u64) -> SampleCtx {
    SampleCtx::new(FrameIndex(frame), Fps::new(30, 1).unwrap())
}

fn ramp(to: u64, value: f64, mode: InterpMode) -> Anim<f64> {
    Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                frame: FrameIndex(0),
                value: 0.0,
                ease: Ease::Linear,
            },
            Keyframe {
                frame: FrameIndex(to),
                value,
                ease: Ease::Linear,
            },
        ],
        mode,
        default: None,
    })
}

#[test]
fn keyframes_hold_is_constant_between_keys() {
    let anim = ramp(10, 3.0, InterpMode::Hold);
    assert_eq!(anim.sample(ctx(5)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(10)).unwrap(), 3.0);
}

#[test]
fn keyframes_linear_interpolates() {
    let anim = ramp(10, 10.0, InterpMode::Linear);
    assert_eq!(anim.sample(ctx(5)).unwrap(), 5.0);
    assert_eq!(anim.sample(ctx(50)).unwrap(), 10.0);
}

#[test]
fn empty_keyframes_need_a_default() {
    let kf: Keyframes<f64> = Keyframes {
        keys: vec![],
        mode: InterpMode::Linear,
        default: None,
    };
    assert!(kf.validate().is_err());
    assert!(kf.sample(ctx(0)).is_err());

    let kf = Keyframes {
        default: Some(2.5),
        ..kf
    };
    assert_eq!(kf.sample(ctx(3)).unwrap(), 2.5);
}

#[test]
fn unsorted_keys_fail_validation() {
    let anim = Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                frame: FrameIndex(5),
                value: 1.0,
                ease: Ease::Linear,
            },
            Keyframe {
                frame: FrameIndex(1),
                value: 2.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    });
    assert!(anim.validate().is_err());
}

#[test]
fn evenly_spaced_places_last_key_at_duration() {
    let anim = Anim::evenly_spaced(vec![0.0, 1.0, 0.0], 10, Ease::Linear);
    assert_eq!(anim.sample(ctx(0)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(5)).unwrap(), 1.0);
    assert_eq!(anim.sample(ctx(10)).unwrap(), 0.0);
}

#[test]
fn expr_loop_restarts_each_period() {
    let anim = Anim::Expr(Expr::Loop {
        inner: Box::new(ramp(4, 4.0, InterpMode::Linear)),
        period: 5,
    });
    assert_eq!(anim.sample(ctx(4)).unwrap(), 4.0);
    assert_eq!(anim.sample(ctx(5)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(7)).unwrap(), 2.0);
}

#[test]
fn vec2_lerp_is_componentwise() {
    let v = <Vec2 as Lerp>::lerp(&Vec2::new(0.0, 10.0), &Vec2::new(10.0, 0.0), 0.5);
    assert_eq!(v, Vec2::new(5.0, 5.0));
}
