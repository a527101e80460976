use super::*;
use crate::animation::anim::SampleCtx;
use crate::animation::ease::Ease;
use crate::foundation::core::{Fps, FrameIndex};

fn ctx(frame: u64) -> SampleCtx {
    SampleCtx::new(FrameIndex(frame), Fps::new(30, 1).unwrap())
}

fn ramp10() -> Anim<f64> {
    Anim::evenly_spaced(vec![0.0, 10.0], 10, Ease::Linear)
}

#[test]
fn delay_holds_first_value() {
    let anim = delay(ramp10(), 5);
    assert_eq!(anim.sample(ctx(3)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(10)).unwrap(), 5.0);
}

#[test]
fn loop_repeat_wraps() {
    let anim = loop_(ramp10(), 10);
    assert_eq!(anim.sample(ctx(13)).unwrap(), 3.0);
    assert!(loop_(ramp10(), 0).validate().is_err());
}

#[test]
fn delayed_loop_starts_late_then_repeats() {
    let anim = delay(loop_(ramp10(), 12), 4);
    assert_eq!(anim.sample(ctx(2)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(9)).unwrap(), 5.0);
    assert_eq!(anim.sample(ctx(15)).unwrap(), 10.0);
    assert_eq!(anim.sample(ctx(16)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(21)).unwrap(), 5.0);
}
