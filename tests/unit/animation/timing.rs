use super::*;
use crate::animation::anim::SampleCtx;
use crate::foundation::core::FrameIndex;

fn fps() -> Fps {
    Fps::new(10, 1).unwrap()
}

fn at(anim: &Anim<f64>, frame: u64) -> f64 {
    anim.sample(SampleCtx::new(FrameIndex(frame), fps())).unwrap()
}

#[test]
fn linear_loop_repeats_every_duration() {
    let anim = Timing::linear_loop(2.0)
        .animate(vec![0.0, 360.0], fps())
        .unwrap();
    assert_eq!(at(&anim, 0), 0.0);
    assert_eq!(at(&anim, 10), 180.0);
    assert_eq!(at(&anim, 20), 0.0);
    assert_eq!(at(&anim, 25), 90.0);
}

#[test]
fn delay_postpones_first_run_only() {
    let anim = Timing::linear_loop(1.0)
        .with_delay(2.0)
        .animate(vec![0.0, 10.0], fps())
        .unwrap();
    assert_eq!(at(&anim, 15), 0.0);
    assert_eq!(at(&anim, 25), 5.0);
    assert_eq!(at(&anim, 35), 5.0);
}

#[test]
fn repeat_delay_holds_last_value_between_runs() {
    let anim = Timing::linear_loop(1.0)
        .with_repeat_delay(1.0)
        .animate(vec![0.0, 10.0], fps())
        .unwrap();
    assert_eq!(at(&anim, 15), 10.0);
    assert_eq!(at(&anim, 20), 0.0);
}

#[test]
fn once_holds_final_value() {
    let anim = Timing::linear_loop(1.0)
        .once()
        .animate(vec![0.0, 10.0], fps())
        .unwrap();
    assert_eq!(at(&anim, 100), 10.0);
}

#[test]
fn invalid_timing_is_rejected() {
    assert!(Timing::linear_loop(0.0).validate().is_err());
    assert!(Timing::linear_loop(1.0).with_delay(-1.0).validate().is_err());
    assert!(
        Timing::linear_loop(1.0)
            .animate(Vec::<f64>::new(), fps())
            .is_err()
    );
}

#[test]
fn short_run_still_visits_every_value() {
    // One frame at 10 fps cannot hold five values; the run stretches to one frame per segment.
    let anim = Timing::new(0.1, Ease::Linear)
        .once()
        .animate(vec![0.0, 1.0, 2.0, 3.0, 4.0], fps())
        .unwrap();
    for frame in 0..5 {
        assert_eq!(at(&anim, frame), frame as f64);
    }
    assert_eq!(at(&anim, 9), 4.0);
}
