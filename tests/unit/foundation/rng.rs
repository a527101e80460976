use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn ranges_stay_in_bounds() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.range(0.3, 1.0);
        assert!((0.3..1.0).contains(&v));
        let i = rng.range_i64(-15, 15);
        assert!((-15..15).contains(&i));
    }
    assert_eq!(rng.range_i64(4, 4), 4);
}

#[test]
fn forks_are_independent_of_each_other() {
    let mut a = Rng64::fork(1, "starfield");
    let mut b = Rng64::fork(1, "orbit");
    assert_ne!(a.next_u64(), b.next_u64());

    let mut c = Rng64::fork(1, "starfield");
    let mut d = Rng64::fork(1, "starfield");
    assert_eq!(c.next_u64(), d.next_u64());
}
