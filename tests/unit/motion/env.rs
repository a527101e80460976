use super::*;

#[test]
fn defaults_animate_at_top_of_page() {
    let env = Environment::new(Canvas::new(1280, 720));
    assert_eq!(env.scroll_y, 0.0);
    assert!(env.animates());
}

#[test]
fn reduced_motion_disables_animation() {
    let env = Environment::new(Canvas::new(1280, 720))
        .with_scroll(300.0)
        .with_reduced_motion(true);
    assert_eq!(env.scroll_y, 300.0);
    assert!(!env.animates());
}
