use super::*;
use crate::foundation::core::FrameIndex;

fn ctx(frame: u64) -> SampleCtx {
    SampleCtx::new(FrameIndex(frame), Fps::default())
}

fn loader(size: LoaderSize) -> AtomicLoader {
    AtomicLoader::new(
        AtomicLoaderSpec {
            size,
            ..AtomicLoaderSpec::default()
        },
        Fps::default(),
    )
    .unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn size_table() {
    let sm = LoaderSize::Sm.metrics();
    assert_eq!((sm.width, sm.core, sm.orbit, sm.particle), (32.0, 4.0, 2.0, 4.0));
    let md = LoaderSize::Md.metrics();
    assert_eq!((md.width, md.core, md.orbit, md.particle), (48.0, 6.0, 2.0, 6.0));
    let lg = LoaderSize::Lg.metrics();
    assert_eq!((lg.width, lg.core, lg.orbit, lg.particle), (64.0, 8.0, 3.0, 8.0));

    assert_eq!(
        (0..3).map(|i| md.particle_orbit(i)).collect::<Vec<_>>(),
        vec![21.0, 19.0, 17.0]
    );
}

#[test]
fn defaults_are_medium_orange() {
    let spec: AtomicLoaderSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(spec, AtomicLoaderSpec::default());
    assert_eq!(spec.size, LoaderSize::Md);
    assert_eq!(spec.color, ColorToken::Orange);
}

#[test]
fn core_pulses_every_two_seconds() {
    let l = loader(LoaderSize::Md);
    let start = l.sample(ctx(0)).unwrap();
    assert!(close(start.core_scale, 1.0) && close(start.core_opacity, 0.8));

    let peak = l.sample(ctx(60)).unwrap();
    assert!(close(peak.core_scale, 1.2) && close(peak.core_opacity, 1.0));

    let again = l.sample(ctx(120)).unwrap();
    assert!(close(again.core_scale, 1.0) && close(again.core_opacity, 0.8));
}

#[test]
fn particles_orbit_at_staggered_speeds() {
    assert_eq!(
        (0..3).map(particle_period_secs).collect::<Vec<_>>(),
        vec![3.0, 4.5, 6.0]
    );
    let l = loader(LoaderSize::Md);
    // 90 frames is half a turn for the first particle, a third for the second and a quarter for the third.
    let pose = l.sample(ctx(90)).unwrap();
    assert!(close(pose.particle_angles_deg[0], 180.0));
    assert!(close(pose.particle_angles_deg[1], 120.0));
    assert!(close(pose.particle_angles_deg[2], 90.0));
}

#[test]
fn rest_pose_markup() {
    let l = loader(LoaderSize::Md);
    let still = l.to_node(ctx(90), false).unwrap().to_markup();
    assert_eq!(still, l.to_node(ctx(0), false).unwrap().to_markup());

    assert!(still.contains(r#"role="status""#));
    assert!(still.contains(r#"aria-label="Loading""#));
    assert!(still.contains("<title>Loading...</title>"));
    assert!(still.contains(r##"<g transform="matrix(1,0,0,1,24,24)"><circle r="6" fill="#F28C38" opacity="0.8"/></g>"##));
    assert!(still.contains(r##"<circle cx="24" cy="24" r="23" fill="none" stroke="#F28C38" stroke-width="2" opacity="0.2"/>"##));
    for cx in [45, 43, 41] {
        assert!(
            still.contains(&format!(r##"<circle cx="{cx}" cy="24" r="3" fill="#F28C38"/>"##)),
            "{cx}"
        );
    }
}

#[test]
fn animated_markup_moves_particles() {
    let l = loader(LoaderSize::Md);
    let moving = l.to_node(ctx(45), true).unwrap().to_markup();
    // A quarter turn puts the first particle straight below the centre.
    assert!(moving.contains(r##"<circle cx="24" cy="45" r="3" fill="#F28C38"/>"##));
    assert_ne!(moving, l.to_node(ctx(0), false).unwrap().to_markup());
}
