use super::*;
use crate::foundation::core::FrameIndex;

fn ctx(frame: u64) -> SampleCtx {
    SampleCtx::new(FrameIndex(frame), Fps::default())
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).hypot() < 1e-9
}

fn element(angle: Option<f64>, direction: Direction) -> OrbitElementSpec {
    OrbitElementSpec {
        initial_angle_deg: angle,
        direction,
        ..OrbitElementSpec::new("moon", 50.0, 2.0, 10.0)
    }
}

#[test]
fn keyframes_close_the_loop() {
    let keys = orbit_keyframes(50.0, 30.0, Direction::Clockwise);
    assert!(close(keys[0], keys[4]));
    assert!(close(keys[1], orbit_position(50.0, 120.0)));
    assert!(close(keys[3], orbit_position(50.0, 300.0)));

    let ccw = orbit_keyframes(50.0, 30.0, Direction::Counterclockwise);
    assert!(close(ccw[1], orbit_position(50.0, -60.0)));
    assert!(close(ccw[0], ccw[4]));
}

#[test]
fn duration_is_twenty_over_speed() {
    assert_eq!(element(None, Direction::Clockwise).duration_secs(), 10.0);
    assert_eq!(OrbitElementSpec::new("x", 1.0, 0.5, 1.0).duration_secs(), 40.0);
}

#[test]
fn resolved_orbit_rolls_angle_and_delay() {
    let mut rng = Rng64::new(3);
    for _ in 0..100 {
        let o = Orbit::resolve(
            element(None, Direction::Clockwise),
            OrbitMode::Keyframed,
            Fps::default(),
            &mut rng,
        )
        .unwrap();
        assert!((0.0..360.0).contains(&o.initial_angle_deg));
        assert!((0.0..2.0).contains(&o.delay_secs));
    }

    let fixed = Orbit::resolve(
        element(Some(0.0), Direction::Clockwise),
        OrbitMode::Keyframed,
        Fps::default(),
        &mut rng,
    )
    .unwrap();
    assert_eq!(fixed.initial_angle_deg, 0.0);
}

#[test]
fn same_seed_same_layout() {
    let a = Orbit::resolve(
        element(None, Direction::Clockwise),
        OrbitMode::Keyframed,
        Fps::default(),
        &mut Rng64::new(77),
    )
    .unwrap();
    let b = Orbit::resolve(
        element(None, Direction::Clockwise),
        OrbitMode::Keyframed,
        Fps::default(),
        &mut Rng64::new(77),
    )
    .unwrap();
    assert_eq!(a.initial_angle_deg, b.initial_angle_deg);
    assert_eq!(a.delay_secs, b.delay_secs);
}

#[test]
fn keyframed_orbit_hits_quarter_points() {
    let o = Orbit::resolve(
        element(Some(0.0), Direction::Clockwise),
        OrbitMode::Keyframed,
        Fps::default(),
        &mut Rng64::new(1),
    )
    .unwrap();
    let lead = Fps::default().secs_to_frames_round(o.delay_secs);
    // 10 s per turn at 60 fps: a quarter turn every 150 frames.
    assert!(close(o.position_at(ctx(0)).unwrap(), Vec2::new(50.0, 0.0)));
    assert!(close(o.position_at(ctx(lead + 150)).unwrap(), Vec2::new(0.0, 50.0)));
    assert!(close(o.position_at(ctx(lead + 300)).unwrap(), Vec2::new(-50.0, 0.0)));
    assert!(close(o.position_at(ctx(lead + 600)).unwrap(), Vec2::new(50.0, 0.0)));
    // Between keys the path cuts the corner.
    assert!(o.position_at(ctx(lead + 75)).unwrap().hypot() < 50.0);
    assert!((o.rotation_at(ctx(lead + 300)).unwrap() - 180.0).abs() < 1e-9);
}

#[test]
fn continuous_orbit_stays_on_circle() {
    let o = Orbit::resolve(
        element(Some(90.0), Direction::Counterclockwise),
        OrbitMode::Continuous,
        Fps::default(),
        &mut Rng64::new(1),
    )
    .unwrap();
    assert!(close(o.position_at(ctx(0)).unwrap(), Vec2::new(0.0, 50.0)));
    let lead = o.delay_secs;
    for f in 0..600 {
        let p = o.position_at(ctx(f)).unwrap();
        assert!((p.hypot() - 50.0).abs() < 1e-9);
    }
    // A quarter turn after the delay, counterclockwise from 90 degrees lands on 0 degrees.
    let frame = ((lead + 2.5) * 60.0).round() as u64;
    let p = o.position_at(ctx(frame)).unwrap();
    assert!((p - Vec2::new(50.0, 0.0)).hypot() < 2.0);
    assert!(o.rotation_at(ctx(frame)).unwrap() < 0.0);
}

#[test]
fn rejects_non_positive_speed() {
    let spec = OrbitElementSpec::new("x", 10.0, 0.0, 4.0);
    assert!(spec.validate().is_err());
    let err = Orbit::resolve(spec, OrbitMode::Keyframed, Fps::default(), &mut Rng64::new(0));
    assert!(err.is_err());
}

#[test]
fn system_container_and_static_frame() {
    let spec = OrbitSystemSpec {
        elements: vec![
            OrbitElementSpec {
                label: "Design".to_owned(),
                initial_angle_deg: Some(0.0),
                ..OrbitElementSpec::new("a", 30.0, 1.0, 16.0)
            },
            OrbitElementSpec {
                initial_angle_deg: Some(180.0),
                ..OrbitElementSpec::new("b", 72.0, 2.0, 20.0)
            },
        ],
        center_size: 80.0,
        center_color: Some(ColorToken::Mustard),
        mode: OrbitMode::Keyframed,
    };
    let sys = OrbitSystem::resolve(spec, Fps::default(), &mut Rng64::new(2)).unwrap();
    assert_eq!(sys.container_size(), 184.0);

    let still = sys.to_node("team", ctx(500), false).unwrap().to_markup();
    assert!(still.contains(r#"<g id="team-a">"#));
    assert!(still.contains(r#"<g id="team-b">"#));
    assert!(still.contains("matrix(1,0,0,1,122,92)"));
    assert!(still.contains("matrix(1,0,0,1,20,92)"));
    assert!(still.contains("<title>Design</title>"));
    assert!(still.contains(r##"r="40" fill="#F2C849""##));
}

#[test]
fn preset_tables() {
    assert_eq!(SystemSize::Sm.orbit_radii(), [20.0, 32.0, 48.0]);
    assert_eq!(SystemSize::Md.orbit_radii(), [30.0, 48.0, 72.0]);
    assert_eq!(SystemSize::Lg.orbit_radii(), [90.0, 120.0, 160.0]);
    assert_eq!(SystemSize::Md.planet_diameters(), [16.0, 24.0, 20.0]);
    assert_eq!(SystemSize::Lg.wrapper_px(), 256.0);
    assert_eq!(SystemSize::Sm.center_px(), 40.0);
    assert_eq!(OrbitSpeed::Slow.periods_secs(), [30.0, 45.0, 60.0]);
    assert_eq!(OrbitSpeed::Fast.periods_secs(), [10.0, 15.0, 20.0]);
}

#[test]
fn preset_planets_start_staggered() {
    let sys = OrbitalSystem::new(OrbitalSystemSpec::default(), Fps::default()).unwrap();
    assert_eq!(sys.planet_count(), 3);
    // Planet 1 waits 2 s, planet 2 waits 4 s.
    assert_eq!(sys.planet_angle(1, ctx(119)).unwrap(), 0.0);
    assert_eq!(sys.planet_angle(2, ctx(239)).unwrap(), 0.0);
    // Planet 0 turns once every 20 s at medium speed.
    assert!((sys.planet_angle(0, ctx(300)).unwrap() - 90.0).abs() < 1e-9);
    assert!(close(sys.planet_position(0, ctx(300)).unwrap(), Vec2::new(0.0, 30.0)));
    assert!(sys.planet_angle(3, ctx(0)).is_err());
}

#[test]
fn preset_with_fewer_colours_draws_fewer_planets() {
    let spec = OrbitalSystemSpec {
        planet_colors: vec![ColorToken::Gold],
        ..OrbitalSystemSpec::default()
    };
    let sys = OrbitalSystem::new(spec, Fps::default()).unwrap();
    assert_eq!(sys.planet_count(), 1);
    let markup = sys.to_node(ctx(0), true).unwrap().to_markup();
    assert_eq!(markup.matches("<ellipse").count(), 0);
    assert_eq!(markup.matches("stroke-dasharray").count(), 3);
}

#[test]
fn preset_shooting_star_eases_out_and_hides_when_static() {
    let sys = OrbitalSystem::new(OrbitalSystemSpec::default(), Fps::default()).unwrap();
    let (start, o0) = sys.shooting_star_at(ctx(0)).unwrap();
    assert_eq!(start, Vec2::new(10.0, 10.0));
    assert_eq!(o0, 0.0);
    let (_, peak) = sys.shooting_star_at(ctx(60)).unwrap();
    assert_eq!(peak, 1.0);
    // Ease-out runs ahead of linear progress.
    let (quarter, _) = sys.shooting_star_at(ctx(30)).unwrap();
    assert!(quarter.x > 10.0 + 70.0 * 0.25);

    let still = sys.to_node(ctx(60), false).unwrap().to_markup();
    assert!(!still.contains("<rect"));
    assert!(sys.to_node(ctx(60), true).unwrap().to_markup().contains("<rect"));
}

#[test]
fn element_ids_must_be_unique() {
    let mut spec = OrbitSystemSpec {
        elements: vec![
            OrbitElementSpec::new("a", 30.0, 1.0, 16.0),
            OrbitElementSpec::new("b", 40.0, 1.0, 16.0),
        ],
        center_size: 80.0,
        center_color: None,
        mode: OrbitMode::Keyframed,
    };
    spec.validate().unwrap();

    spec.elements[1].id = "a".to_owned();
    let err = spec.validate().unwrap_err().to_string();
    assert!(err.contains("duplicate orbit element id 'a'"), "{err}");
}
