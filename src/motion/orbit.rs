//! Elements circling a centre.
//!
//! [`OrbitSystem`] is the general form: a list of elements, each on its own circle with its
//! own period and direction. [`OrbitalSystem`] is the fixed three-planet preset with dashed
//! rings and a passing shooting star.

use kurbo::{Affine, Vec2};

use crate::{
    animation::anim::{Anim, SampleCtx},
    animation::ease::Ease,
    animation::timing::Timing,
    foundation::core::Fps,
    foundation::error::{StarbrightError, StarbrightResult},
    foundation::rng::Rng64,
    geometry::orbit::{Direction, container_size, orbit_position},
    geometry::palette::ColorToken,
    render::svg::SvgNode,
};

/// Seconds per revolution at speed 1.
pub const BASE_PERIOD_SECS: f64 = 20.0;

fn default_speed() -> f64 {
    1.0
}
fn default_element_color() -> ColorToken {
    ColorToken::Charcoal
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrbitElementSpec {
    pub id: String,
    /// Content shown on the element; emitted as its `<title>`.
    #[serde(default)]
    pub label: String,
    pub distance: f64,
    #[serde(default = "default_speed")]
    pub speed: f64,
    pub size: f64,
    /// Random in `[0, 360)` when absent.
    #[serde(default)]
    pub initial_angle_deg: Option<f64>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_element_color")]
    pub color: ColorToken,
}

impl OrbitElementSpec {
    pub fn new(id: impl Into<String>, distance: f64, speed: f64, size: f64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            distance,
            speed,
            size,
            initial_angle_deg: None,
            direction: Direction::Clockwise,
            color: default_element_color(),
        }
    }

    /// Seconds per revolution.
    pub fn duration_secs(&self) -> f64 {
        BASE_PERIOD_SECS / self.speed
    }

    pub fn validate(&self) -> StarbrightResult<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(StarbrightError::validation(format!(
                "orbit element '{}': speed must be finite and > 0",
                self.id
            )));
        }
        for (name, v) in [("distance", self.distance), ("size", self.size)] {
            if !v.is_finite() || v < 0.0 {
                return Err(StarbrightError::validation(format!(
                    "orbit element '{}': {name} must be finite and >= 0",
                    self.id
                )));
            }
        }
        if let Some(a) = self.initial_angle_deg
            && !a.is_finite()
        {
            return Err(StarbrightError::validation(format!(
                "orbit element '{}': initial_angle_deg must be finite",
                self.id
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitMode {
    /// Five keyframes a quarter turn apart, linearly interpolated.
    #[default]
    Keyframed,
    /// Exact circular motion.
    Continuous,
}

/// Five points a quarter turn apart, the last repeating the first.
pub fn orbit_keyframes(
    distance: f64,
    initial_angle_deg: f64,
    direction: Direction,
) -> [Vec2; 5] {
    let step = 90.0 * direction.sign();
    std::array::from_fn(|k| {
        let k = if k == 4 { 0 } else { k };
        orbit_position(distance, initial_angle_deg + k as f64 * step)
    })
}

/// An orbiting element with its random start angle and delay rolled.
#[derive(Clone, Debug)]
pub struct Orbit {
    pub spec: OrbitElementSpec,
    pub mode: OrbitMode,
    pub initial_angle_deg: f64,
    pub delay_secs: f64,
    position: Anim<Vec2>,
    rotation: Anim<f64>,
}

impl Orbit {
    pub fn resolve(
        spec: OrbitElementSpec,
        mode: OrbitMode,
        fps: Fps,
        rng: &mut Rng64,
    ) -> StarbrightResult<Self> {
        spec.validate()?;
        let initial_angle_deg = spec
            .initial_angle_deg
            .unwrap_or_else(|| rng.range(0.0, 360.0));
        let delay_secs = rng.range(0.0, 2.0);
        let timing = Timing::linear_loop(spec.duration_secs()).with_delay(delay_secs);

        let keys = orbit_keyframes(spec.distance, initial_angle_deg, spec.direction);
        let position = timing.animate(keys.to_vec(), fps)?;
        let rotation = timing.animate(vec![0.0, 360.0 * spec.direction.sign()], fps)?;
        tracing::debug!(id = %spec.id, initial_angle_deg, delay_secs, "orbit resolved");
        Ok(Self {
            spec,
            mode,
            initial_angle_deg,
            delay_secs,
            position,
            rotation,
        })
    }

    /// Fraction of the current revolution in continuous mode; `0` during the start delay.
    fn progress(&self, ctx: SampleCtx) -> f64 {
        let t = ctx.fps.frames_to_secs(ctx.frame.0) - self.delay_secs;
        if t <= 0.0 {
            return 0.0;
        }
        (t / self.spec.duration_secs()).fract()
    }

    /// Offset from the orbit centre.
    pub fn position_at(&self, ctx: SampleCtx) -> StarbrightResult<Vec2> {
        match self.mode {
            OrbitMode::Keyframed => self.position.sample(ctx),
            OrbitMode::Continuous => Ok(orbit_position(
                self.spec.distance,
                self.initial_angle_deg + self.spec.direction.sign() * 360.0 * self.progress(ctx),
            )),
        }
    }

    /// Self-rotation of the element in degrees.
    pub fn rotation_at(&self, ctx: SampleCtx) -> StarbrightResult<f64> {
        match self.mode {
            OrbitMode::Keyframed => self.rotation.sample(ctx),
            OrbitMode::Continuous => {
                Ok(self.spec.direction.sign() * 360.0 * self.progress(ctx))
            }
        }
    }

    pub fn initial_position(&self) -> Vec2 {
        orbit_position(self.spec.distance, self.initial_angle_deg)
    }
}

fn default_center_size() -> f64 {
    80.0
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrbitSystemSpec {
    pub elements: Vec<OrbitElementSpec>,
    #[serde(default = "default_center_size")]
    pub center_size: f64,
    #[serde(default)]
    pub center_color: Option<ColorToken>,
    #[serde(default)]
    pub mode: OrbitMode,
}

impl OrbitSystemSpec {
    /// Element ids must be unique within the system.
    pub fn validate(&self) -> StarbrightResult<()> {
        if !self.center_size.is_finite() || self.center_size < 0.0 {
            return Err(StarbrightError::validation(
                "center_size must be finite and >= 0",
            ));
        }
        let mut seen = std::collections::BTreeSet::new();
        for e in &self.elements {
            if !seen.insert(e.id.as_str()) {
                return Err(StarbrightError::validation(format!(
                    "duplicate orbit element id '{}'",
                    e.id
                )));
            }
            e.validate()?;
        }
        Ok(())
    }
}

/// Element-list orbits around an optional centre.
#[derive(Clone, Debug)]
pub struct OrbitSystem {
    pub spec: OrbitSystemSpec,
    pub orbits: Vec<Orbit>,
}

impl OrbitSystem {
    #[tracing::instrument(skip_all, fields(elements = spec.elements.len()))]
    pub fn resolve(spec: OrbitSystemSpec, fps: Fps, rng: &mut Rng64) -> StarbrightResult<Self> {
        let orbits = spec
            .elements
            .iter()
            .cloned()
            .map(|e| Orbit::resolve(e, spec.mode, fps, rng))
            .collect::<StarbrightResult<Vec<_>>>()?;
        Ok(Self { spec, orbits })
    }

    /// Side of the square box that holds every element.
    pub fn container_size(&self) -> f64 {
        container_size(self.spec.elements.iter().map(|e| (e.distance, e.size)))
    }

    /// Draw the system inside its box; with `animate == false` elements rest at their start angles.
    ///
    /// Each element group gets the id `{id_prefix}-{element id}`.
    pub fn to_node(
        &self,
        id_prefix: &str,
        ctx: SampleCtx,
        animate: bool,
    ) -> StarbrightResult<SvgNode> {
        let c = self.container_size() / 2.0;
        let mut root = SvgNode::group();

        for o in &self.orbits {
            root = root.child(
                SvgNode::new("circle")
                    .num("cx", c)
                    .num("cy", c)
                    .num("r", o.spec.distance)
                    .attr("fill", "none")
                    .attr("stroke", ColorToken::Charcoal.hex())
                    .num("stroke-opacity", 0.1),
            );
        }
        if let Some(color) = self.spec.center_color {
            root = root.child(
                SvgNode::new("circle")
                    .num("cx", c)
                    .num("cy", c)
                    .num("r", self.spec.center_size / 2.0)
                    .attr("fill", color.hex()),
            );
        }
        for o in &self.orbits {
            let (pos, rot) = if animate {
                (o.position_at(ctx)?, o.rotation_at(ctx)?)
            } else {
                (o.initial_position(), 0.0)
            };
            let mut element = SvgNode::new("circle")
                .num("cx", 0.0)
                .num("cy", 0.0)
                .num("r", o.spec.size / 2.0)
                .attr("fill", o.spec.color.hex());
            if !o.spec.label.is_empty() {
                element = element.child(SvgNode::new("title").text(&o.spec.label));
            }
            let place = Affine::translate(Vec2::new(c, c) + pos) * Affine::rotate(rot.to_radians());
            root = root.child(
                SvgNode::group()
                    .attr("id", format!("{id_prefix}-{}", o.spec.id))
                    .child(element)
                    .transformed(place),
            );
        }
        Ok(root)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemSize {
    Sm,
    #[default]
    Md,
    Lg,
}

struct SizeTable {
    wrapper: f64,
    center: f64,
    planets: [f64; 3],
    orbit_radii: [f64; 3],
}

impl SystemSize {
    fn table(self) -> SizeTable {
        match self {
            Self::Sm => SizeTable {
                wrapper: 128.0,
                center: 40.0,
                planets: [12.0, 16.0, 12.0],
                orbit_radii: [20.0, 32.0, 48.0],
            },
            Self::Md => SizeTable {
                wrapper: 192.0,
                center: 64.0,
                planets: [16.0, 24.0, 20.0],
                orbit_radii: [30.0, 48.0, 72.0],
            },
            Self::Lg => SizeTable {
                wrapper: 256.0,
                center: 80.0,
                planets: [24.0, 32.0, 28.0],
                orbit_radii: [90.0, 120.0, 160.0],
            },
        }
    }

    pub fn wrapper_px(self) -> f64 {
        self.table().wrapper
    }

    pub fn center_px(self) -> f64 {
        self.table().center
    }

    pub fn orbit_radii(self) -> [f64; 3] {
        self.table().orbit_radii
    }

    pub fn planet_diameters(self) -> [f64; 3] {
        self.table().planets
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl OrbitSpeed {
    /// Seconds per revolution for each of the three planets.
    pub fn periods_secs(self) -> [f64; 3] {
        match self {
            Self::Slow => [30.0, 45.0, 60.0],
            Self::Medium => [20.0, 30.0, 40.0],
            Self::Fast => [10.0, 15.0, 20.0],
        }
    }
}

pub const RING_COLORS: [ColorToken; 3] = [ColorToken::Teal, ColorToken::Coral, ColorToken::Aqua];

fn default_planet_colors() -> Vec<ColorToken> {
    vec![ColorToken::Charcoal, ColorToken::Teal, ColorToken::Aqua]
}
fn default_center_color() -> ColorToken {
    ColorToken::Mustard
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrbitalSystemSpec {
    #[serde(default)]
    pub size: SystemSize,
    #[serde(default)]
    pub speed: OrbitSpeed,
    #[serde(default = "default_center_color")]
    pub center_color: ColorToken,
    /// One planet per colour, at most three.
    #[serde(default = "default_planet_colors")]
    pub planet_colors: Vec<ColorToken>,
}

impl Default for OrbitalSystemSpec {
    fn default() -> Self {
        Self {
            size: SystemSize::Md,
            speed: OrbitSpeed::Medium,
            center_color: default_center_color(),
            planet_colors: default_planet_colors(),
        }
    }
}

/// The three-planet preset.
#[derive(Clone, Debug)]
pub struct OrbitalSystem {
    pub spec: OrbitalSystemSpec,
    planet_angles: Vec<Anim<f64>>,
    shooting_star: Anim<Vec2>,
    shooting_star_opacity: Anim<f64>,
}

impl OrbitalSystem {
    pub fn new(spec: OrbitalSystemSpec, fps: Fps) -> StarbrightResult<Self> {
        let periods = spec.speed.periods_secs();
        let planet_angles = periods
            .iter()
            .take(spec.planet_colors.len())
            .enumerate()
            .map(|(i, &period)| {
                Timing::linear_loop(period)
                    .with_delay(i as f64 * 2.0)
                    .animate(vec![0.0, 360.0], fps)
            })
            .collect::<StarbrightResult<Vec<_>>>()?;

        let streak = Timing::new(2.0, Ease::EaseOut).with_repeat_delay(5.0);
        Ok(Self {
            planet_angles,
            shooting_star: streak
                .animate(vec![Vec2::new(10.0, 10.0), Vec2::new(80.0, 80.0)], fps)?,
            shooting_star_opacity: streak.animate(vec![0.0, 1.0, 0.0], fps)?,
            spec,
        })
    }

    pub fn planet_count(&self) -> usize {
        self.planet_angles.len()
    }

    /// Orbit angle of planet `i` in degrees; planets start at angle 0.
    pub fn planet_angle(&self, i: usize, ctx: SampleCtx) -> StarbrightResult<f64> {
        self.planet_angles
            .get(i)
            .ok_or_else(|| StarbrightError::validation(format!("no planet {i}")))?
            .sample(ctx)
    }

    /// Offset of planet `i` from the wrapper centre.
    pub fn planet_position(&self, i: usize, ctx: SampleCtx) -> StarbrightResult<Vec2> {
        let radius = self.spec.size.orbit_radii()[i.min(2)];
        Ok(orbit_position(radius, self.planet_angle(i, ctx)?))
    }

    /// Shooting star position as percentages of the wrapper, and its opacity.
    pub fn shooting_star_at(&self, ctx: SampleCtx) -> StarbrightResult<(Vec2, f64)> {
        Ok((
            self.shooting_star.sample(ctx)?,
            self.shooting_star_opacity.sample(ctx)?,
        ))
    }

    pub fn to_node(&self, ctx: SampleCtx, animate: bool) -> StarbrightResult<SvgNode> {
        let size = self.spec.size;
        let w = size.wrapper_px();
        let c = w / 2.0;
        let center = size.center_px();
        let mut root = SvgNode::group()
            .child(
                SvgNode::new("circle")
                    .num("cx", c)
                    .num("cy", c)
                    .num("r", center / 2.0)
                    .attr("fill", self.spec.center_color.hex()),
            )
            .child(
                SvgNode::new("circle")
                    .num("cx", c)
                    .num("cy", c)
                    .num("r", center * 0.375)
                    .attr("fill", "#FFFFFF")
                    .num("opacity", 0.3),
            );

        let rings = size.orbit_radii().into_iter().zip(RING_COLORS);
        for (i, (radius, color)) in rings.enumerate() {
            let ring = SvgNode::new("circle")
                .num("cx", 0.0)
                .num("cy", 0.0)
                .num("r", radius)
                .attr("fill", "none")
                .attr("stroke", color.hex())
                .num("stroke-width", 2.0)
                .attr("stroke-dasharray", "6 4")
                .num("stroke-opacity", 0.3);
            let tilt = Affine::translate((c, c)) * Affine::rotate((i as f64 * 15.0).to_radians());
            root = root.child(ring.transformed(tilt));
        }

        let diameters = size.planet_diameters();
        let planets = self.spec.planet_colors.iter().take(self.planet_count());
        for (i, color) in planets.enumerate() {
            let pos = if animate {
                self.planet_position(i, ctx)?
            } else {
                orbit_position(size.orbit_radii()[i], 0.0)
            };
            let mut planet = SvgNode::group().child(
                SvgNode::new("circle")
                    .num("cx", 0.0)
                    .num("cy", 0.0)
                    .num("r", diameters[i] / 2.0)
                    .attr("fill", color.hex()),
            );
            if i == 1 {
                planet = planet.child(
                    SvgNode::new("ellipse")
                        .num("rx", 16.0)
                        .num("ry", 8.0)
                        .attr("fill", "none")
                        .attr("stroke", "#FFFFFF")
                        .num("stroke-opacity", 0.4)
                        .transformed(Affine::rotate(12f64.to_radians())),
                );
            }
            root = root.child(planet.transformed(Affine::translate(Vec2::new(c, c) + pos)));
        }

        if animate {
            let (pct, opacity) = self.shooting_star_at(ctx)?;
            root = root.child(
                SvgNode::new("rect")
                    .num("x", pct.x / 100.0 * w)
                    .num("y", pct.y / 100.0 * w)
                    .num("width", 8.0)
                    .num("height", 4.0)
                    .num("rx", 2.0)
                    .attr("fill", "#FFFFFF")
                    .num("opacity", 0.7 * opacity),
            );
        }
        Ok(root)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/orbit.rs"]
mod tests;
