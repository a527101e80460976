//! Atomic loading indicator: a pulsing core, a faint ring and three particles
//! circling at staggered speeds.

use kurbo::{Affine, Vec2};

use crate::{
    animation::anim::{Anim, SampleCtx},
    animation::ease::Ease,
    animation::timing::Timing,
    foundation::core::Fps,
    foundation::error::StarbrightResult,
    geometry::orbit::orbit_position,
    geometry::palette::ColorToken,
    render::svg::SvgNode,
};

pub const PARTICLE_COUNT: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Pixel measurements for one [`LoaderSize`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderMetrics {
    /// Side of the square loader.
    pub width: f64,
    /// Core radius.
    pub core: f64,
    /// Ring stroke width.
    pub orbit: f64,
    /// Particle diameter.
    pub particle: f64,
}

impl LoaderSize {
    pub fn metrics(self) -> LoaderMetrics {
        let (width, core, orbit, particle) = match self {
            Self::Sm => (32.0, 4.0, 2.0, 4.0),
            Self::Md => (48.0, 6.0, 2.0, 6.0),
            Self::Lg => (64.0, 8.0, 3.0, 8.0),
        };
        LoaderMetrics {
            width,
            core,
            orbit,
            particle,
        }
    }
}

impl LoaderMetrics {
    /// Distance from the centre to particle `i`; inner particles sit 2px further in each.
    pub fn particle_orbit(&self, i: usize) -> f64 {
        self.width / 2.0 - self.particle / 2.0 - 2.0 * i as f64
    }
}

fn default_color() -> ColorToken {
    ColorToken::Orange
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AtomicLoaderSpec {
    #[serde(default)]
    pub size: LoaderSize,
    #[serde(default = "default_color")]
    pub color: ColorToken,
}

impl Default for AtomicLoaderSpec {
    fn default() -> Self {
        Self {
            size: LoaderSize::Md,
            color: default_color(),
        }
    }
}

/// Everything that moves, sampled at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderPose {
    pub core_scale: f64,
    pub core_opacity: f64,
    pub particle_angles_deg: [f64; PARTICLE_COUNT],
}

impl LoaderPose {
    pub const REST: Self = Self {
        core_scale: 1.0,
        core_opacity: 0.8,
        particle_angles_deg: [0.0; PARTICLE_COUNT],
    };
}

/// Particle `i` completes a turn every `3 + 1.5 * i` seconds.
pub fn particle_period_secs(i: usize) -> f64 {
    3.0 + 1.5 * i as f64
}

#[derive(Clone, Debug)]
pub struct AtomicLoader {
    pub spec: AtomicLoaderSpec,
    core_scale: Anim<f64>,
    core_opacity: Anim<f64>,
    particle_angles: Vec<Anim<f64>>,
}

impl AtomicLoader {
    pub fn new(spec: AtomicLoaderSpec, fps: Fps) -> StarbrightResult<Self> {
        let pulse = Timing::new(2.0, Ease::EaseInOut);
        let particle_angles = (0..PARTICLE_COUNT)
            .map(|i| {
                Timing::linear_loop(particle_period_secs(i)).animate(vec![0.0, 360.0], fps)
            })
            .collect::<StarbrightResult<Vec<_>>>()?;
        Ok(Self {
            spec,
            core_scale: pulse.animate(vec![1.0, 1.2, 1.0], fps)?,
            core_opacity: pulse.animate(vec![0.8, 1.0, 0.8], fps)?,
            particle_angles,
        })
    }

    pub fn sample(&self, ctx: SampleCtx) -> StarbrightResult<LoaderPose> {
        let mut particle_angles_deg = [0.0; PARTICLE_COUNT];
        for (angle, anim) in particle_angles_deg.iter_mut().zip(&self.particle_angles) {
            *angle = anim.sample(ctx)?;
        }
        Ok(LoaderPose {
            core_scale: self.core_scale.sample(ctx)?,
            core_opacity: self.core_opacity.sample(ctx)?,
            particle_angles_deg,
        })
    }

    /// Draw the loader in a `width`×`width` box; with `animate == false` it shows [`LoaderPose::REST`].
    pub fn to_node(&self, ctx: SampleCtx, animate: bool) -> StarbrightResult<SvgNode> {
        let pose = if animate {
            self.sample(ctx)?
        } else {
            LoaderPose::REST
        };
        let m = self.spec.size.metrics();
        let fill = self.spec.color.hex();
        let c = m.width / 2.0;

        let core = SvgNode::new("circle")
            .num("r", m.core)
            .attr("fill", &fill)
            .num("opacity", pose.core_opacity)
            .transformed(Affine::translate((c, c)) * Affine::scale(pose.core_scale));
        let ring = SvgNode::new("circle")
            .num("cx", c)
            .num("cy", c)
            .num("r", c - m.orbit / 2.0)
            .attr("fill", "none")
            .attr("stroke", &fill)
            .num("stroke-width", m.orbit)
            .num("opacity", 0.2);
        let particles = pose.particle_angles_deg.iter().enumerate().map(|(i, &angle)| {
            let pos = Vec2::new(c, c) + orbit_position(m.particle_orbit(i), angle);
            SvgNode::new("circle")
                .num("cx", pos.x)
                .num("cy", pos.y)
                .num("r", m.particle / 2.0)
                .attr("fill", &fill)
        });

        Ok(SvgNode::group()
            .attr("role", "status")
            .attr("aria-label", "Loading")
            .child(SvgNode::new("title").text("Loading..."))
            .child(core)
            .child(ring)
            .children(particles))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/atomic.rs"]
mod tests;
