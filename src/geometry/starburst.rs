use std::f64::consts::PI;

use kurbo::{Affine, BezPath, Point};

use crate::{
    animation::anim::{Anim, SampleCtx},
    animation::ease::Ease,
    animation::timing::Timing,
    foundation::core::Fps,
    foundation::error::{StarbrightError, StarbrightResult},
    geometry::palette::ColorToken,
    geometry::path_data::to_path_data,
    render::svg::SvgNode,
};

/// Closed polygon alternating between `outer_radius` and `inner_radius`.
///
/// Walks `2 * point_count` vertices at steps of `PI / point_count`, starting on the
/// outer radius at angle 0. `point_count == 0` yields an empty path.
pub fn starburst_path(point_count: usize, inner_radius: f64, outer_radius: f64) -> BezPath {
    let mut path = BezPath::new();
    if point_count == 0 {
        return path;
    }
    let step = PI / point_count as f64;
    for i in 0..point_count * 2 {
        let r = if i % 2 == 0 {
            outer_radius
        } else {
            inner_radius
        };
        let a = i as f64 * step;
        let p = Point::new(r * a.cos(), r * a.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

pub fn starburst_path_data(point_count: usize, inner_radius: f64, outer_radius: f64) -> String {
    to_path_data(&starburst_path(point_count, inner_radius, outer_radius))
}

/// Half-extent of the starburst drawing space (`viewBox="-100 -100 200 200"`).
const HALF_EXTENT: f64 = 100.0;

fn default_size() -> f64 {
    200.0
}
fn default_point_count() -> usize {
    12
}
fn default_inner() -> f64 {
    40.0
}
fn default_outer() -> f64 {
    80.0
}
fn default_color() -> ColorToken {
    ColorToken::Mustard
}
fn default_true() -> bool {
    true
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StarburstSpec {
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_point_count")]
    pub point_count: usize,
    #[serde(default = "default_inner")]
    pub inner_radius: f64,
    #[serde(default = "default_outer")]
    pub outer_radius: f64,
    #[serde(default = "default_color")]
    pub color: ColorToken,
    #[serde(default)]
    pub secondary_color: Option<ColorToken>,
    #[serde(default = "default_true")]
    pub animate: bool,
}

impl Default for StarburstSpec {
    fn default() -> Self {
        Self {
            size: default_size(),
            point_count: default_point_count(),
            inner_radius: default_inner(),
            outer_radius: default_outer(),
            color: default_color(),
            secondary_color: None,
            animate: true,
        }
    }
}

/// Sampled animation state of a starburst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarburstPose {
    pub rotation_deg: f64,
    pub scale: f64,
    pub secondary_rotation_deg: f64,
}

impl StarburstPose {
    pub const REST: Self = Self {
        rotation_deg: 0.0,
        scale: 1.0,
        secondary_rotation_deg: 0.0,
    };
}

/// Looping tracks driving a starburst: slow spin, gentle pulse, counter-spin of the inner burst.
#[derive(Clone, Debug)]
pub struct StarburstMotion {
    pub rotation: Anim<f64>,
    pub pulse: Anim<f64>,
    pub secondary_rotation: Anim<f64>,
}

impl StarburstMotion {
    pub fn new(fps: Fps) -> StarbrightResult<Self> {
        Ok(Self {
            rotation: Timing::linear_loop(60.0).animate(vec![0.0, 360.0], fps)?,
            pulse: Timing::new(3.0, Ease::EaseInOut).animate(vec![1.0, 1.05, 1.0], fps)?,
            secondary_rotation: Timing::linear_loop(45.0).animate(vec![0.0, -360.0], fps)?,
        })
    }

    pub fn sample(&self, ctx: SampleCtx) -> StarbrightResult<StarburstPose> {
        Ok(StarburstPose {
            rotation_deg: self.rotation.sample(ctx)?,
            scale: self.pulse.sample(ctx)?,
            secondary_rotation_deg: self.secondary_rotation.sample(ctx)?,
        })
    }
}

impl StarburstSpec {
    pub fn validate(&self) -> StarbrightResult<()> {
        for (name, v) in [
            ("size", self.size),
            ("inner_radius", self.inner_radius),
            ("outer_radius", self.outer_radius),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(StarbrightError::validation(format!(
                    "starburst {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    pub fn path(&self) -> BezPath {
        starburst_path(self.point_count, self.inner_radius, self.outer_radius)
    }

    /// The inner, counter-rotating burst drawn when a secondary colour is set.
    pub fn secondary_path(&self) -> BezPath {
        starburst_path(
            self.point_count,
            self.inner_radius * 0.3,
            self.inner_radius * 0.8,
        )
    }

    pub fn center_radius(&self) -> f64 {
        self.inner_radius * 0.4
    }

    /// The burst in its own drawing space, centred on the origin.
    pub fn burst_node(&self, pose: StarburstPose) -> SvgNode {
        let pose = if self.animate {
            pose
        } else {
            StarburstPose::REST
        };
        let spin = Affine::rotate(pose.rotation_deg.to_radians()) * Affine::scale(pose.scale);

        let mut group = SvgNode::group().child(
            SvgNode::new("path")
                .attr("d", to_path_data(&self.path()))
                .attr("fill", self.color.hex()),
        );
        if let Some(secondary) = self.secondary_color {
            group = group.child(
                SvgNode::new("path")
                    .attr("d", to_path_data(&self.secondary_path()))
                    .attr("fill", secondary.hex())
                    .transformed(Affine::rotate(pose.secondary_rotation_deg.to_radians())),
            );
        }
        let center_fill = self
            .secondary_color
            .map_or_else(|| "#FFFFFF".to_owned(), ColorToken::hex);
        group
            .child(
                SvgNode::new("circle")
                    .num("cx", 0.0)
                    .num("cy", 0.0)
                    .num("r", self.center_radius())
                    .attr("fill", center_fill),
            )
            .transformed(spin)
    }

    /// Draw the burst into a `size`×`size` box whose top-left corner is the origin.
    pub fn to_node(&self, pose: StarburstPose) -> SvgNode {
        let half = self.size / 2.0;
        self.burst_node(pose)
            .transformed(Affine::translate((half, half)) * Affine::scale(half / HALF_EXTENT))
    }

    pub fn to_svg(&self, pose: StarburstPose) -> String {
        SvgNode::new("svg")
            .num("width", self.size)
            .num("height", self.size)
            .attr("viewBox", "-100 -100 200 200")
            .child(self.burst_node(pose))
            .to_document()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/starburst.rs"]
mod tests;
