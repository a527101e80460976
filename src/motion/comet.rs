use kurbo::{Affine, Vec2};

use crate::{
    animation::anim::{Anim, SampleCtx},
    animation::ease::Ease,
    animation::timing::Timing,
    foundation::core::{Canvas, Fps, Transform2D},
    foundation::error::{StarbrightError, StarbrightResult},
    foundation::rng::Rng64,
    render::svg::SvgNode,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CometSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl CometSize {
    pub fn px(self) -> f64 {
        match self {
            Self::Sm => 24.0,
            Self::Md => 32.0,
            Self::Lg => 48.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CometPosition {
    #[default]
    Random,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Where a comet starts, as percentages of its host surface, and its tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub top_pct: f64,
    pub left_pct: f64,
    pub rotate_deg: f64,
}

impl CometPosition {
    /// Fixed placement, or a fresh random one for [`CometPosition::Random`].
    pub fn resolve(self, rng: &mut Rng64) -> Placement {
        let (top_pct, left_pct, rotate_deg) = match self {
            Self::TopLeft => (10.0, 0.0, -15.0),
            Self::TopRight => (10.0, 70.0, -15.0),
            Self::BottomLeft => (60.0, 0.0, -5.0),
            Self::BottomRight => (60.0, 70.0, -25.0),
            Self::Random => (
                rng.range_i64(10, 80) as f64,
                rng.range_i64(0, 20) as f64,
                rng.range_i64(-15, 15) as f64,
            ),
        };
        Placement {
            top_pct,
            left_pct,
            rotate_deg,
        }
    }
}

fn default_duration() -> f64 {
    6.0
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CometSpec {
    #[serde(default)]
    pub size: CometSize,
    #[serde(default)]
    pub position: CometPosition,
    #[serde(default)]
    pub delay_secs: f64,
    #[serde(default = "default_duration")]
    pub duration_secs: f64,
}

impl Default for CometSpec {
    fn default() -> Self {
        Self {
            size: CometSize::Md,
            position: CometPosition::Random,
            delay_secs: 0.0,
            duration_secs: default_duration(),
        }
    }
}

/// Comet glyph in its 64×64 drawing space: a faint tail and a bright core.
const GLYPH_TAIL: &str = "M64,32L0,0L18,32L0,64Z";
const GLYPH_CORE: &str = "M64,32L18,24L24,32L18,40Z";
const GLYPH_EXTENT: f64 = 64.0;

/// A comet with its placement and repeat gap already rolled.
#[derive(Clone, Debug)]
pub struct Comet {
    pub spec: CometSpec,
    pub placement: Placement,
    pub repeat_delay_secs: f64,
    offset: Anim<Vec2>,
    opacity: Anim<f64>,
}

impl Comet {
    #[tracing::instrument(skip(rng))]
    pub fn resolve(spec: CometSpec, fps: Fps, rng: &mut Rng64) -> StarbrightResult<Self> {
        if !spec.duration_secs.is_finite() || spec.duration_secs <= 0.0 {
            return Err(StarbrightError::validation(
                "comet duration_secs must be finite and > 0",
            ));
        }
        let placement = spec.position.resolve(rng);
        let repeat_delay_secs = rng.range(2.0, 7.0);
        let timing = Timing::new(spec.duration_secs, Ease::EaseInOut)
            .with_delay(spec.delay_secs)
            .with_repeat_delay(repeat_delay_secs);

        let size = spec.size.px();
        let offset = timing.animate(
            vec![Vec2::new(-1.5 * size, 0.0), Vec2::new(3.0 * size, -50.0)],
            fps,
        )?;
        let opacity = timing.animate(vec![0.0, 1.0, 1.0, 0.0], fps)?;
        tracing::debug!(?placement, repeat_delay_secs, "comet resolved");
        Ok(Self {
            spec,
            placement,
            repeat_delay_secs,
            offset,
            opacity,
        })
    }

    /// Travel offset from the placement point, in px.
    pub fn offset_at(&self, ctx: SampleCtx) -> StarbrightResult<Vec2> {
        self.offset.sample(ctx)
    }

    pub fn opacity_at(&self, ctx: SampleCtx) -> StarbrightResult<f64> {
        self.opacity.sample(ctx)
    }

    /// Placement and travel for the frame, rotating about the glyph's centre.
    pub fn transform_at(&self, host: Canvas, ctx: SampleCtx) -> StarbrightResult<Affine> {
        let size = self.spec.size.px();
        let origin = Vec2::new(
            self.placement.left_pct / 100.0 * f64::from(host.width),
            self.placement.top_pct / 100.0 * f64::from(host.height),
        );
        let t = Transform2D {
            translate: origin + self.offset_at(ctx)?,
            rotation_rad: self.placement.rotate_deg.to_radians(),
            anchor: Vec2::new(size / 2.0, size / 2.0),
            ..Transform2D::default()
        };
        Ok(t.to_affine() * Affine::scale(size / GLYPH_EXTENT))
    }

    /// Draw the comet; with `animate == false` it stays in its initial, invisible state.
    pub fn to_node(
        &self,
        host: Canvas,
        ctx: SampleCtx,
        animate: bool,
    ) -> StarbrightResult<SvgNode> {
        if !animate {
            return Ok(SvgNode::group());
        }
        let glyph = SvgNode::group()
            .num("opacity", self.opacity_at(ctx)?)
            .child(
                SvgNode::new("path")
                    .attr("d", GLYPH_TAIL)
                    .attr("fill", "#FFFFFF")
                    .num("opacity", 0.8),
            )
            .child(
                SvgNode::new("path")
                    .attr("d", GLYPH_CORE)
                    .attr("fill", "#FFFFFF"),
            );
        Ok(glyph.transformed(self.transform_at(host, ctx)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/comet.rs"]
mod tests;
