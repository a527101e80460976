use crate::{
    foundation::core::{Canvas, Rgba8},
    foundation::error::{StarbrightError, StarbrightResult},
    foundation::rng::Rng64,
    geometry::palette::ColorToken,
    motion::env::Environment,
    render::svg::SvgNode,
};

/// Scroll distance over which layers reach their full offset.
pub const SCROLL_RANGE: f64 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Foreground,
    Middle,
    Background,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Self::Foreground, Self::Middle, Self::Background];

    /// Offset in px at full scroll before `parallax_factor` is applied.
    pub fn depth(self) -> f64 {
        match self {
            Self::Foreground => 200.0,
            Self::Middle => 100.0,
            Self::Background => 50.0,
        }
    }

    /// Size and opacity multiplier; farther layers are smaller and dimmer.
    pub fn dimming(self) -> f64 {
        match self {
            Self::Foreground => 1.0,
            Self::Middle => 0.8,
            Self::Background => 0.6,
        }
    }

    fn pick(rng: &mut Rng64) -> Self {
        let r = rng.next_f64_01();
        if r < 0.3 {
            Self::Foreground
        } else if r < 0.6 {
            Self::Middle
        } else {
            Self::Background
        }
    }
}

/// Vertical offset of `layer` at `scroll_y`, clamped to the scroll range.
pub fn layer_offset(layer: Layer, scroll_y: f64, parallax_factor: f64) -> f64 {
    let t = (scroll_y / SCROLL_RANGE).clamp(0.0, 1.0);
    t * layer.depth() * parallax_factor
}

const PALE_YELLOW: Rgba8 = Rgba8::opaque(0xFF, 0xF9, 0xC4);
const PALE_BLUE: Rgba8 = Rgba8::opaque(0xBB, 0xDE, 0xFB);
const PALE_ORANGE: Rgba8 = Rgba8::opaque(0xFF, 0xE0, 0xB2);

fn pick_color(rng: &mut Rng64) -> Rgba8 {
    let r = rng.next_f64_01();
    if r < 0.7 {
        Rgba8::WHITE
    } else if r < 0.8 {
        PALE_YELLOW
    } else if r < 0.9 {
        PALE_BLUE
    } else {
        PALE_ORANGE
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxStar {
    /// Percent of the surface width, `[0, 100)`.
    pub x_pct: f64,
    pub y_pct: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: Rgba8,
    pub layer: Layer,
}

fn default_star_count() -> usize {
    50
}
fn default_parallax_factor() -> f64 {
    0.3
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxSpec {
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    #[serde(default = "default_parallax_factor")]
    pub parallax_factor: f64,
}

impl Default for ParallaxSpec {
    fn default() -> Self {
        Self {
            star_count: default_star_count(),
            parallax_factor: default_parallax_factor(),
        }
    }
}

impl ParallaxSpec {
    pub fn validate(&self) -> StarbrightResult<()> {
        if !self.parallax_factor.is_finite() || self.parallax_factor < 0.0 {
            return Err(StarbrightError::validation(
                "parallax_factor must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ParallaxBackground {
    spec: ParallaxSpec,
    stars: Vec<ParallaxStar>,
}

impl ParallaxBackground {
    /// Place every star and fix its layer once.
    pub fn generate(spec: ParallaxSpec, seed: u64) -> Self {
        let mut rng = Rng64::fork(seed, "parallax");
        let stars = (0..spec.star_count)
            .map(|_| ParallaxStar {
                x_pct: rng.range(0.0, 100.0),
                y_pct: rng.range(0.0, 100.0),
                size: rng.range(1.0, 4.0),
                opacity: rng.range(0.3, 0.8),
                color: pick_color(&mut rng),
                layer: Layer::pick(&mut rng),
            })
            .collect();
        Self { spec, stars }
    }

    pub fn spec(&self) -> ParallaxSpec {
        self.spec
    }

    pub fn stars(&self) -> &[ParallaxStar] {
        &self.stars
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &ParallaxStar> + '_ {
        self.stars.iter().filter(move |s| s.layer == layer)
    }

    /// Offset for `layer` in `env`; zero under reduced motion.
    pub fn offset(&self, layer: Layer, env: &Environment) -> f64 {
        if env.animates() {
            layer_offset(layer, env.scroll_y, self.spec.parallax_factor)
        } else {
            0.0
        }
    }

    /// Three translated layers over `canvas`, then a radial vignette toward charcoal.
    ///
    /// The vignette gradient's id is `{id_prefix}-vignette`.
    pub fn to_node(&self, id_prefix: &str, canvas: Canvas, env: &Environment) -> SvgNode {
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let layers = Layer::ALL.into_iter().map(|layer| {
            let dim = layer.dimming();
            let stars = self.layer(layer).map(|s| {
                let d = s.size * dim;
                SvgNode::new("circle")
                    .num("cx", s.x_pct / 100.0 * w + d / 2.0)
                    .num("cy", s.y_pct / 100.0 * h + d / 2.0)
                    .num("r", d / 2.0)
                    .attr("fill", s.color.to_hex())
                    .num("fill-opacity", s.opacity * dim)
            });
            SvgNode::group()
                .children(stars)
                .transformed(kurbo::Affine::translate((0.0, self.offset(layer, env))))
        });

        let vignette_id = format!("{id_prefix}-vignette");
        let vignette = SvgNode::new("radialGradient")
            .attr("id", &vignette_id)
            .child(
                SvgNode::new("stop")
                    .attr("offset", "0%")
                    .attr("stop-color", ColorToken::Charcoal.hex())
                    .num("stop-opacity", 0.0),
            )
            .child(
                SvgNode::new("stop")
                    .attr("offset", "100%")
                    .attr("stop-color", ColorToken::Charcoal.hex())
                    .num("stop-opacity", 1.0),
            );
        SvgNode::group()
            .child(SvgNode::new("defs").child(vignette))
            .children(layers)
            .child(
                SvgNode::new("rect")
                    .num("width", w)
                    .num("height", h)
                    .attr("fill", format!("url(#{vignette_id})"))
                    .num("opacity", 0.4),
            )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/parallax.rs"]
mod tests;
