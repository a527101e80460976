//! Twinkling star canvas with the occasional shooting star.
//!
//! Stars are generated once per surface size from a seeded [`Rng64`]. Each tick advances
//! a counter `t`; a star's opacity is `base * (0.5 + 0.5 * sin(t * speed + phase))`.
//! Every tick also rolls for a transient streak that is drawn for that tick only.

use std::cell::RefCell;
use std::f64::consts::{FRAC_PI_4, TAU};
use std::rc::Rc;

use kurbo::{Point, Vec2};

use crate::{
    foundation::core::{Canvas, Rgba8},
    foundation::rng::Rng64,
    motion::scheduler::{FrameScheduler, Subscription},
    render::svg::SvgNode,
};

/// Surface area (px²) per star.
pub const AREA_PER_STAR: u64 = 8000;
/// Per-tick probability of a shooting star.
pub const STREAK_CHANCE: f64 = 0.005;

pub fn star_count(canvas: Canvas) -> usize {
    (canvas.area() / AREA_PER_STAR) as usize
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub base_opacity: f64,
    /// Radians per tick.
    pub twinkle_speed: f64,
    pub twinkle_phase: f64,
}

impl Star {
    fn random(rng: &mut Rng64, canvas: Canvas) -> Self {
        Self {
            x: rng.range(0.0, f64::from(canvas.width)),
            y: rng.range(0.0, f64::from(canvas.height)),
            radius: rng.range(0.5, 2.5),
            base_opacity: rng.range(0.3, 1.0),
            twinkle_speed: rng.range(0.003, 0.013),
            twinkle_phase: rng.range(0.0, TAU),
        }
    }

    pub fn opacity_at(&self, t: u64) -> f64 {
        let twinkle = 0.5 + 0.5 * (t as f64 * self.twinkle_speed + self.twinkle_phase).sin();
        self.base_opacity * twinkle
    }
}

/// A one-tick shooting star: a 45° line fading in then out along its length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Streak {
    pub start: Point,
    pub length: f64,
}

impl Streak {
    pub const STROKE_WIDTH: f64 = 2.0;

    /// Document id of the fade gradient; `id_prefix` keeps sibling starfields apart.
    pub fn gradient_id(id_prefix: &str) -> String {
        format!("{id_prefix}-streak-gradient")
    }

    fn random(rng: &mut Rng64, canvas: Canvas) -> Self {
        Self {
            start: Point::new(
                rng.range(0.0, f64::from(canvas.width)),
                rng.range(0.0, f64::from(canvas.height) / 3.0),
            ),
            length: rng.range(50.0, 150.0),
        }
    }

    pub fn end(&self) -> Point {
        self.start + Vec2::from_angle(FRAC_PI_4) * self.length
    }

    /// Gradient stops as `(offset, alpha)`.
    pub fn stops() -> [(f64, f64); 3] {
        [(0.0, 0.0), (0.1, 0.8), (1.0, 0.0)]
    }

    pub fn to_node(&self, id_prefix: &str) -> SvgNode {
        let end = self.end();
        let id = Self::gradient_id(id_prefix);
        let gradient = SvgNode::new("linearGradient")
            .attr("id", &id)
            .attr("gradientUnits", "userSpaceOnUse")
            .num("x1", self.start.x)
            .num("y1", self.start.y)
            .num("x2", end.x)
            .num("y2", end.y)
            .children(Self::stops().into_iter().map(|(offset, alpha)| {
                SvgNode::new("stop")
                    .num("offset", offset)
                    .attr("stop-color", Rgba8::WHITE.to_hex())
                    .num("stop-opacity", alpha)
            }));
        SvgNode::group()
            .child(SvgNode::new("defs").child(gradient))
            .child(
                SvgNode::new("line")
                    .num("x1", self.start.x)
                    .num("y1", self.start.y)
                    .num("x2", end.x)
                    .num("y2", end.y)
                    .attr("stroke", format!("url(#{id})"))
                    .num("stroke-width", Self::STROKE_WIDTH),
            )
    }
}

#[derive(Clone, Debug)]
pub struct Starfield {
    seed: u64,
    canvas: Canvas,
    generation: u64,
    stars: Vec<Star>,
    time: u64,
    streak: Option<Streak>,
}

impl Starfield {
    #[tracing::instrument(skip_all, fields(width = canvas.width, height = canvas.height))]
    pub fn generate(canvas: Canvas, seed: u64) -> Self {
        let mut field = Self {
            seed,
            canvas,
            generation: 0,
            stars: Vec::new(),
            time: 0,
            streak: None,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        let mut rng = Rng64::fork(
            self.seed,
            &format!("starfield/{}", self.generation),
        );
        let n = star_count(self.canvas);
        self.stars = (0..n).map(|_| Star::random(&mut rng, self.canvas)).collect();
        tracing::debug!(stars = n, generation = self.generation, "starfield populated");
    }

    /// Regenerate every star for a new surface size.
    pub fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.generation += 1;
        self.streak = None;
        self.populate();
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn streak(&self) -> Option<Streak> {
        self.streak
    }

    /// Advance one tick: bump the counter and roll for this tick's streak.
    pub fn tick(&mut self) {
        self.time += 1;
        self.streak = self.streak_at(self.time);
    }

    /// Jump straight to tick `t`, as if [`tick`](Self::tick) had been called `t` times.
    pub fn seek(&mut self, t: u64) {
        self.time = t;
        self.streak = if t == 0 { None } else { self.streak_at(t) };
    }

    /// The streak rolled on tick `t`, independent of any other tick.
    pub fn streak_at(&self, t: u64) -> Option<Streak> {
        let mut rng = Rng64::fork(self.seed ^ t.rotate_left(17), "starfield/streak");
        rng.chance(STREAK_CHANCE)
            .then(|| Streak::random(&mut rng, self.canvas))
    }

    /// Per-star opacity at the current tick.
    pub fn opacities(&self) -> impl Iterator<Item = f64> + '_ {
        self.stars.iter().map(|s| s.opacity_at(self.time))
    }

    /// Draw the current tick. With `animate == false` stars sit at base opacity and no streak shows.
    ///
    /// Ids emitted into the document start with `id_prefix`.
    pub fn to_node(&self, id_prefix: &str, animate: bool) -> SvgNode {
        let circles = self.stars.iter().map(|s| {
            let opacity = if animate {
                s.opacity_at(self.time)
            } else {
                s.base_opacity
            };
            SvgNode::new("circle")
                .num("cx", s.x)
                .num("cy", s.y)
                .num("r", s.radius)
                .attr("fill", Rgba8::WHITE.to_hex())
                .num("fill-opacity", opacity)
        });
        let mut group = SvgNode::group().children(circles);
        if animate && let Some(streak) = self.streak {
            group = group.child(streak.to_node(id_prefix));
        }
        group
    }

    /// Tick `field` once per scheduler frame until the returned handle is dropped.
    pub fn drive(field: &Rc<RefCell<Self>>, scheduler: &FrameScheduler) -> Subscription {
        let field = Rc::clone(field);
        scheduler.subscribe(move |_| field.borrow_mut().tick())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/starfield.rs"]
mod tests;
