//! Horizontal section dividers.
//!
//! A divider is a filled band `DIVIDER_WIDTH` units wide and `H` units tall that sits
//! between two page sections. Each [`ShapeKind`] is a fixed profile whose y coordinates
//! are fractions of `H`; inverting mirrors the profile vertically (`y -> H - y`).
//! Every profile touches both `y = 0` and `y = H` and spans the full width, so stacked
//! sections tile without a visible seam.

use kurbo::{BezPath, Point};

use crate::geometry::palette::ColorToken;
use crate::geometry::path_data::to_path_data;
use crate::render::svg::SvgNode;

/// Logical width of every divider's view box.
pub const DIVIDER_WIDTH: f64 = 1440.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Wave,
    Angle,
    Curve,
    Mountains,
    Atomic,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        Self::Wave,
        Self::Angle,
        Self::Curve,
        Self::Mountains,
        Self::Atomic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Wave => "wave",
            Self::Angle => "angle",
            Self::Curve => "curve",
            Self::Mountains => "mountains",
            Self::Atomic => "atomic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightClass {
    Sm,
    #[default]
    Md,
    Lg,
}

impl HeightClass {
    pub fn px(self) -> f64 {
        match self {
            Self::Sm => 48.0,
            Self::Md => 64.0,
            Self::Lg => 96.0,
        }
    }
}

/// One profile segment; `y` values are fractions of the divider height.
#[derive(Clone, Copy, Debug)]
enum Seg {
    Line(f64, f64),
    Curve([(f64, f64); 3]),
}

const MOUNTAIN_PEAKS: [f64; 24] = [
    0.4, 0.2, 0.35, 0.15, 0.35, 0.25, 0.45, 0.3, 0.4, 0.15, 0.35, 0.2, 0.3, 0.1, 0.4, 0.25, 0.35,
    0.2, 0.4, 0.25, 0.35, 0.2, 0.3, 0.15,
];

const ATOMIC_PEAKS: [f64; 24] = [
    0.6, 0.3, 0.7, 0.2, 0.8, 0.4, 0.9, 0.5, 0.7, 0.3, 0.8, 0.4, 0.6, 0.2, 0.9, 0.5, 0.7, 0.3, 0.8,
    0.4, 0.6, 0.2, 0.7, 0.5,
];

fn profile(kind: ShapeKind) -> ((f64, f64), Vec<Seg>) {
    use Seg::{Curve, Line};
    match kind {
        ShapeKind::Wave => (
            (0.0, 0.0),
            vec![
                Line(48.0, 0.17),
                Curve([(96.0, 0.33), (192.0, 0.5), (288.0, 0.42)]),
                Curve([(384.0, 0.33), (480.0, 0.17), (576.0, 0.08)]),
                Curve([(672.0, 0.0), (768.0, 0.0), (864.0, 0.08)]),
                Curve([(960.0, 0.17), (1056.0, 0.33), (1152.0, 0.5)]),
                Curve([(1248.0, 0.67), (1344.0, 0.83), (1392.0, 0.92)]),
                Line(1440.0, 1.0),
                Line(1440.0, 0.0),
                Line(1392.0, 0.0),
                Curve([(1344.0, 0.0), (1248.0, 0.0), (1152.0, 0.0)]),
                Curve([(1056.0, 0.0), (960.0, 0.0), (864.0, 0.0)]),
                Curve([(768.0, 0.0), (672.0, 0.0), (576.0, 0.0)]),
                Curve([(480.0, 0.0), (384.0, 0.0), (288.0, 0.0)]),
                Curve([(192.0, 0.0), (96.0, 0.0), (48.0, 0.0)]),
                Line(0.0, 0.0),
            ],
        ),
        ShapeKind::Angle => (
            (0.0, 0.0),
            vec![Line(1440.0, 1.0), Line(1440.0, 0.0), Line(0.0, 0.0)],
        ),
        ShapeKind::Curve => (
            (0.0, 0.0),
            vec![
                Curve([(360.0, 0.9), (1080.0, 0.9), (1440.0, 0.0)]),
                Line(1440.0, 1.0),
                Line(0.0, 1.0),
            ],
        ),
        ShapeKind::Mountains => ((0.0, 0.0), ridge(&MOUNTAIN_PEAKS)),
        ShapeKind::Atomic => ((0.0, 0.0), ridge(&ATOMIC_PEAKS)),
    }
}

/// Peaks every 60 units from x=60 to the right edge, then down and back along the bottom.
fn ridge(peaks: &[f64]) -> Vec<Seg> {
    let mut segs: Vec<Seg> = peaks
        .iter()
        .enumerate()
        .map(|(i, &fy)| Seg::Line(60.0 * (i + 1) as f64, fy))
        .collect();
    segs.push(Seg::Line(DIVIDER_WIDTH, 1.0));
    segs.push(Seg::Line(0.0, 1.0));
    segs
}

/// Build the closed divider outline for a shape at pixel height `height`.
pub fn divider_path(kind: ShapeKind, height: f64, inverted: bool) -> BezPath {
    let y = |f: f64| if inverted { height * (1.0 - f) } else { height * f };
    let pt = |(x, f): (f64, f64)| Point::new(x, y(f));

    let (start, segs) = profile(kind);
    let mut path = BezPath::new();
    path.move_to(pt(start));
    for seg in segs {
        match seg {
            Seg::Line(x, f) => path.line_to(Point::new(x, y(f))),
            Seg::Curve([a, b, c]) => path.curve_to(pt(a), pt(b), pt(c)),
        }
    }
    path.close_path();
    path
}

/// SVG path data for a divider.
pub fn divider_path_data(kind: ShapeKind, height: HeightClass, inverted: bool) -> String {
    to_path_data(&divider_path(kind, height.px(), inverted))
}

/// Like [`divider_path_data`] but keyed by name; unknown names give an empty path.
pub fn divider_path_data_by_name(name: &str, height: HeightClass, inverted: bool) -> String {
    match ShapeKind::from_name(name) {
        Some(kind) => divider_path_data(kind, height, inverted),
        None => {
            tracing::debug!(name, "unknown divider shape; emitting empty path");
            String::new()
        }
    }
}

/// Two-stop top-to-bottom gradient used when a divider blends between two colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearGradient {
    pub from: ColorToken,
    pub to: ColorToken,
}

impl LinearGradient {
    pub fn id(&self) -> String {
        format!("gradient-{}-{}", self.from, self.to)
    }

    pub fn to_node(&self) -> SvgNode {
        SvgNode::new("linearGradient")
            .attr("id", self.id())
            .attr("x1", "0%")
            .attr("y1", "0%")
            .attr("x2", "0%")
            .attr("y2", "100%")
            .child(
                SvgNode::new("stop")
                    .attr("offset", "0%")
                    .attr("stop-color", self.from.hex()),
            )
            .child(
                SvgNode::new("stop")
                    .attr("offset", "100%")
                    .attr("stop-color", self.to.hex()),
            )
    }
}

fn default_fill() -> ColorToken {
    ColorToken::Cream
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DividerSpec {
    #[serde(default)]
    pub shape: ShapeKind,
    #[serde(default)]
    pub height: HeightClass,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default = "default_fill")]
    pub fill: ColorToken,
    #[serde(default)]
    pub to: Option<ColorToken>,
}

impl Default for DividerSpec {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Wave,
            height: HeightClass::Md,
            inverted: false,
            fill: default_fill(),
            to: None,
        }
    }
}

impl DividerSpec {
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    pub fn path(&self) -> BezPath {
        divider_path(self.shape, self.height.px(), self.inverted)
    }

    pub fn path_data(&self) -> String {
        divider_path_data(self.shape, self.height, self.inverted)
    }

    /// Present only when a second colour is set and differs from the fill.
    pub fn gradient(&self) -> Option<LinearGradient> {
        match self.to {
            Some(to) if to != self.fill => Some(LinearGradient {
                from: self.fill,
                to,
            }),
            _ => None,
        }
    }

    pub fn fill_attr(&self) -> String {
        match self.gradient() {
            Some(g) => format!("url(#{})", g.id()),
            None => self.fill.hex(),
        }
    }

    /// Nested `<svg>` stretched over `width` pixels at the divider's pixel height.
    pub fn to_node(&self, width: f64) -> SvgNode {
        let h = self.height.px();
        let mut svg = SvgNode::new("svg")
            .num("width", width)
            .num("height", h)
            .attr("viewBox", format!("0 0 {DIVIDER_WIDTH} {h}"))
            .attr("preserveAspectRatio", "none");
        if let Some(g) = self.gradient() {
            svg = svg.child(SvgNode::new("defs").child(g.to_node()));
        }
        svg.child(
            SvgNode::new("path")
                .attr("d", self.path_data())
                .attr("fill", self.fill_attr()),
        )
    }

    /// Standalone SVG document for this divider.
    pub fn to_svg(&self, width: f64) -> String {
        self.to_node(width).to_document()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/divider.rs"]
mod tests;
