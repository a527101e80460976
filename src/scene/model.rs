use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::{StarbrightError, StarbrightResult},
    geometry::divider::DividerSpec,
    geometry::palette::ColorToken,
    geometry::starburst::StarburstSpec,
    motion::atomic::AtomicLoaderSpec,
    motion::comet::CometSpec,
    motion::env::Environment,
    motion::orbit::{OrbitSystemSpec, OrbitalSystemSpec},
    motion::parallax::ParallaxSpec,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A set of decorations drawn together on one canvas.
///
/// A scene is plain data that can be:
/// - built programmatically (see [`crate::SceneBuilder`])
/// - read from and written to JSON
///
/// Rendering samples every decoration at one frame: [`crate::render_svg`] /
/// [`crate::render_frame`].
pub struct Scene {
    /// Output canvas, also the viewport handed to decorations.
    pub canvas: Canvas,
    /// Frame rate used to turn seconds into frames.
    #[serde(default)]
    pub fps: Fps,
    /// Seed for every random placement in the scene.
    #[serde(default)]
    pub seed: u64,
    /// Render every decoration's static frame.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Page scroll offset in px (drives parallax).
    #[serde(default)]
    pub scroll_y: f64,
    /// Optional solid fill behind all decorations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorToken>,
    /// Decorations in paint order.
    #[serde(default)]
    pub decorations: Vec<Decoration>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One placed decoration.
pub struct Decoration {
    /// Identifier, unique within the scene; also salts the decoration's random stream.
    pub id: String,
    /// Left edge in canvas px.
    #[serde(default)]
    pub x: f64,
    /// Top edge in canvas px.
    #[serde(default)]
    pub y: f64,
    /// What to draw.
    #[serde(flatten)]
    pub kind: DecorationKind,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Decoration variants, tagged by `kind` in JSON.
pub enum DecorationKind {
    /// Full-width section divider.
    Divider(DividerSpec),
    /// Rotating, pulsing starburst.
    Starburst(StarburstSpec),
    /// Element-list orbits.
    Orbit(OrbitSystemSpec),
    /// Three-planet orbital preset.
    OrbitalSystem(OrbitalSystemSpec),
    /// Twinkling starfield.
    Starfield(StarfieldSpec),
    /// Scroll-parallax star background.
    Parallax(ParallaxSpec),
    /// Comet flying across the canvas.
    Comet(CometSpec),
    /// Pulsing core with three orbiting particles.
    AtomicLoader(AtomicLoaderSpec),
}

impl DecorationKind {
    /// JSON tag for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Divider(_) => "divider",
            Self::Starburst(_) => "starburst",
            Self::Orbit(_) => "orbit",
            Self::OrbitalSystem(_) => "orbital_system",
            Self::Starfield(_) => "starfield",
            Self::Parallax(_) => "parallax",
            Self::Comet(_) => "comet",
            Self::AtomicLoader(_) => "atomic_loader",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Starfield surface; defaults to the whole canvas.
pub struct StarfieldSpec {
    /// Surface width in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Surface height in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl StarfieldSpec {
    /// Resolved surface size on `canvas`.
    pub fn surface(&self, canvas: Canvas) -> Canvas {
        Canvas::new(
            self.width.unwrap_or(canvas.width),
            self.height.unwrap_or(canvas.height),
        )
    }
}

impl Scene {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StarbrightResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StarbrightError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON string.
    pub fn from_json(json: &str) -> StarbrightResult<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StarbrightResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StarbrightError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> StarbrightResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Ambient state for decorations in this scene.
    pub fn environment(&self) -> Environment {
        Environment::new(self.canvas)
            .with_scroll(self.scroll_y)
            .with_reduced_motion(self.reduced_motion)
    }

    /// Validate scene invariants and every decoration's parameters.
    pub fn validate(&self) -> StarbrightResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(StarbrightError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.is_empty() {
            return Err(StarbrightError::validation(
                "canvas width/height must be > 0",
            ));
        }
        if !self.scroll_y.is_finite() {
            return Err(StarbrightError::validation("scroll_y must be finite"));
        }

        let mut seen = BTreeSet::new();
        for d in &self.decorations {
            if d.id.trim().is_empty() {
                return Err(StarbrightError::validation("decoration id must be non-empty"));
            }
            if !seen.insert(d.id.as_str()) {
                return Err(StarbrightError::validation(format!(
                    "duplicate decoration id '{}'",
                    d.id
                )));
            }
            if !d.x.is_finite() || !d.y.is_finite() {
                return Err(StarbrightError::validation(format!(
                    "decoration '{}': x/y must be finite",
                    d.id
                )));
            }
            d.kind.validate().map_err(|e| {
                StarbrightError::validation(format!("decoration '{}': {e}", d.id))
            })?;
        }
        Ok(())
    }
}

impl DecorationKind {
    fn validate(&self) -> StarbrightResult<()> {
        match self {
            Self::Divider(_) => Ok(()),
            Self::Starburst(s) => s.validate(),
            Self::Orbit(s) => s.validate(),
            Self::OrbitalSystem(s) => {
                if s.planet_colors.len() > 3 {
                    return Err(StarbrightError::validation(
                        "orbital system has at most 3 planets",
                    ));
                }
                Ok(())
            }
            Self::Starfield(_) | Self::AtomicLoader(_) => Ok(()),
            Self::Parallax(s) => s.validate(),
            Self::Comet(s) => {
                for (name, v) in [("duration_secs", s.duration_secs), ("delay_secs", s.delay_secs)]
                {
                    if !v.is_finite() || v < 0.0 {
                        return Err(StarbrightError::validation(format!(
                            "comet {name} must be finite and >= 0"
                        )));
                    }
                }
                if s.duration_secs == 0.0 {
                    return Err(StarbrightError::validation("comet duration_secs must be > 0"));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
