//! Starbright draws the retro-futurist decorations of the Starbright Lab site.
//!
//! Every decoration is a pure function of its parameters, a seed and a frame index:
//!
//! - Build a [`Scene`] (JSON or [`SceneBuilder`]) of placed decorations
//! - Render one frame to SVG markup with [`render_svg`], or to pixels with [`render_frame`]
//! - Feed live widgets ([`Starfield`]) from a shared [`FrameScheduler`]
//!
//! The [`ContactSubmitter`] posts the site's contact form to its static form host.
//! See [`guide`] for a walkthrough.
#![forbid(unsafe_code)]

mod contact;
mod foundation;
mod geometry;
mod motion;
mod render;
mod scene;

/// Keyframes, easing and loop combinators.
pub mod animation;
pub mod guide;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Transform2D, Vec2,
};
pub use crate::foundation::error::{StarbrightError, StarbrightResult};
pub use crate::foundation::rng::Rng64;

pub use crate::animation::anim::{Anim, SampleCtx};
pub use crate::animation::ease::Ease;
pub use crate::animation::timing::{Repeat, Timing};

pub use crate::geometry::divider::{
    DIVIDER_WIDTH, DividerSpec, HeightClass, LinearGradient, ShapeKind, divider_path,
    divider_path_data, divider_path_data_by_name,
};
pub use crate::geometry::orbit::{Direction, container_size, orbit_position};
pub use crate::geometry::palette::ColorToken;
pub use crate::geometry::path_data::{to_path_data, vertex_count};
pub use crate::geometry::starburst::{
    StarburstMotion, StarburstPose, StarburstSpec, starburst_path, starburst_path_data,
};

pub use crate::motion::atomic::{
    AtomicLoader, AtomicLoaderSpec, LoaderMetrics, LoaderPose, LoaderSize, PARTICLE_COUNT,
    particle_period_secs,
};
pub use crate::motion::comet::{Comet, CometPosition, CometSize, CometSpec, Placement};
pub use crate::motion::env::Environment;
pub use crate::motion::orbit::{
    BASE_PERIOD_SECS, Orbit, OrbitElementSpec, OrbitMode, OrbitSpeed, OrbitSystem,
    OrbitSystemSpec, OrbitalSystem, OrbitalSystemSpec, RING_COLORS, SystemSize, orbit_keyframes,
};
pub use crate::motion::parallax::{
    Layer, ParallaxBackground, ParallaxSpec, ParallaxStar, SCROLL_RANGE, layer_offset,
};
pub use crate::motion::scheduler::{FrameScheduler, Subscription};
pub use crate::motion::starfield::{
    AREA_PER_STAR, STREAK_CHANCE, Star, Starfield, Streak, star_count,
};

pub use crate::render::raster::{FrameRGBA, rasterize, write_png};
pub use crate::render::scene::{render_frame, render_sequence, render_svg};
pub use crate::render::svg::{SVG_NS, SvgNode};

pub use crate::scene::dsl::SceneBuilder;
pub use crate::scene::model::{Decoration, DecorationKind, Scene, StarfieldSpec};

pub use crate::contact::form::{ContactForm, FORM_NAME, Field, FieldErrors};
pub use crate::contact::submit::{
    ContactSession, ContactSubmitter, FormState, FormTransport, HttpTransport, SUCCESS_MESSAGE,
    SUCCESS_RESET, SubmitOutcome, TRANSMISSION_ERROR,
};
