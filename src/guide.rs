//! # Starbright guide
//!
//! A walkthrough of how decorations are described, animated and rendered.
//!
//! If you are looking for commands, run `starbright --help`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Scene`](crate::Scene): a canvas, a seed and a list of placed decorations
//! - [`DecorationKind`](crate::DecorationKind): what a decoration draws (divider, starburst,
//!   orbits, starfield, parallax background, comet, atomic loader)
//! - [`FrameIndex`](crate::FrameIndex): the frame to sample, counted at the scene's
//!   [`Fps`](crate::Fps)
//! - [`SvgNode`](crate::SvgNode): the element tree every decoration emits
//! - [`FrameRGBA`](crate::FrameRGBA): rasterized pixels (RGBA8, premultiplied alpha)
//!
//! Rendering is staged:
//!
//! 1. Validate the scene: [`Scene::validate`](crate::Scene::validate)
//! 2. Sample each decoration at the frame and emit markup: [`render_svg`](crate::render_svg)
//! 3. Rasterize: [`rasterize`](crate::rasterize), or both at once with
//!    [`render_frame`](crate::render_frame)
//!
//! ---
//!
//! ## Determinism
//!
//! Nothing reads the clock or a global random source. Randomness comes from
//! [`Rng64`](crate::Rng64) streams forked from the scene seed and the decoration id, so:
//!
//! - the same scene renders the same bytes at the same frame
//! - adding, removing or reordering one decoration leaves the others untouched
//!
//! Live widgets that advance per tick ([`Starfield`](crate::Starfield)) can also be
//! positioned directly with [`Starfield::seek`](crate::Starfield::seek), which is how
//! scene rendering samples them.
//!
//! ---
//!
//! ## Timing
//!
//! Motion is written in seconds with [`Timing`](crate::Timing) and compiled to frame-based
//! [`Anim`](crate::Anim) values for the scene's frame rate. Keyframe values are spread
//! evenly over the duration; a repeating timing restarts every `duration + repeat_delay`
//! seconds, and `delay` postpones only the first run.
//!
//! ---
//!
//! ## Reduced motion
//!
//! With `reduced_motion` set, every decoration renders its static frame: starbursts at
//! rest, orbit elements at their starting angles, stars at base opacity without streaks,
//! parallax layers unshifted, atomic loaders at their rest pose and comets not at all.
//!
//! ---
//!
//! ## Building a scene (Rust DSL)
//!
//! ```rust,no_run
//! use starbright::{
//!     Canvas, ColorToken, DecorationKind, DividerSpec, FrameIndex, SceneBuilder, ShapeKind,
//!     StarburstSpec, render_frame, render_svg,
//! };
//!
//! # fn main() -> starbright::StarbrightResult<()> {
//! let scene = SceneBuilder::new(Canvas::new(640, 360))
//!     .seed(7)
//!     .background(ColorToken::Charcoal)
//!     .decoration("sun", 220.0, 80.0, DecorationKind::Starburst(StarburstSpec::default()))?
//!     .decoration(
//!         "edge",
//!         0.0,
//!         296.0,
//!         DecorationKind::Divider(DividerSpec::new(ShapeKind::Wave)),
//!     )?
//!     .build()?;
//!
//! let svg = render_svg(&scene, FrameIndex(90))?;
//! assert!(svg.contains(r#"data-decoration="sun""#));
//!
//! let frame = render_frame(&scene, FrameIndex(90))?;
//! assert_eq!((frame.width, frame.height), (640, 360));
//! # Ok(())
//! # }
//! ```
//!
//! The builder calls [`Scene::validate`](crate::Scene::validate) and rejects duplicate
//! decoration ids.
//!
//! ---
//!
//! ## Scene JSON
//!
//! Decorations are tagged by `kind`; every parameter has a default:
//!
//! ```json
//! {
//!   "canvas": { "width": 640, "height": 360 },
//!   "seed": 7,
//!   "background": "charcoal",
//!   "decorations": [
//!     { "id": "sky", "kind": "starfield" },
//!     { "id": "edge", "kind": "divider", "y": 296, "shape": "mountains", "fill": "teal" },
//!     { "id": "comet", "kind": "comet", "size": "lg", "position": "top-right" }
//!   ]
//! }
//! ```
//!
//! ---
//!
//! ## Contact form
//!
//! [`ContactForm::validate`](crate::ContactForm::validate) checks required fields and lengths
//! on trimmed values, matches the email pattern on the raw value and reports at most one
//! message per field. [`ContactSubmitter`](crate::ContactSubmitter) posts a valid
//! form URL-encoded to `/` with `form-name=contact` and refuses to start a second request
//! while one is outstanding. [`ContactSession`](crate::ContactSession) tracks what the form
//! shows between attempts.
