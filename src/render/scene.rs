use std::path::{Path, PathBuf};

use kurbo::Affine;

use crate::{
    animation::anim::SampleCtx,
    foundation::core::{Canvas, FrameIndex, FrameRange},
    foundation::error::StarbrightResult,
    foundation::rng::Rng64,
    geometry::starburst::{StarburstMotion, StarburstPose},
    motion::atomic::AtomicLoader,
    motion::comet::Comet,
    motion::env::Environment,
    motion::orbit::{OrbitSystem, OrbitalSystem},
    motion::parallax::ParallaxBackground,
    motion::starfield::Starfield,
    render::raster::{FrameRGBA, rasterize, write_png},
    render::svg::SvgNode,
    scene::model::{Decoration, DecorationKind, Scene},
};

/// Render `scene` at `frame` as one SVG document.
///
/// Each decoration draws from its own random stream keyed by the scene seed and the
/// decoration id, so adding or reordering decorations never changes the others.
#[tracing::instrument(skip(scene), fields(decorations = scene.decorations.len()))]
pub fn render_svg(scene: &Scene, frame: FrameIndex) -> StarbrightResult<String> {
    scene.validate()?;
    let env = scene.environment();
    let ctx = SampleCtx::new(frame, scene.fps);

    let (w, h) = (f64::from(scene.canvas.width), f64::from(scene.canvas.height));
    let mut root = SvgNode::new("svg")
        .num("width", w)
        .num("height", h)
        .attr("viewBox", format!("0 0 {w} {h}"));
    if let Some(bg) = scene.background {
        root = root.child(
            SvgNode::new("rect")
                .num("width", w)
                .num("height", h)
                .attr("fill", bg.hex()),
        );
    }
    for d in &scene.decorations {
        let node = decoration_node(scene, d, &env, ctx)?;
        root = root.child(
            node.attr("data-decoration", &d.id)
                .transformed(Affine::translate((d.x, d.y))),
        );
    }
    Ok(root.to_document())
}

/// Render `scene` at `frame` to pixels at the scene's canvas size.
pub fn render_frame(scene: &Scene, frame: FrameIndex) -> StarbrightResult<FrameRGBA> {
    let svg = render_svg(scene, frame)?;
    rasterize(&svg, scene.canvas)
}

/// Render every frame of `range` as `frame_00000.png`, ... under `out_dir`.
///
/// Files are named by absolute frame index. Returns the written paths in frame order.
#[tracing::instrument(skip(scene), fields(frames = range.len_frames()))]
pub fn render_sequence(
    scene: &Scene,
    range: FrameRange,
    out_dir: &Path,
) -> StarbrightResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(range.len_frames() as usize);
    for frame in range.iter() {
        let path = out_dir.join(format!("frame_{:05}.png", frame.0));
        write_png(&render_frame(scene, frame)?, &path)?;
        written.push(path);
    }
    tracing::debug!(count = written.len(), dir = %out_dir.display(), "wrote frame sequence");
    Ok(written)
}

fn decoration_node(
    scene: &Scene,
    d: &Decoration,
    env: &Environment,
    ctx: SampleCtx,
) -> StarbrightResult<SvgNode> {
    let animate = env.animates();
    let mut rng = Rng64::fork(scene.seed, &d.id);
    tracing::debug!(id = %d.id, kind = d.kind.name(), "drawing decoration");

    let node = match &d.kind {
        DecorationKind::Divider(spec) => spec.to_node(f64::from(scene.canvas.width)),
        DecorationKind::Starburst(spec) => {
            let pose = if animate {
                StarburstMotion::new(scene.fps)?.sample(ctx)?
            } else {
                StarburstPose::REST
            };
            spec.to_node(pose)
        }
        DecorationKind::Orbit(spec) => {
            OrbitSystem::resolve(spec.clone(), scene.fps, &mut rng)?.to_node(&d.id, ctx, animate)?
        }
        DecorationKind::OrbitalSystem(spec) => {
            OrbitalSystem::new(spec.clone(), scene.fps)?.to_node(ctx, animate)?
        }
        DecorationKind::Starfield(spec) => {
            let surface: Canvas = spec.surface(scene.canvas);
            let mut field = Starfield::generate(surface, rng.next_u64());
            field.seek(ctx.frame.0);
            field.to_node(&d.id, animate)
        }
        DecorationKind::Parallax(spec) => {
            ParallaxBackground::generate(*spec, rng.next_u64()).to_node(&d.id, scene.canvas, env)
        }
        DecorationKind::Comet(spec) => {
            Comet::resolve(*spec, scene.fps, &mut rng)?.to_node(scene.canvas, ctx, animate)?
        }
        DecorationKind::AtomicLoader(spec) => {
            AtomicLoader::new(*spec, scene.fps)?.to_node(ctx, animate)?
        }
    };
    Ok(node)
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
