use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::core::Canvas,
    foundation::error::{StarbrightError, StarbrightResult},
};

/// One rendered frame of RGBA8 pixels, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to straight alpha, as image encoders expect.
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            demultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }
}

/// Parse SVG markup and draw it onto a `canvas`-sized pixmap, scaled to fit.
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn rasterize(svg: &str, canvas: Canvas) -> StarbrightResult<FrameRGBA> {
    if canvas.is_empty() {
        return Err(StarbrightError::render("canvas width/height must be > 0"));
    }
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| StarbrightError::render("failed to allocate pixmap"))?;
    let sx = (canvas.width as f32) / tree.size().width();
    let sy = (canvas.height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}

/// Encode a frame as PNG at `path`, creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> StarbrightResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let straight = frame.clone().into_straight();
    image::save_buffer_with_format(
        path,
        &straight.data,
        straight.width,
        straight.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
